//! Application layer - Use cases and orchestration

pub mod analyze;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod store;

pub use analyze::{AnalyzeService, Feedback};
pub use export::export_entries;
pub use manage_config::ConfigService;
pub use store::EntryStore;
