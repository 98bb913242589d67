//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod gemini;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use gemini::GeminiCoach;
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{EntryStorage, FileStorage, MemoryStorage};
