//! Domain layer - Business logic and domain models

pub mod coach;
pub mod draft;
pub mod entry;
pub mod export;
pub mod stats;

pub use coach::{build_prompt, TradeCoach};
pub use draft::EntryDraft;
pub use entry::{JournalEntry, MarketCondition, ResultType, TradeRecord, TradeSide};
pub use export::{export_csv, export_filename};
pub use stats::{compute_stats, DashboardStats, RecentTrade};
