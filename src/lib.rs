//! protrade - Terminal trading journal
//!
//! Records trades with their context, outcome and review notes, derives
//! dashboard statistics, exports CSV and can ask an AI coach for feedback.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ProtradeError;
