//! Error types for protrade

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for protrade
#[derive(Debug, Error)]
pub enum ProtradeError {
    #[error("Not a protrade directory: {0}")]
    NotProtradeDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id: {0}")]
    AmbiguousId(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Entry store used before it was loaded")]
    StoreNotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("AI service error: {0}")]
    Ai(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ProtradeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ProtradeError::NotProtradeDirectory(_) => 2,
            ProtradeError::InvalidEntry(_) => 3,
            ProtradeError::EntryNotFound(_) | ProtradeError::AmbiguousId(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ProtradeError::NotProtradeDirectory(path) => {
                format!(
                    "Not a protrade directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'protrade init' in this directory to create a new journal\n\
                    • Navigate to an existing protrade directory\n\
                    • Set PROTRADE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ProtradeError::EntryNotFound(id) => {
                format!(
                    "No entry matches id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'protrade list' to see entry ids\n\
                    • A unique prefix of the id is enough (e.g., the first 8 characters)",
                    id
                )
            }
            ProtradeError::AmbiguousId(id) => {
                format!(
                    "More than one entry starts with '{}'\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'protrade list' to see full ids",
                    id
                )
            }
            ProtradeError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Required fields: --plan, --symbol, --date, --logic\n\
                    Example: protrade add --plan 001 --symbol XAUUSD --logic 'Breakout retest'",
                    msg
                )
            }
            ProtradeError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: protrade config model gemini-2.5-flash",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ProtradeError
pub type Result<T> = std::result::Result<T, ProtradeError>;
