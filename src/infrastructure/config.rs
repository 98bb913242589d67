//! Configuration management

use crate::error::{ProtradeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generative model used for trade feedback
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub created: DateTime<Utc>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_base: default_api_base(),
            created: Utc::now(),
        }
    }

    /// Load config from .protrade/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".protrade").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProtradeError::NotProtradeDirectory(path.to_path_buf())
            } else {
                ProtradeError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ProtradeError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .protrade/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let protrade_dir = path.join(".protrade");
        let config_path = protrade_dir.join("config.toml");

        if !protrade_dir.exists() {
            fs::create_dir(&protrade_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ProtradeError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
