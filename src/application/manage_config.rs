//! Config management use case

use crate::error::{ProtradeError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "model" => Ok(config.model),
            "api_key_env" => Ok(config.api_key_env),
            "api_base" => Ok(config.api_base),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ProtradeError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: model, api_key_env, api_base, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let value = value.trim();

        if value.is_empty() && key != "created" {
            return Err(ProtradeError::Config(format!(
                "Value for '{}' cannot be empty",
                key
            )));
        }

        match key {
            "model" => config.model = value.to_string(),
            "api_key_env" => config.api_key_env = value.to_string(),
            "api_base" => config.api_base = value.to_string(),
            "created" => {
                return Err(ProtradeError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ProtradeError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: model, api_key_env, api_base",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
