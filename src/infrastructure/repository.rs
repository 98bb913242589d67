//! File system repository

use crate::error::{ProtradeError, Result};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

const PROTRADE_DIR: &str = ".protrade";
const ENTRIES_FILE: &str = "entries.json";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .protrade/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .protrade/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .protrade directory exists
    fn is_initialized(&self) -> bool;

    /// Create .protrade directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks PROTRADE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PROTRADE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_protrade_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ProtradeError::Config(format!(
                    "PROTRADE_ROOT is set to '{}' but no .protrade directory found. \
                    Run 'protrade init' in that directory or unset PROTRADE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_protrade_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(ProtradeError::NotProtradeDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_protrade_dir(path: &Path) -> bool {
        path.join(PROTRADE_DIR).is_dir()
    }

    /// Durable slot for this journal's entries
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(PROTRADE_DIR).join(ENTRIES_FILE))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_protrade_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let protrade_dir = self.root.join(PROTRADE_DIR);

        if protrade_dir.exists() {
            return Err(ProtradeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&protrade_dir)?;
        Ok(())
    }
}
