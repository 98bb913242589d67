//! Initialize journal use case

use crate::application::EntryStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    // Start with an empty collection in the slot
    EntryStore::open(repo.storage())?.persist()?;

    println!("Initialized protrade journal at {}", path.display());

    Ok(())
}
