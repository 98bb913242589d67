//! Export entries use case

use crate::domain::{export_csv, export_filename, JournalEntry};
use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the collection as a dated CSV file into `dir`
pub fn export_entries(entries: &[JournalEntry], dir: &Path, today: NaiveDate) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_filename(today));
    fs::write(&path, export_csv(entries))?;

    log::info!("Exported {} entries to {}", entries.len(), path.display());
    Ok(path)
}
