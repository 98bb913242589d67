//! Durable slot holding the serialized entry collection

use crate::error::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence port for the entry store.
///
/// The slot holds one text document. `load` returns `None` when nothing has
/// been written yet.
pub trait EntryStorage {
    fn load(&self) -> Result<Option<String>>;

    /// Replace the whole document
    fn persist(&self, document: &str) -> Result<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        FileStorage { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn persist(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.protrade-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, document)?;

        let replaced = (|| {
            if cfg!(windows) && self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            fs::rename(&tmp_path, &self.path)
        })();

        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

/// In-process slot, used by tests to observe what the store writes
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Start with the given document already in the slot
    pub fn with_document(document: impl Into<String>) -> Self {
        MemoryStorage {
            slot: RefCell::new(Some(document.into())),
            writes: RefCell::new(0),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of times `persist` has been called
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl EntryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn persist(&self, document: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(document.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: EntryStorage + ?Sized> EntryStorage for &S {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn persist(&self, document: &str) -> Result<()> {
        (**self).persist(document)
    }
}
