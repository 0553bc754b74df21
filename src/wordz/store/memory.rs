use super::{parse_entries, serialize_entries, StorageBackend};
use crate::error::{Result, WordzError};
use crate::model::Entries;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory storage backend for testing.
///
/// Keeps the serialized JSON text per path rather than parsed entries, so
/// reads go through the same parsing as [`super::fs::FsBackend`].
#[derive(Debug, Default)]
pub struct MemBackend {
    files: Mutex<HashMap<PathBuf, String>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Plant raw file content at `path`, valid JSON or not.
    pub fn insert_raw(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().insert(path.into(), content.into());
    }

    /// The raw content last written to `path`.
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.files.lock().get(path).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_entries(&self, path: &Path) -> Result<Option<Entries>> {
        let content = match self.files.lock().get(path) {
            Some(content) => content.clone(),
            None => return Ok(None),
        };
        parse_entries(path, &content).map(Some)
    }

    fn write_entries(&self, path: &Path, entries: &Entries) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(WordzError::Store("Simulated write error".to_string()));
        }
        let content = serialize_entries(entries)?;
        self.files.lock().insert(path.to_path_buf(), content);
        Ok(())
    }
}
