use super::StorageBackend;
use crate::error::Result;
use crate::model::{Entries, Entry};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The word → meaning mapping with its load/save lifecycle.
///
/// One store is constructed per process and shared by handle (usually an
/// `Arc`). It is populated by [`load`](Self::load) at startup, mutated in place
/// by [`set`](Self::set) and [`remove`](Self::remove), and flushed by
/// [`shutdown`](Self::shutdown) on exit.
///
/// Keys are exact and case-sensitive: callers normalize before calling.
/// Snapshots ([`keys`](Self::keys), [`all`](Self::all)) come back in insertion
/// order.
///
/// Reads share a read lock, writes and load merges take the write lock. File
/// I/O never happens while the lock is held: load parses before locking, save
/// copies the mapping and writes after unlocking.
pub struct DictionaryStore<B: StorageBackend> {
    backend: B,
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl<B: StorageBackend> DictionaryStore<B> {
    /// An empty store bound to `path`. Nothing is read until [`load`](Self::load).
    pub fn new(backend: B, path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            path: path.into(),
            entries: RwLock::new(Entries::new()),
        }
    }

    /// Create a store bound to `path` and load whatever is stored there.
    pub fn open(backend: B, path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(backend, path);
        store.load(&store.path)?;
        Ok(store)
    }

    /// The path the store was opened with, used by [`shutdown`](Self::shutdown).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Merge the dictionary stored at `path` into memory.
    ///
    /// Absent storage leaves the mapping unchanged. Stored values overwrite
    /// in-memory values for the same word; words only in memory are kept.
    /// Returns the number of entries read.
    pub fn load(&self, path: &Path) -> Result<usize> {
        debug!("loading dictionary from {}", path.display());
        let Some(loaded) = self.backend.read_entries(path)? else {
            debug!("no dictionary at {}, keeping current entries", path.display());
            return Ok(0);
        };

        let count = loaded.len();
        let mut entries = self.entries.write();
        entries.extend(loaded);
        debug!("loaded {} entries ({} total)", count, entries.len());
        Ok(count)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Insert or overwrite. Returns the previous meaning, if any.
    /// An overwritten word keeps its position.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.write().insert(key.into(), value.into())
    }

    /// Remove a word, returning its meaning. Absent words are a no-op.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().shift_remove(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Snapshot of all words, insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Snapshot of all entries, insertion order.
    pub fn all(&self) -> Vec<Entry> {
        self.entries
            .read()
            .iter()
            .map(|(word, meaning)| Entry::new(word.clone(), meaning.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Write the whole mapping to `path`, replacing what was there.
    pub fn save(&self, path: &Path) -> Result<()> {
        let snapshot = self.entries.read().clone();
        debug!("saving {} entries to {}", snapshot.len(), path.display());
        self.backend.write_entries(path, &snapshot)
    }

    /// Save to the path the store was opened with. Every call writes.
    pub fn shutdown(&self) -> Result<()> {
        debug!("shutting down dictionary store");
        self.save(&self.path)
    }
}
