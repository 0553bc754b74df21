//! # Storage Layer
//!
//! The dictionary lives in memory inside a [`DictionaryStore`] and meets the
//! disk at exactly two points: `load` (disk → memory) and `save` (memory → disk).
//! Raw I/O is abstracted behind the [`StorageBackend`] trait so the store can be
//! exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: Production file-based storage
//!   - One JSON object per dictionary file, `{"word": "meaning", ...}`
//!   - Writes go to a temporary sibling file which is then renamed over the target
//!
//! - [`memory::MemBackend`]: In-memory storage for testing
//!   - Keeps the raw JSON text per path, so malformed files can be planted
//!   - Can simulate write failures
//!
//! ## Merge Policy
//!
//! Loading merges the file into whatever is already in memory. Values from the
//! file win for keys present in both; keys only in memory are kept. A key that
//! already exists keeps its position, new keys are appended in file order.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "cat": "a small domesticated feline",
//!   "dog": "a domesticated canine"
//! }
//! ```
//!
//! No envelope, no version field. Anything other than a flat object of string
//! values is rejected with [`WordzError::Parse`].

use crate::error::{Result, WordzError};
use crate::model::Entries;
use std::path::Path;

pub mod dictionary;
pub mod fs;
pub mod memory;

pub use dictionary::DictionaryStore;

/// Abstract interface for raw dictionary persistence.
///
/// Backends move whole dictionaries in and out of storage. Merging, locking
/// and lifecycle belong to [`DictionaryStore`].
pub trait StorageBackend {
    /// Read the dictionary stored at `path`.
    /// Returns Ok(None) if nothing is stored there.
    fn read_entries(&self, path: &Path) -> Result<Option<Entries>>;

    /// Replace whatever is stored at `path` with `entries`.
    fn write_entries(&self, path: &Path, entries: &Entries) -> Result<()>;
}

pub(crate) fn parse_entries(path: &Path, content: &str) -> Result<Entries> {
    serde_json::from_str(content).map_err(|source| WordzError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn serialize_entries(entries: &Entries) -> Result<String> {
    serde_json::to_string_pretty(entries).map_err(WordzError::Serialization)
}
