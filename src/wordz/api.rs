//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI: the CLI subcommands, the interactive menu and the
//! operation-list bridge all go through [`WordzApi`].
//!
//! The API:
//! - **Dispatches** to the appropriate command function
//! - **Owns the store handle** and its lifecycle (`open` on construction,
//!   [`WordzApi::shutdown`] on exit)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic. Configuration is handled
//! by [`commands::config`] directly, since it must work even when the
//! dictionary file cannot be opened.
//!
//! ## Generic Over StorageBackend
//!
//! `WordzApi<B: StorageBackend>`:
//! - Production: `WordzApi<FsBackend>`
//! - Testing: `WordzApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The main API facade for wordz operations.
pub struct WordzApi<B: StorageBackend> {
    store: Arc<DictionaryStore<B>>,
    fuzzy_limit: usize,
}

impl<B: StorageBackend> WordzApi<B> {
    pub fn new(store: Arc<DictionaryStore<B>>, fuzzy_limit: usize) -> Self {
        Self { store, fuzzy_limit }
    }

    /// Open the dictionary at `db_path` and wrap it.
    pub fn open(backend: B, db_path: impl Into<PathBuf>, fuzzy_limit: usize) -> Result<Self> {
        let store = DictionaryStore::open(backend, db_path)?;
        Ok(Self::new(Arc::new(store), fuzzy_limit))
    }

    pub fn list_words(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_word(
        &self,
        word: &str,
        meaning: &str,
        replace: bool,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, word, meaning, replace)
    }

    pub fn remove_word(&self, word: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&self.store, word)
    }

    /// Search with the configured suggestion limit.
    pub fn search_word(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, self.fuzzy_limit)
    }

    pub fn search_word_with_limit(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, limit)
    }

    pub fn apply_intents(
        &self,
        intents: &[commands::apply::Intent],
    ) -> Result<commands::CmdResult> {
        commands::apply::run(&self.store, intents, self.fuzzy_limit)
    }

    /// Whether the normalized `word` is in the dictionary.
    pub fn word_exists(&self, word: &str) -> bool {
        self.store.exists(&crate::model::normalize_word(word))
    }

    /// Meaning of the normalized `word`, without fuzzy fallback.
    pub fn meaning_of(&self, word: &str) -> Option<String> {
        self.store.get(&crate::model::normalize_word(word))
    }

    /// Persist the dictionary to the path it was opened from.
    pub fn shutdown(&self) -> Result<()> {
        self.store.shutdown()
    }

    /// Shared handle on the store, e.g. for a signal handler that must save.
    pub fn store_handle(&self) -> Arc<DictionaryStore<B>> {
        Arc::clone(&self.store)
    }

    pub fn db_path(&self) -> &Path {
        self.store.path()
    }

    pub fn fuzzy_limit(&self) -> usize {
        self.fuzzy_limit
    }
}

pub use crate::commands::apply::{parse_intents, Intent};
pub use commands::{CmdMessage, CmdResult, Lookup, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    const DB: &str = "memory://dict.db";

    fn api_with(raw: &str) -> WordzApi<MemBackend> {
        let backend = MemBackend::new();
        backend.insert_raw(DB, raw);
        WordzApi::open(backend, DB, 3).unwrap()
    }

    #[test]
    fn open_loads_existing_dictionary() {
        let api = api_with(r#"{"cat": "a small feline"}"#);
        assert!(api.word_exists("CAT"));
        assert_eq!(api.meaning_of("cat").as_deref(), Some("a small feline"));
        assert_eq!(api.db_path(), Path::new(DB));
    }

    #[test]
    fn dispatches_add_remove_list() {
        let api = api_with("{}");
        api.add_word("Dog", "a domesticated canine", false).unwrap();
        api.add_word("cat", "a small feline", false).unwrap();

        let listed = api.list_words().unwrap().listed_entries;
        assert_eq!(listed[0].word, "cat");
        assert_eq!(listed[1].word, "dog");

        api.remove_word("dog").unwrap();
        assert!(!api.word_exists("dog"));
    }

    #[test]
    fn search_uses_configured_limit() {
        let api = api_with(r#"{"aa": "1", "ab": "2", "ac": "3", "ad": "4"}"#);
        let result = api.search_word("zz").unwrap();
        match &result.lookups[0] {
            Lookup::Suggestions { matches, .. } => assert_eq!(matches.len(), 3),
            other => panic!("expected suggestions, got {:?}", other),
        }

        let result = api.search_word_with_limit("zz", 1).unwrap();
        match &result.lookups[0] {
            Lookup::Suggestions { matches, .. } => assert_eq!(matches.len(), 1),
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn shutdown_persists_through_shared_handle() {
        let api = api_with("{}");
        let handle = api.store_handle();
        handle.set("owl", "a bird");

        api.shutdown().unwrap();

        let raw = handle.backend().raw(Path::new(DB)).unwrap();
        assert!(raw.contains("owl"));
    }

    #[test]
    fn apply_runs_intents() {
        let api = api_with("{}");
        let intents = parse_intents(r#"[{"operation": "add", "word": "Owl", "meaning": "bird"}]"#)
            .unwrap();
        api.apply_intents(&intents).unwrap();
        assert_eq!(api.meaning_of("owl").as_deref(), Some("bird"));
    }
}
