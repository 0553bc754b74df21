use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The in-memory dictionary: word → meaning, iterated in insertion order.
pub type Entries = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

/// A fuzzy-search suggestion resolved against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub meaning: String,
    pub distance: usize,
}

/// Words are keyed lowercase. The store never applies this itself.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
