use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordzError};
use crate::model::{normalize_word, Entry};
use crate::store::{DictionaryStore, StorageBackend};

/// Add `word` with `meaning`.
///
/// The word is normalized to lowercase. Empty words and meanings are rejected.
/// An existing word is only replaced when `replace` is set; otherwise the
/// result carries a warning and the store is untouched.
pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    word: &str,
    meaning: &str,
    replace: bool,
) -> Result<CmdResult> {
    let word = normalize_word(word);
    if word.is_empty() {
        return Err(WordzError::Api("Word cannot be empty".into()));
    }
    if meaning.trim().is_empty() {
        return Err(WordzError::Api("Meaning cannot be empty".into()));
    }

    let mut result = CmdResult::default();

    if let Some(current) = store.get(&word) {
        if !replace {
            result.add_message(CmdMessage::warning(format!(
                "{} already exists in the dictionary. Current meaning: {}",
                word, current
            )));
            return Ok(result);
        }
    }

    let previous = store.set(word.clone(), meaning);
    result.add_message(match previous {
        Some(_) => CmdMessage::success(format!("Updated: {}", word)),
        None => CmdMessage::success(format!("Added: {}", word)),
    });
    Ok(result.with_affected_entries(vec![Entry::new(word, meaning)]))
}
