use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{normalize_word, Entry};
use crate::store::{DictionaryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, word: &str) -> Result<CmdResult> {
    let word = normalize_word(word);
    let mut result = CmdResult::default();

    match store.remove(&word) {
        Some(meaning) => {
            result.add_message(CmdMessage::success(format!("Removed: {}", word)));
            Ok(result.with_affected_entries(vec![Entry::new(word, meaning)]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "{} is not in the dictionary",
                word
            )));
            Ok(result)
        }
    }
}
