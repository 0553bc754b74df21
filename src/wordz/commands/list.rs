use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};

/// All entries, sorted by word for display.
pub fn run<B: StorageBackend>(store: &DictionaryStore<B>) -> Result<CmdResult> {
    let mut entries = store.all();
    entries.sort_by(|a, b| a.word.cmp(&b.word));
    Ok(CmdResult::default().with_listed_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::MemBackend;

    #[test]
    fn sorts_lexicographically() {
        let store = DictionaryStore::new(MemBackend::new(), "memory://dict.db");
        store.set("pear", "fruit");
        store.set("apple", "fruit");
        store.set("carrot", "root");

        let result = run(&store).unwrap();
        let words: Vec<_> = result.listed_entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "carrot", "pear"]);

        // listing leaves the store's own order alone
        assert_eq!(store.keys(), vec!["pear", "apple", "carrot"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = DictionaryStore::new(MemBackend::new(), "memory://dict.db");
        let result = run(&store).unwrap();
        assert!(result.listed_entries.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn carries_meanings() {
        let store = DictionaryStore::new(MemBackend::new(), "memory://dict.db");
        store.set("cat", "a small feline");
        let result = run(&store).unwrap();
        assert_eq!(result.listed_entries, vec![Entry::new("cat", "a small feline")]);
    }
}
