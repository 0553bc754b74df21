use crate::commands::{CmdResult, Lookup};
use crate::error::Result;
use crate::matcher;
use crate::model::{normalize_word, Entry, WordMatch};
use crate::store::{DictionaryStore, StorageBackend};

/// Exact lookup, falling back to the `limit` closest words on a miss.
///
/// The matcher only runs when the exact lookup misses. A miss with nothing
/// to suggest (empty dictionary, or `limit == 0`) is [`Lookup::NotFound`].
pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    query: &str,
    limit: usize,
) -> Result<CmdResult> {
    let query = normalize_word(query);

    if let Some(meaning) = store.get(&query) {
        return Ok(CmdResult::default().with_lookup(Lookup::Found(Entry::new(query, meaning))));
    }

    let keys = store.keys();
    let similar = matcher::find_similar(&query, &keys, limit);

    // A suggestion may have been removed since the key snapshot was taken.
    let matches: Vec<WordMatch> = similar
        .into_iter()
        .filter_map(|word| {
            let meaning = store.get(&word)?;
            let distance = matcher::levenshtein(&query, &word);
            Some(WordMatch {
                word,
                meaning,
                distance,
            })
        })
        .collect();

    let lookup = if matches.is_empty() {
        Lookup::NotFound { query }
    } else {
        Lookup::Suggestions { query, matches }
    };
    Ok(CmdResult::default().with_lookup(lookup))
}
