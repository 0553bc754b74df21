//! Applies a list of parsed operations, as produced by an external
//! natural-language bridge:
//!
//! ```json
//! [
//!   {"operation": "add", "word": "gato", "meaning": "cat (Spanish)"},
//!   {"operation": "remove", "word": "dog"},
//!   {"operation": "search", "word": "gatto"}
//! ]
//! ```
//!
//! Operations run in order against the same store the CLI uses. Adds replace
//! existing meanings. The first failing operation stops the run; earlier
//! operations stay applied in memory.

use crate::commands::{add, remove, search, CmdResult};
use crate::error::{Result, WordzError};
use crate::store::{DictionaryStore, StorageBackend};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum Intent {
    Add { word: String, meaning: String },
    Remove { word: String },
    Search { word: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntentList {
    Many(Vec<Intent>),
    One(Intent),
}

/// Parse a JSON array of intents, or a single intent object.
pub fn parse_intents(input: &str) -> Result<Vec<Intent>> {
    // untagged errors are opaque, so retry the array form for the diagnostic
    match serde_json::from_str::<IntentList>(input) {
        Ok(IntentList::Many(intents)) => Ok(intents),
        Ok(IntentList::One(intent)) => Ok(vec![intent]),
        Err(_) => {
            let err = serde_json::from_str::<Vec<Intent>>(input)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unrecognized operation list".to_string());
            Err(WordzError::Api(format!("Invalid operation list: {}", err)))
        }
    }
}

pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    intents: &[Intent],
    limit: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for intent in intents {
        debug!("applying {:?}", intent);
        let step = match intent {
            Intent::Add { word, meaning } => add::run(store, word, meaning, true)?,
            Intent::Remove { word } => remove::run(store, word)?,
            Intent::Search { word } => search::run(store, word, limit)?,
        };
        result.absorb(step);
    }
    Ok(result)
}
