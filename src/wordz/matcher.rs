//! # Fuzzy Matching
//!
//! Ranks candidate words by Levenshtein distance to a query. Used only after an
//! exact lookup misses, and only ever on a snapshot of the store's keys: nothing
//! here touches the store.
//!
//! Ranking is ascending by distance. Candidates at the same distance keep the
//! order they were given in, which for store snapshots is insertion order. Every
//! candidate is scored; there is no cutoff besides the result limit.

use tracing::debug;

/// Number of suggestions returned when the caller does not ask for another limit.
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub distance: usize,
}

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`. Characters are Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;

    // (|a|+1) x (|b|+1), row-major
    let mut table = vec![0usize; (a.len() + 1) * width];
    for (i, cell) in table.iter_mut().step_by(width).enumerate() {
        *cell = i;
    }
    for (j, cell) in table.iter_mut().take(width).enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[a.len() * width + b.len()]
}

/// Score every key against `query`, closest first. Ties keep input order.
pub fn rank<S: AsRef<str>>(query: &str, keys: &[S]) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = keys
        .iter()
        .map(|key| ScoredWord {
            word: key.as_ref().to_string(),
            distance: levenshtein(query, key.as_ref()),
        })
        .collect();
    // sort_by_key is stable
    scored.sort_by_key(|s| s.distance);
    debug!("ranked {} candidates for {:?}: {:?}", scored.len(), query, scored);
    scored
}

/// The `limit` closest keys to `query`.
pub fn find_similar<S: AsRef<str>>(query: &str, keys: &[S], limit: usize) -> Vec<String> {
    let mut ranked = rank(query, keys);
    ranked.truncate(limit);
    ranked.into_iter().map(|s| s.word).collect()
}
