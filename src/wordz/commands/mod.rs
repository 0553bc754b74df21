use crate::config::WordzConfig;
use crate::model::{Entry, WordMatch};

pub mod add;
pub mod apply;
pub mod config;
pub mod list;
pub mod remove;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of looking a word up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exact hit. No fuzzy matching was done.
    Found(Entry),
    /// Exact miss; closest words, best first.
    Suggestions {
        query: String,
        matches: Vec<WordMatch>,
    },
    /// Exact miss and nothing to suggest (empty dictionary).
    NotFound { query: String },
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    pub lookups: Vec<Lookup>,
    pub config: Option<WordzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookups.push(lookup);
        self
    }

    pub fn with_config(mut self, config: WordzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Append everything `other` produced, keeping order.
    pub fn absorb(&mut self, other: CmdResult) {
        self.affected_entries.extend(other.affected_entries);
        self.listed_entries.extend(other.listed_entries);
        self.lookups.extend(other.lookups);
        if other.config.is_some() {
            self.config = other.config;
        }
        self.messages.extend(other.messages);
    }
}
