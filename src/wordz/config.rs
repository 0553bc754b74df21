use crate::error::{Result, WordzError};
use crate::matcher;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for wordz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordzConfig {
    /// Dictionary file used when `--db-file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_file: Option<PathBuf>,

    /// How many suggestions a failed search offers
    #[serde(default = "default_fuzzy_limit")]
    pub fuzzy_limit: usize,
}

fn default_fuzzy_limit() -> usize {
    matcher::DEFAULT_LIMIT
}

impl Default for WordzConfig {
    fn default() -> Self {
        Self {
            db_file: None,
            fuzzy_limit: default_fuzzy_limit(),
        }
    }
}

impl WordzConfig {
    pub const KEYS: [&'static str; 2] = ["db-file", "fuzzy-limit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WordzError::Io)?;
        let config: WordzConfig =
            serde_json::from_str(&content).map_err(WordzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WordzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WordzError::Serialization)?;
        fs::write(config_path, content).map_err(WordzError::Io)?;
        Ok(())
    }

    /// Display value for a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "db-file" => Some(
                self.db_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "fuzzy-limit" => Some(self.fuzzy_limit.to_string()),
            _ => None,
        }
    }

    /// Set a config key from its string form. An empty `db-file` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "db-file" => {
                self.db_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "fuzzy-limit" => {
                let limit: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid fuzzy-limit: {} (expected a number)", value))?;
                if limit == 0 {
                    return Err("fuzzy-limit must be at least 1".to_string());
                }
                self.fuzzy_limit = limit;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
