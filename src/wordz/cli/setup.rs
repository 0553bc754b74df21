use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides `--log-level` with a full tracing filter, e.g. `WORDZ_LOG=wordz=trace`.
const LOG_ENV: &str = "WORDZ_LOG";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wordz", bin_name = "wordz", version)]
#[command(about = "A personal dictionary with fuzzy lookup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the dictionary file (defaults to wordz.db next to the executable)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub db_file: Option<PathBuf>,

    /// Set the logging level
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List words in the dictionary
    #[command(alias = "ls")]
    List,

    /// Add a word to the dictionary
    #[command(alias = "a")]
    Add {
        /// The word to add
        word: String,

        /// Its meaning
        #[arg(required = true, num_args = 1..)]
        meaning: Vec<String>,

        /// Replace the meaning if the word already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Remove a word from the dictionary
    #[command(alias = "rm")]
    Remove { word: String },

    /// Search a word, suggesting similar ones when it is missing
    #[command(alias = "s")]
    Search {
        word: String,

        /// How many similar words to suggest (at least 1)
        #[arg(short = 'n', long, value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// Apply a JSON list of add/remove/search operations
    Apply {
        /// File to read operations from (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (db-file, fuzzy-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (the default)
    Menu,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("`{}` is not a number", s)),
    }
}

pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
