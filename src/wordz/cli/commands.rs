//! # CLI Layer
//!
//! This module is **one possible UI client** for wordz. It is the only place
//! that knows about the terminal, exit codes and argument parsing; everything
//! else goes through [`WordzApi`].
//!
//! ## Lifecycle
//!
//! 1. Parse arguments and initialize logging.
//! 2. `config` runs on its own, before any dictionary is opened.
//! 3. Resolve the dictionary path (`--db-file`, then the configured
//!    `db-file`, then `wordz.db` next to the executable) and open it. A file
//!    that fails to parse aborts here, before anything could overwrite it.
//! 4. Install the Ctrl-C handler, which saves and exits.
//! 5. Dispatch the subcommand (the interactive menu when none is given).
//! 6. Save the dictionary, whether or not the command succeeded.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Opens the dictionary and builds `AppContext`
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::menu::Menu;
use super::render::{print_config, print_entries, print_lookups, print_messages};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use wordz::api::{parse_intents, WordzApi};
use wordz::commands::config::{self as config_cmd, ConfigAction};
use wordz::config::WordzConfig;
use wordz::error::Result;
use wordz::store::fs::FsBackend;

const CONFIG_DIR_ENV: &str = "WORDZ_CONFIG_DIR";
const DEFAULT_DB_NAME: &str = "wordz.db";
/// Exit status after saving on Ctrl-C.
const INTERRUPTED_EXIT: i32 = 130;

struct AppContext {
    api: WordzApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    debug!("{:?}", cli);

    let config_dir = config_dir();

    // Config must work even when the dictionary itself is unreadable
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let config = match WordzConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
            WordzConfig::default()
        }
    };

    let ctx = init_context(&cli, &config)?;
    install_interrupt_handler(&ctx);

    let outcome = match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add {
            word,
            meaning,
            force,
        }) => handle_add(&ctx, &word, &meaning.join(" "), force),
        Some(Commands::Remove { word }) => handle_remove(&ctx, &word),
        Some(Commands::Search { word, limit }) => handle_search(&ctx, &word, limit),
        Some(Commands::Apply { file }) => handle_apply(&ctx, file),
        Some(Commands::Menu) | None => handle_menu(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
    };

    let saved = ctx.api.shutdown();
    if let Err(e) = &outcome {
        error!("command failed: {}", e);
    }
    outcome?;
    saved
}

fn init_context(cli: &Cli, config: &WordzConfig) -> Result<AppContext> {
    let db_path = cli
        .db_file
        .clone()
        .or_else(|| config.db_file.clone())
        .unwrap_or_else(default_db_path);
    debug!("using dictionary {}", db_path.display());

    let api = WordzApi::open(FsBackend::new(), db_path, config.fuzzy_limit)?;
    Ok(AppContext { api })
}

fn install_interrupt_handler(ctx: &AppContext) {
    let store = ctx.api.store_handle();
    let installed = ctrlc::set_handler(move || {
        info!("interrupted, saving dictionary");
        match store.shutdown() {
            Ok(()) => std::process::exit(INTERRUPTED_EXIT),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });
    if let Err(e) = installed {
        warn!("could not install Ctrl-C handler: {}", e);
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_words()?;
    let mut out = io::stdout().lock();
    print_entries(&mut out, &result.listed_entries)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(ctx: &AppContext, word: &str, meaning: &str, force: bool) -> Result<()> {
    let result = ctx.api.add_word(word, meaning, force)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_remove(ctx: &AppContext, word: &str) -> Result<()> {
    let result = ctx.api.remove_word(word)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, word: &str, limit: Option<usize>) -> Result<()> {
    let result = match limit {
        Some(limit) => ctx.api.search_word_with_limit(word, limit)?,
        None => ctx.api.search_word(word)?,
    };
    print_lookups(&mut io::stdout().lock(), &result.lookups)?;
    Ok(())
}

fn handle_apply(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let input = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let intents = parse_intents(&input)?;
    debug!("applying {} operations", intents.len());
    let result = ctx.api.apply_intents(&intents)?;

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    print_lookups(&mut out, &result.lookups)?;
    Ok(())
}

fn handle_menu(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Menu::new(&ctx.api, stdin, stdout).run()
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = config_cmd::run(config_dir, action)?;
    let mut out = io::stdout().lock();
    if show_all {
        if let Some(config) = &result.config {
            print_config(&mut out, config)?;
        }
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "wordz", "wordz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".wordz"))
}

/// `wordz.db` in the directory of the running executable.
fn default_db_path() -> PathBuf {
    std::env::current_exe()
        .and_then(|exe| exe.canonicalize())
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DB_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_NAME))
}
