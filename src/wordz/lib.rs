//! # Wordz Architecture
//!
//! Wordz is a **personal dictionary library**: a persisted word → meaning map
//! with fuzzy lookup for near-misses. The `wordz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, rendering, logging setup  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store handle         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Caller-side policy: lowercase words, non-empty meanings  │
//! │  - Exact lookup first, fuzzy matching only on a miss        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Storage Layer (store/)   │ │  Matcher (matcher.rs)         │
//! │  - DictionaryStore        │ │  - Levenshtein distance       │
//! │  - FsBackend / MemBackend │ │  - stable ranking of keys     │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Ordering
//!
//! The store keeps words in insertion order. That order is what the matcher
//! sees, so it decides ties between equally distant words. Listings sort
//! lexicographically for display only.
//!
//! ## Lifecycle
//!
//! One [`store::DictionaryStore`] per process, created by `open` (which loads
//! the dictionary file), shared by `Arc`, and flushed by `shutdown`. Nothing
//! touches the file in between.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The dictionary store and its storage backends
//! - [`matcher`]: Edit distance and fuzzy ranking
//! - [`model`]: Core data types (`Entry`, `WordMatch`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive menu and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod store;
