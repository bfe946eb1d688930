//! mirrorsearch - word indexing and search for static wiki mirrors
//!
//! A mirrored wiki is published as static files, so search has to
//! be precomputed: every word gets a JSON file listing the pages it
//! appears on, and the search page fetches the file named after the
//! query.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - storage (raw page records, word index files)
//!   - indexer (tokenizer, vocabulary, index builder, merging)
//!   - search (query client, highlighting)
//!   - services (unified service container)
//!
//! - **cli**: Command line adapter (depends on core)
//!
//! # Key Features
//!
//! - Script-aware tokenizer for Hangul, Hanja and Latin text
//! - Parallel corpus scan with deterministic output
//! - One self-describing index file per word
//! - Concurrent title and word lookups with per-lookup timeouts

// Core domain logic
pub mod core;

// Command line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{MirrorError, Result};
pub use core::services::Services;
pub use core::types::*;
