//! Core domain logic
//!
//! Everything here is independent of the command line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **storage**: Raw page records and word index files
//! - **indexer**: Tokenizing and index construction
//! - **search**: Query client and highlighting
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MirrorError, Result};
pub use services::Services;
