//! Error types and error handling for mirrorsearch.
//!
//! This module defines the error types used throughout the
//! index builder, the index store and the query client. Lookup
//! misses are not errors: the store returns `Ok(None)` and the
//! query client reports "no result" for a failed channel.

use thiserror::Error;

/// Result type alias for mirrorsearch operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Main error type for mirrorsearch
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    #[error("Invalid page '{title}': {reason}")]
    InvalidPage { title: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl MirrorError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MirrorError::PageNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            MirrorError::InvalidWord(_)
                | MirrorError::InvalidPage { .. }
                | MirrorError::ConfigError(_)
        )
    }
}
