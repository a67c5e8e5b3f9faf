//! Error types for Rowscope.
//!
//! Filter input typed by a user never produces an error. These types cover
//! programming mistakes at the engine boundary, record loading and
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Engine call-boundary errors.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Sort requested on a field that does not exist.
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// Presentation mode name not recognized.
    #[error("Unknown view mode: {0}")]
    UnknownMode(String),

    /// Status filter name not recognized.
    #[error("Unknown status filter: {0}")]
    UnknownStatus(String),

    /// Page size must be greater than zero.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Identifier does not belong to any record in the store.
    #[error("Record '{0}' not found")]
    UnknownRecord(String),
}

/// Result type alias for engine operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Record store construction errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two records share an identifier.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// Record file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record JSON was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed but semantically invalid.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
