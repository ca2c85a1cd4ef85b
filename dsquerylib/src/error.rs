//! Error types for dsquerylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while querying a datastore
#[derive(Error, Debug)]
pub enum DsqueryError {
    /// Input of the wrong shape was given to a delimited-input coercer
    #[error("argument type error: {0}")]
    ArgumentType(String),

    /// Filter criteria not in `column=value` form
    #[error("invalid filter '{0}': expected COLUMN=VALUE")]
    InvalidFilter(String),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Failed to open or read a datastore file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Datastore file content could not be parsed
    #[error("failed to parse file '{path}': {source}")]
    Parse { path: PathBuf, source: csv::Error },

    /// Failed to serialize records as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
