//! Error types for zzlogview

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Viewer error types
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Could not serialize preferences: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Message(String),
}
