//! Error types shared across Freehand crates.

use std::path::PathBuf;

/// Top-level error type for Freehand operations.
#[derive(Debug, thiserror::Error)]
pub enum FreehandError {
    /// A position or close arrived after the turn stream was closed.
    #[error("Turn stream is closed")]
    StreamClosed,

    #[error("Turn sink error: {message}")]
    Sink { message: String },

    #[error("Pointer trace error: {message}")]
    Trace { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FreehandError.
pub type FreehandResult<T> = Result<T, FreehandError>;

impl FreehandError {
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink {
            message: msg.into(),
        }
    }

    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
