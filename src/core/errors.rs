//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metricmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing errors
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Tree traversal exceeded the configured depth bound
    #[error("Recursion limit of {limit} exceeded while traversing syntax tree")]
    RecursionLimit { limit: usize },

    /// Linter invocation errors
    #[error("Lint error: {0}")]
    Lint(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported feature errors
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error with file context
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a linter error
    pub fn lint(message: impl Into<String>) -> Self {
        Self::Lint(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
