//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rate outside the accepted range.
    #[error("Invalid rate: {0}%. Must be between -100 and 100.")]
    InvalidRate(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Invalid delimiter.
    #[error("Invalid delimiter '{0}'. Use a single ASCII character.")]
    InvalidDelimiter(String),

    /// Input file could not be read.
    #[error("Cannot read {path}: {message}")]
    Input {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Creates an input error for a file.
    pub fn input(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Input {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
