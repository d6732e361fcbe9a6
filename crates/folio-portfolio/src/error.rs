//! Error types for portfolio analytics.
//!
//! Errors are raised when holdings are constructed or ingested. Analytics
//! functions are total and never return them.

use folio_core::CoreError;
use thiserror::Error;

use crate::market::SourceError;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// The holding symbol.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Market data source failure.
    #[error("Market data error: {0}")]
    MarketData(#[from] SourceError),

    /// Core type error (currency, date, schema).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
