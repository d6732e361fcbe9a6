//! Error types for the Folio library.
//!
//! Errors are only raised at ingestion boundaries (currency codes, feed
//! headers, dates). Analytics never fail on a bad cell.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Currency code is not a three-letter alphabetic code.
    #[error("Invalid currency code: '{code}'")]
    InvalidCurrency {
        /// The rejected code.
        code: String,
    },

    /// Date string could not be parsed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A required logical field matched none of the feed headers.
    #[error("Missing column for field '{field}' (tried: {candidates})")]
    MissingColumn {
        /// The logical field name.
        field: String,
        /// Comma-separated candidate header names.
        candidates: String,
    },

    /// Field is not declared in the mapping.
    #[error("Unknown field: {field}")]
    UnknownField {
        /// The logical field name.
        field: String,
    },
}

impl CoreError {
    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(field: impl Into<String>, candidates: &[String]) -> Self {
        Self::MissingColumn {
            field: field.into(),
            candidates: candidates.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_currency("E1");
        assert!(err.to_string().contains("E1"));

        let err = CoreError::missing_column("symbol", &["Ticker".into(), "Simbolo".into()]);
        let msg = err.to_string();
        assert!(msg.contains("symbol"));
        assert!(msg.contains("Ticker, Simbolo"));
    }

    #[test]
    fn test_invalid_date() {
        let err = CoreError::invalid_date("2024-13-01");
        assert!(err.to_string().contains("2024-13-01"));
    }
}
