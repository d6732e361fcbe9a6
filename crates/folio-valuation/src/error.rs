//! Error types for valuation models.
//!
//! A model that returns an error is "not computable" for the given inputs.
//! [`value_company`](crate::value_company) records the reason and moves on;
//! errors never escape the summary.

use thiserror::Error;

/// Error type for valuation models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Discount rate does not exceed the growth rate, so the growing
    /// perpetuity diverges.
    #[error("discount rate {discount_rate} must exceed growth rate {growth_rate}")]
    DiscountRateNotAboveGrowth {
        /// Discount rate (WACC or cost of equity).
        discount_rate: f64,
        /// Perpetual growth rate.
        growth_rate: f64,
    },

    /// An input that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NonPositiveInput {
        /// Name of the input.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A statement field the model needs is absent.
    #[error("missing input: {field}")]
    MissingInput {
        /// Name of the input.
        field: &'static str,
    },

    /// Result overflowed or was otherwise not a finite number.
    #[error("{model} produced a non-finite value")]
    NonFinite {
        /// Model name.
        model: &'static str,
    },
}

impl ValuationError {
    /// Create a non-positive input error.
    #[must_use]
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositiveInput { field, value }
    }

    /// Create a missing input error.
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }
}

/// Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Fails unless `value` is strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> ValuationResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ValuationError::non_positive(field, value))
    }
}

/// Fails unless `discount_rate > growth_rate`.
pub(crate) fn require_spread(discount_rate: f64, growth_rate: f64) -> ValuationResult<f64> {
    let spread = discount_rate - growth_rate;
    if spread > 0.0 {
        Ok(spread)
    } else {
        Err(ValuationError::DiscountRateNotAboveGrowth {
            discount_rate,
            growth_rate,
        })
    }
}

/// Fails unless `value` is finite.
pub(crate) fn require_finite(model: &'static str, value: f64) -> ValuationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValuationError::NonFinite { model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValuationError::DiscountRateNotAboveGrowth {
            discount_rate: 0.03,
            growth_rate: 0.03,
        };
        assert!(err.to_string().contains("0.03"));

        let err = ValuationError::non_positive("eps", -1.5);
        assert_eq!(err.to_string(), "eps must be positive, got -1.5");

        assert_eq!(
            ValuationError::missing("free_cash_flow").to_string(),
            "missing input: free_cash_flow"
        );
    }

    #[test]
    fn test_guards() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert_eq!(require_spread(0.09, 0.025).unwrap(), 0.09 - 0.025);
        assert!(require_spread(0.025, 0.025).is_err());
        assert!(require_finite("dcf", f64::INFINITY).is_err());
    }
}
