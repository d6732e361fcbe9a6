//! Graham number.

use crate::error::{require_finite, require_positive, ValuationResult};

/// Benjamin Graham's ceiling of 15× earnings times 1.5× book value.
pub const GRAHAM_MULTIPLIER: f64 = 22.5;

/// Computes √(22.5 × EPS × book value per share).
///
/// # Errors
///
/// Returns an error if either factor is zero or negative, or if the
/// product is too large to be finite.
pub fn graham_number(eps: f64, book_value_per_share: f64) -> ValuationResult<f64> {
    let eps = require_positive("eps", eps)?;
    let bvps = require_positive("book_value_per_share", book_value_per_share)?;
    require_finite("Graham", (GRAHAM_MULTIPLIER * eps * bvps).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_graham_number() {
        // √(22.5 × 2 × 20) = √900
        assert_relative_eq!(graham_number(2.0, 20.0).unwrap(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_factors() {
        assert!(graham_number(-1.0, 20.0).is_err());
        assert!(graham_number(2.0, 0.0).is_err());
        assert!(graham_number(-2.0, -20.0).is_err());
    }

    #[test]
    fn test_overflowing_product() {
        assert!(matches!(
            graham_number(1e200, 1e200),
            Err(crate::ValuationError::NonFinite { .. })
        ));
    }
}
