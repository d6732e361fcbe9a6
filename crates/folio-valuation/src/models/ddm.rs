//! Gordon growth dividend discount model.

use crate::error::{require_finite, require_positive, require_spread, ValuationResult};

/// Computes `D1 / (r − g)`.
///
/// # Arguments
///
/// * `next_dividend` - Dividend per share expected over the next year
/// * `discount_rate` - Cost of equity
/// * `growth_rate` - Perpetual dividend growth
///
/// # Errors
///
/// Returns an error if the discount rate does not exceed the growth rate or
/// the company pays no dividend.
pub fn dividend_discount(
    next_dividend: f64,
    discount_rate: f64,
    growth_rate: f64,
) -> ValuationResult<f64> {
    let spread = require_spread(discount_rate, growth_rate)?;
    let dividend = require_positive("next_dividend", next_dividend)?;
    require_finite("DDM", dividend / spread)
}
