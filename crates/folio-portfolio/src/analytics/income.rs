//! Dividend income.

use chrono::Duration;
use folio_core::Date;
use rust_decimal::prelude::ToPrimitive;

use super::total_value;
use crate::types::{checked_product, FxRates, Holding};

/// Window used for trailing dividends.
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Sum of per-share dividends with an ex-date in the 365 days up to `as_of`.
///
/// The window is `(as_of − 365 days, as_of]`.
#[must_use]
pub fn trailing_dividends(holding: &Holding, as_of: Date) -> f64 {
    let start = as_of - Duration::days(TRAILING_WINDOW_DAYS);
    holding
        .dividends
        .iter()
        .filter(|d| d.date > start && d.date <= as_of)
        .map(|d| d.dividend_per_share)
        .sum()
}

/// Trailing dividend cash received by the whole position, reporting currency.
#[must_use]
pub fn trailing_dividend_income(holding: &Holding, fx: &FxRates, as_of: Date) -> f64 {
    let units = checked_product(
        &holding.symbol,
        "units",
        holding.quantity,
        fx.rate(holding.currency),
    );
    let per_unit = units.to_f64().unwrap_or(0.0);
    trailing_dividends(holding, as_of) * per_unit
}

/// Expected income over the next year: Σ market value × dividend yield.
///
/// Holdings without a reported yield contribute nothing.
#[must_use]
pub fn projected_annual_income(holdings: &[Holding], fx: &FxRates) -> f64 {
    holdings
        .iter()
        .map(|h| {
            let value = h.market_value(fx).to_f64().unwrap_or(0.0);
            value * h.dividend_yield.unwrap_or(0.0)
        })
        .sum()
}

/// Projected income as a fraction of total value; 0 for an empty portfolio.
#[must_use]
pub fn portfolio_dividend_yield(holdings: &[Holding], fx: &FxRates) -> f64 {
    let total = total_value(holdings, fx).to_f64().unwrap_or(0.0);
    if total == 0.0 {
        return 0.0;
    }
    projected_annual_income(holdings, fx) / total
}
