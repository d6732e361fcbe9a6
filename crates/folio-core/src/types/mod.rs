//! Domain types for portfolio analytics.
//!
//! - [`Date`]: Calendar date of an observation
//! - [`PricePoint`]: Dated closing price
//! - [`Currency`]: ISO currency codes

mod currency;
mod price_point;

pub use currency::Currency;
pub use price_point::{parse_date, sort_series, PricePoint};

/// Calendar date used for price observations and dividend events.
pub type Date = chrono::NaiveDate;
