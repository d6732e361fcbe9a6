//! Dividend history records.

use folio_core::Date;
use serde::{Deserialize, Serialize};

/// A single dividend event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendPayment {
    /// Ex-dividend date.
    pub date: Date,
    /// Payment date, when the feed reports it.
    #[serde(default)]
    pub payment_date: Option<Date>,
    /// Cash amount per share in the instrument's currency.
    pub dividend_per_share: f64,
}

impl DividendPayment {
    /// Creates a dividend without a payment date.
    #[must_use]
    pub fn new(date: Date, dividend_per_share: f64) -> Self {
        Self {
            date,
            payment_date: None,
            dividend_per_share,
        }
    }
}
