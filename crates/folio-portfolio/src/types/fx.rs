//! FX conversion to the reporting currency.

use folio_core::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Conversion rates from instrument currencies into a base currency.
///
/// A rate converts one unit of the instrument currency into base currency
/// units. Lookups never fail: the base currency, currencies whose rate could
/// not be fetched, and non-positive rates all convert at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRates {
    /// Reporting currency.
    pub base: Currency,
    /// Known rates by currency.
    #[serde(default)]
    pub rates: HashMap<Currency, Decimal>,
}

impl FxRates {
    /// Creates an empty rate table for a base currency.
    #[must_use]
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            rates: HashMap::new(),
        }
    }

    /// Adds a rate.
    #[must_use]
    pub fn with_rate(mut self, currency: Currency, rate: Decimal) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    /// Inserts or replaces a rate.
    pub fn insert(&mut self, currency: Currency, rate: Decimal) {
        self.rates.insert(currency, rate);
    }

    /// Returns the conversion rate for a currency.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Decimal {
        if currency == self.base {
            return Decimal::ONE;
        }
        match self.rates.get(&currency) {
            Some(rate) if *rate > Decimal::ZERO => *rate,
            _ => Decimal::ONE,
        }
    }

    /// Returns true if a usable rate is known (always true for the base).
    #[must_use]
    pub fn has_rate(&self, currency: Currency) -> bool {
        currency == self.base || self.rates.get(&currency).is_some_and(|r| *r > Decimal::ZERO)
    }
}

impl Default for FxRates {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
