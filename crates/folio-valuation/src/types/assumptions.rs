//! User-adjustable valuation assumptions.

use serde::{Deserialize, Serialize};

/// Rates and multiples shared by the valuation models.
///
/// Rates are decimal fractions (0.09 = 9%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationAssumptions {
    /// Discount rate (WACC for DCF, cost of equity for DDM).
    pub discount_rate: f64,
    /// Free-cash-flow growth over the explicit horizon.
    pub growth_rate: f64,
    /// Perpetual growth after the horizon.
    pub terminal_growth_rate: f64,
    /// Perpetual dividend growth.
    pub dividend_growth_rate: f64,
    /// P/E applied to earnings.
    pub reference_pe: f64,
    /// Years of explicit cash-flow projection.
    pub projection_years: u32,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            discount_rate: 0.09,
            growth_rate: 0.05,
            terminal_growth_rate: 0.025,
            dividend_growth_rate: 0.03,
            reference_pe: 20.0,
            projection_years: 5,
        }
    }
}

impl ValuationAssumptions {
    /// Creates the default assumptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the discount rate.
    #[must_use]
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Sets the explicit-horizon growth rate.
    #[must_use]
    pub fn with_growth_rate(mut self, rate: f64) -> Self {
        self.growth_rate = rate;
        self
    }

    /// Sets the terminal growth rate.
    #[must_use]
    pub fn with_terminal_growth_rate(mut self, rate: f64) -> Self {
        self.terminal_growth_rate = rate;
        self
    }

    /// Sets the dividend growth rate.
    #[must_use]
    pub fn with_dividend_growth_rate(mut self, rate: f64) -> Self {
        self.dividend_growth_rate = rate;
        self
    }

    /// Sets the reference P/E.
    #[must_use]
    pub fn with_reference_pe(mut self, pe: f64) -> Self {
        self.reference_pe = pe;
        self
    }

    /// Sets the projection horizon in years.
    #[must_use]
    pub fn with_projection_years(mut self, years: u32) -> Self {
        self.projection_years = years;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let a = ValuationAssumptions::default();
        assert_eq!(a.discount_rate, 0.09);
        assert_eq!(a.terminal_growth_rate, 0.025);
        assert_eq!(a.reference_pe, 20.0);
        assert_eq!(a.projection_years, 5);
    }

    #[test]
    fn test_partial_deserialize() {
        let a: ValuationAssumptions = serde_json::from_str(r#"{ "discount_rate": 0.1 }"#).unwrap();
        assert_eq!(a.discount_rate, 0.1);
        assert_eq!(a.growth_rate, 0.05);
    }

    #[test]
    fn test_builder() {
        let a = ValuationAssumptions::new()
            .with_discount_rate(0.08)
            .with_reference_pe(15.0)
            .with_projection_years(10);
        assert_eq!(a.discount_rate, 0.08);
        assert_eq!(a.reference_pe, 15.0);
        assert_eq!(a.projection_years, 10);
    }
}
