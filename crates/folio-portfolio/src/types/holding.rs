//! Holding representation with market data attached.

use super::{Classification, DividendPayment, FxRates};
use folio_core::types::sort_series;
use folio_core::{Currency, PricePoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Beta assumed when the detail feed has none.
pub(crate) const DEFAULT_BETA: f64 = 1.0;

/// A single position in a portfolio.
///
/// Holds no computed state: values, returns and statistics are derived on
/// read from the fields below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker, unique within a portfolio.
    pub symbol: String,

    /// Display name from the quote feed or sheet.
    pub name: Option<String>,

    /// Units held (non-negative).
    pub quantity: Decimal,

    /// Average acquisition price per unit, native currency.
    pub cost_basis: Decimal,

    /// Latest price per unit, native currency.
    /// Equals the cost basis when no quote was available.
    pub current_price: Decimal,

    /// Systematic risk coefficient (1.0 when unknown).
    pub beta: f64,

    /// Currency the instrument trades in.
    pub currency: Currency,

    /// Classification labels.
    pub classification: Classification,

    /// Closing prices, ascending by date, unique dates.
    pub historical_series: Vec<PricePoint>,

    /// Year-to-date return as a fraction, when reported.
    pub ytd_return: Option<f64>,

    /// Trailing dividend yield as a fraction, when reported.
    pub dividend_yield: Option<f64>,

    /// Dividend history.
    pub dividends: Vec<DividendPayment>,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the market value in the instrument's currency.
    ///
    /// An amount too large for `Decimal` is logged and counted as zero.
    #[must_use]
    pub fn market_value_local(&self) -> Decimal {
        checked_product(&self.symbol, "market value", self.quantity, self.current_price)
    }

    /// Returns the market value in the reporting currency.
    #[must_use]
    pub fn market_value(&self, fx: &FxRates) -> Decimal {
        checked_product(
            &self.symbol,
            "market value",
            self.market_value_local(),
            fx.rate(self.currency),
        )
    }

    /// Returns the acquisition cost in the instrument's currency.
    #[must_use]
    pub fn cost_value_local(&self) -> Decimal {
        checked_product(&self.symbol, "cost", self.quantity, self.cost_basis)
    }

    /// Returns the acquisition cost in the reporting currency.
    #[must_use]
    pub fn cost_value(&self, fx: &FxRates) -> Decimal {
        checked_product(&self.symbol, "cost", self.cost_value_local(), fx.rate(self.currency))
    }

    /// Returns the earliest price observation, if any.
    #[must_use]
    pub fn first_observation(&self) -> Option<&PricePoint> {
        self.historical_series.first()
    }
}

/// Multiplies two amounts, yielding zero with a warning on overflow.
pub(crate) fn checked_product(symbol: &str, what: &str, a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!("{}: {} out of range, counted as zero", symbol, what);
        Decimal::ZERO
    })
}

/// Builder for constructing a Holding.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    symbol: Option<String>,
    name: Option<String>,
    quantity: Option<Decimal>,
    cost_basis: Option<Decimal>,
    current_price: Option<Decimal>,
    beta: Option<f64>,
    currency: Currency,
    classification: Classification,
    historical_series: Vec<PricePoint>,
    ytd_return: Option<f64>,
    dividend_yield: Option<f64>,
    dividends: Vec<DividendPayment>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quantity held.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the average acquisition price.
    #[must_use]
    pub fn cost_basis(mut self, cost_basis: Decimal) -> Self {
        self.cost_basis = Some(cost_basis);
        self
    }

    /// Sets the latest price.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the latest price if one is known.
    #[must_use]
    pub fn maybe_current_price(mut self, price: Option<Decimal>) -> Self {
        self.current_price = price;
        self
    }

    /// Sets beta.
    #[must_use]
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Sets beta if one is known.
    #[must_use]
    pub fn maybe_beta(mut self, beta: Option<f64>) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the classification.
    #[must_use]
    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Sets the closing price history (any order).
    #[must_use]
    pub fn historical_series(mut self, series: Vec<PricePoint>) -> Self {
        self.historical_series = series;
        self
    }

    /// Sets the year-to-date return.
    #[must_use]
    pub fn ytd_return(mut self, ytd: Option<f64>) -> Self {
        self.ytd_return = ytd;
        self
    }

    /// Sets the dividend yield.
    #[must_use]
    pub fn dividend_yield(mut self, dividend_yield: Option<f64>) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Sets the dividend history.
    #[must_use]
    pub fn dividends(mut self, dividends: Vec<DividendPayment>) -> Self {
        self.dividends = dividends;
        self
    }

    /// Builds the holding.
    ///
    /// Missing price defaults to the cost basis and missing or non-finite
    /// beta to 1.0.
    ///
    /// # Errors
    ///
    /// Returns an error if symbol, quantity or cost basis are missing, if
    /// any amount is negative, or if quantity times price or cost does not
    /// fit in a `Decimal`.
    pub fn build(self) -> crate::PortfolioResult<Holding> {
        let symbol = self
            .symbol
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| crate::PortfolioError::missing_field("symbol"))?;

        let quantity = self
            .quantity
            .ok_or_else(|| crate::PortfolioError::missing_field("quantity"))?;

        let cost_basis = self
            .cost_basis
            .ok_or_else(|| crate::PortfolioError::missing_field("cost_basis"))?;

        if quantity < Decimal::ZERO {
            return Err(crate::PortfolioError::invalid_holding(
                &symbol,
                "quantity cannot be negative",
            ));
        }

        if cost_basis < Decimal::ZERO {
            return Err(crate::PortfolioError::invalid_holding(
                &symbol,
                "cost_basis cannot be negative",
            ));
        }

        let current_price = self.current_price.unwrap_or(cost_basis);
        if current_price < Decimal::ZERO {
            return Err(crate::PortfolioError::invalid_holding(
                &symbol,
                "current_price cannot be negative",
            ));
        }

        if quantity.checked_mul(current_price).is_none()
            || quantity.checked_mul(cost_basis).is_none()
        {
            return Err(crate::PortfolioError::invalid_holding(
                &symbol,
                "position value out of range",
            ));
        }

        let beta = self.beta.filter(|b| b.is_finite()).unwrap_or(DEFAULT_BETA);

        let mut historical_series = self.historical_series;
        historical_series.retain(|p| p.close.is_finite());
        sort_series(&mut historical_series);

        let mut dividends = self.dividends;
        dividends.sort_by_key(|d| d.date);

        Ok(Holding {
            symbol,
            name: self.name,
            quantity,
            cost_basis,
            current_price,
            beta,
            currency: self.currency,
            classification: self.classification,
            historical_series,
            ytd_return: self.ytd_return.filter(|v| v.is_finite()),
            dividend_yield: self.dividend_yield.filter(|v| v.is_finite()),
            dividends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Date;
    use rust_decimal_macros::dec;

    fn create_test_holding() -> Holding {
        Holding::builder()
            .symbol("ENI.MI")
            .quantity(dec!(100))
            .cost_basis(dec!(12.50))
            .current_price(dec!(14.00))
            .beta(0.9)
            .build()
            .unwrap()
    }

    #[test]
    fn test_market_value() {
        let holding = create_test_holding();

        // MV = 100 × 14.00 = 1,400
        assert_eq!(holding.market_value_local(), dec!(1400));
        assert_eq!(holding.market_value(&FxRates::default()), dec!(1400));
    }

    #[test]
    fn test_cost_value() {
        let holding = create_test_holding();
        assert_eq!(holding.cost_value_local(), dec!(1250));
    }

    #[test]
    fn test_fx_conversion() {
        let holding = Holding::builder()
            .symbol("AAPL")
            .quantity(dec!(10))
            .cost_basis(dec!(150))
            .current_price(dec!(200))
            .currency(Currency::USD)
            .build()
            .unwrap();

        let fx = FxRates::new(Currency::EUR).with_rate(Currency::USD, dec!(0.9));

        assert_eq!(holding.market_value_local(), dec!(2000));
        assert_eq!(holding.market_value(&fx), dec!(1800));
        assert_eq!(holding.cost_value(&fx), dec!(1350));
    }

    #[test]
    fn test_defaults() {
        let holding = Holding::builder()
            .symbol("XYZ")
            .quantity(dec!(5))
            .cost_basis(dec!(40))
            .build()
            .unwrap();

        assert_eq!(holding.current_price, dec!(40));
        assert_eq!(holding.beta, 1.0);
        assert_eq!(holding.currency, Currency::EUR);
        assert!(holding.historical_series.is_empty());
    }

    #[test]
    fn test_oversized_position_rejected() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(18), 0);
        let result = Holding::builder()
            .symbol("X")
            .quantity(huge)
            .cost_basis(huge)
            .build();
        assert!(matches!(result, Err(crate::PortfolioError::InvalidHolding { .. })));
    }

    #[test]
    fn test_overflowing_values_count_as_zero() {
        let mut holding = create_test_holding();
        holding.quantity = Decimal::MAX;
        assert_eq!(holding.market_value_local(), Decimal::ZERO);
        assert_eq!(holding.cost_value(&FxRates::default()), Decimal::ZERO);

        let holding = create_test_holding();
        let fx = FxRates::new(Currency::USD).with_rate(Currency::EUR, Decimal::MAX);
        assert_eq!(holding.market_value(&fx), Decimal::ZERO);
    }

    #[test]
    fn test_non_finite_beta_defaults() {
        let holding = Holding::builder()
            .symbol("XYZ")
            .quantity(dec!(1))
            .cost_basis(dec!(1))
            .beta(f64::NAN)
            .build()
            .unwrap();
        assert_eq!(holding.beta, 1.0);
    }

    #[test]
    fn test_series_sorted_on_build() {
        let d = |day| Date::from_ymd_opt(2024, 1, day).unwrap();
        let holding = Holding::builder()
            .symbol("XYZ")
            .quantity(dec!(1))
            .cost_basis(dec!(1))
            .historical_series(vec![
                PricePoint::new(d(3), 3.0),
                PricePoint::new(d(1), 1.0),
                PricePoint::new(d(2), f64::NAN),
            ])
            .build()
            .unwrap();

        assert_eq!(holding.historical_series.len(), 2);
        assert_eq!(holding.first_observation().unwrap().date, d(1));
    }

    #[test]
    fn test_builder_validation() {
        // Missing symbol
        let result = Holding::builder()
            .quantity(dec!(1))
            .cost_basis(dec!(1))
            .build();
        assert!(result.is_err());

        // Blank symbol
        let result = Holding::builder()
            .symbol("  ")
            .quantity(dec!(1))
            .cost_basis(dec!(1))
            .build();
        assert!(result.is_err());

        // Negative quantity
        let result = Holding::builder()
            .symbol("X")
            .quantity(dec!(-1))
            .cost_basis(dec!(1))
            .build();
        assert!(result.is_err());

        // Missing cost basis
        let result = Holding::builder().symbol("X").quantity(dec!(1)).build();
        assert!(result.is_err());
    }
}
