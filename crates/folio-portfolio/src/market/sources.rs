//! Market data source traits and records.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{Currency, PricePoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::DividendPayment;

/// Error raised by a market data source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Source could not be reached.
    #[error("source not available: {0}")]
    Unavailable(String),

    /// Response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Latest quote for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Last price in the instrument's currency.
    pub price: Decimal,
    /// Change since the previous close.
    #[serde(default)]
    pub change: Option<f64>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Trailing dividend yield as a fraction.
    #[serde(default)]
    pub dividend_yield: Option<f64>,
}

/// Reference and history data for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityDetail {
    /// Industry sector.
    pub sector: Option<String>,
    /// Country of listing.
    pub country: Option<String>,
    /// Trading currency.
    pub currency: Option<Currency>,
    /// Beta against the reference index.
    pub beta: Option<f64>,
    /// Year-to-date return as a fraction.
    pub ytd_return: Option<f64>,
    /// Daily closes, any order.
    pub historical_series: Vec<PricePoint>,
}

/// Trait for quote providers.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Get the latest quote; `None` if the symbol is unknown.
    async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, SourceError>;
}

/// Trait for security detail providers.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Get classification, beta and price history for a symbol.
    async fn get_detail(&self, symbol: &str) -> Result<Option<SecurityDetail>, SourceError>;
}

/// Trait for FX rate providers.
#[async_trait]
pub trait FxRateSource: Send + Sync {
    /// Get the rate converting one unit of `from` into `to`.
    async fn get_rate(&self, from: Currency, to: Currency)
        -> Result<Option<Decimal>, SourceError>;
}

/// Trait for dividend history providers.
#[async_trait]
pub trait DividendSource: Send + Sync {
    /// Get dividend history for a symbol; empty if none.
    async fn get_dividends(&self, symbol: &str) -> Result<Vec<DividendPayment>, SourceError>;
}

/// The set of sources used to build a market snapshot.
#[derive(Clone)]
pub struct MarketDataProvider {
    /// Quote source.
    pub quotes: Arc<dyn QuoteSource>,
    /// Security detail source.
    pub details: Arc<dyn DetailSource>,
    /// FX rate source.
    pub fx: Arc<dyn FxRateSource>,
    /// Dividend history source.
    pub dividends: Arc<dyn DividendSource>,
}

impl MarketDataProvider {
    /// Creates a provider from separate sources.
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        details: Arc<dyn DetailSource>,
        fx: Arc<dyn FxRateSource>,
        dividends: Arc<dyn DividendSource>,
    ) -> Self {
        Self {
            quotes,
            details,
            fx,
            dividends,
        }
    }

    /// Creates a provider backed by one source implementing every trait.
    pub fn from_source<S>(source: Arc<S>) -> Self
    where
        S: QuoteSource + DetailSource + FxRateSource + DividendSource + 'static,
    {
        Self {
            quotes: source.clone(),
            details: source.clone(),
            fx: source.clone(),
            dividends: source,
        }
    }

    /// Creates a provider that knows nothing.
    pub fn empty() -> Self {
        Self::from_source(Arc::new(EmptySource))
    }
}

impl std::fmt::Debug for MarketDataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataProvider").finish_non_exhaustive()
    }
}

/// Source with no data.
pub struct EmptySource;

#[async_trait]
impl QuoteSource for EmptySource {
    async fn get_quote(&self, _symbol: &str) -> Result<Option<Quote>, SourceError> {
        Ok(None)
    }
}

#[async_trait]
impl DetailSource for EmptySource {
    async fn get_detail(&self, _symbol: &str) -> Result<Option<SecurityDetail>, SourceError> {
        Ok(None)
    }
}

#[async_trait]
impl FxRateSource for EmptySource {
    async fn get_rate(
        &self,
        _from: Currency,
        _to: Currency,
    ) -> Result<Option<Decimal>, SourceError> {
        Ok(None)
    }
}

#[async_trait]
impl DividendSource for EmptySource {
    async fn get_dividends(&self, _symbol: &str) -> Result<Vec<DividendPayment>, SourceError> {
        Ok(Vec::new())
    }
}
