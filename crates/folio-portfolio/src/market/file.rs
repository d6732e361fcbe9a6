//! File-backed market data source.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use folio_core::Currency;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{
    DetailSource, DividendSource, FxRateSource, Quote, QuoteSource, SecurityDetail, SourceError,
};
use crate::types::DividendPayment;

/// On-disk layout of a market data file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarketFile {
    base: Option<Currency>,
    quotes: HashMap<String, Quote>,
    details: HashMap<String, SecurityDetail>,
    fx: HashMap<String, Decimal>,
    dividends: HashMap<String, Vec<DividendPayment>>,
}

/// JSON market data source for offline use and tests.
///
/// ```json
/// {
///   "base": "EUR",
///   "quotes":    { "ENI.MI": { "price": 14.0, "dividend_yield": 0.07 } },
///   "details":   { "ENI.MI": { "sector": "Energy", "beta": 0.9,
///                              "historical_series": [{ "date": "2024-01-02", "close": 13.8 }] } },
///   "fx":        { "USD": 0.92 },
///   "dividends": { "ENI.MI": [{ "date": "2024-05-20", "dividend_per_share": 0.25 }] }
/// }
/// ```
///
/// FX rates convert one unit of the keyed currency into `base` (EUR when
/// omitted).
#[derive(Debug, Clone)]
pub struct JsonMarketSource {
    base: Currency,
    quotes: HashMap<String, Quote>,
    details: HashMap<String, SecurityDetail>,
    fx: HashMap<Currency, Decimal>,
    dividends: HashMap<String, Vec<DividendPayment>>,
}

impl JsonMarketSource {
    /// Loads a source from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SourceError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&content)
    }

    /// Parses a source from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the expected layout.
    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        let file: MarketFile =
            serde_json::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))?;

        let mut fx = HashMap::with_capacity(file.fx.len());
        for (code, rate) in file.fx {
            let currency = Currency::from_code(&code)
                .ok_or_else(|| SourceError::Parse(format!("invalid currency code '{}'", code)))?;
            fx.insert(currency, rate);
        }

        Ok(Self {
            base: file.base.unwrap_or_default(),
            quotes: file.quotes,
            details: file.details,
            fx,
            dividends: file.dividends,
        })
    }

    /// Currency the FX table converts into.
    #[must_use]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Number of symbols with a quote.
    #[must_use]
    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }
}

#[async_trait]
impl QuoteSource for JsonMarketSource {
    async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, SourceError> {
        Ok(self.quotes.get(symbol).cloned())
    }
}

#[async_trait]
impl DetailSource for JsonMarketSource {
    async fn get_detail(&self, symbol: &str) -> Result<Option<SecurityDetail>, SourceError> {
        Ok(self.details.get(symbol).cloned())
    }
}

#[async_trait]
impl FxRateSource for JsonMarketSource {
    async fn get_rate(
        &self,
        from: Currency,
        to: Currency,
    ) -> Result<Option<Decimal>, SourceError> {
        if from == to {
            return Ok(Some(Decimal::ONE));
        }
        if to == self.base {
            return Ok(self.fx.get(&from).copied());
        }
        // Cross via base: from -> base -> to
        let from_rate = if from == self.base {
            Some(Decimal::ONE)
        } else {
            self.fx.get(&from).copied()
        };
        let cross = match (from_rate, self.fx.get(&to)) {
            (Some(f), Some(t)) => f.checked_div(*t),
            _ => None,
        };
        Ok(cross)
    }
}

#[async_trait]
impl DividendSource for JsonMarketSource {
    async fn get_dividends(&self, symbol: &str) -> Result<Vec<DividendPayment>, SourceError> {
        Ok(self.dividends.get(symbol).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "quotes": {
            "ENI.MI": { "price": 14.0, "name": "Eni", "dividend_yield": 0.07 },
            "AAPL": { "price": 200.0 }
        },
        "details": {
            "ENI.MI": {
                "sector": "Energy",
                "currency": "EUR",
                "beta": 0.9,
                "historical_series": [
                    { "date": "2024-01-03", "close": 13.9 },
                    { "date": "2024-01-02", "close": 13.8 }
                ]
            }
        },
        "fx": { "USD": 0.9, "GBP": 1.2 },
        "dividends": {
            "ENI.MI": [{ "date": "2024-05-20", "dividend_per_share": 0.25 }]
        }
    }"#;

    #[tokio::test]
    async fn test_lookups() {
        let source = JsonMarketSource::from_json(SAMPLE).unwrap();
        assert_eq!(source.base(), Currency::EUR);
        assert_eq!(source.quote_count(), 2);

        let quote = source.get_quote("ENI.MI").await.unwrap().unwrap();
        assert_eq!(quote.price, dec!(14));
        assert_eq!(quote.dividend_yield, Some(0.07));
        assert!(source.get_quote("MISSING").await.unwrap().is_none());

        let detail = source.get_detail("ENI.MI").await.unwrap().unwrap();
        assert_eq!(detail.beta, Some(0.9));
        assert_eq!(detail.historical_series.len(), 2);

        let divs = source.get_dividends("ENI.MI").await.unwrap();
        assert_eq!(divs.len(), 1);
        assert!(source.get_dividends("AAPL").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fx_rates() {
        let source = JsonMarketSource::from_json(SAMPLE).unwrap();
        assert_eq!(
            source.get_rate(Currency::USD, Currency::EUR).await.unwrap(),
            Some(dec!(0.9))
        );
        assert_eq!(
            source.get_rate(Currency::EUR, Currency::EUR).await.unwrap(),
            Some(Decimal::ONE)
        );
        assert_eq!(
            source.get_rate(Currency::USD, Currency::GBP).await.unwrap(),
            Some(dec!(0.75))
        );
        assert!(source.get_rate(Currency::JPY, Currency::EUR).await.unwrap().is_none());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let source = JsonMarketSource::from_path(file.path()).unwrap();
        assert_eq!(source.quote_count(), 2);

        assert!(JsonMarketSource::from_path("/nonexistent/market.json").is_err());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(JsonMarketSource::from_json("not json").is_err());
        assert!(JsonMarketSource::from_json(r#"{ "fx": { "XXXX": 1.0 } }"#).is_err());
        // Empty document is a valid, empty source
        assert_eq!(JsonMarketSource::from_json("{}").unwrap().quote_count(), 0);
    }
}
