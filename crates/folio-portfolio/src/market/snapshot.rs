//! Concurrent collection of market data and enrichment of positions.

use std::collections::{BTreeSet, HashMap};

use folio_core::Currency;
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{MarketDataProvider, Quote, SecurityDetail, SourceError};
use crate::error::PortfolioResult;
use crate::types::{Classification, DividendPayment, FxRates, Holding, Position};

/// Market data fetched for a set of positions.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    /// Quotes by symbol.
    pub quotes: HashMap<String, Quote>,
    /// Details by symbol.
    pub details: HashMap<String, SecurityDetail>,
    /// Dividend histories by symbol.
    pub dividends: HashMap<String, Vec<DividendPayment>>,
    /// Rates into the reporting currency.
    pub fx: FxRates,
}

/// Unwraps a fetch result, logging and discarding failures.
fn soften<T>(result: Result<T, SourceError>, what: &str, key: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to fetch {} for {}: {}", what, key, e);
            None
        }
    }
}

/// Fetches quotes, details, dividends and FX rates for the positions.
///
/// Per-symbol requests run concurrently. FX rates are requested once the
/// details are in, for every currency named by a position or its detail.
/// A failed request leaves the corresponding entry absent.
pub async fn collect_snapshot(
    provider: &MarketDataProvider,
    positions: &[Position],
    base: Currency,
) -> MarketSnapshot {
    let symbols: Vec<&str> = positions.iter().map(|p| p.symbol.as_str()).collect();

    let per_symbol = join_all(symbols.iter().map(|&symbol| async move {
        let (quote, detail, dividends) = futures::join!(
            provider.quotes.get_quote(symbol),
            provider.details.get_detail(symbol),
            provider.dividends.get_dividends(symbol),
        );
        (symbol, quote, detail, dividends)
    }))
    .await;

    let mut snapshot = MarketSnapshot {
        fx: FxRates::new(base),
        ..MarketSnapshot::default()
    };

    for (symbol, quote, detail, dividends) in per_symbol {
        if let Some(q) = soften(quote, "quote", symbol).flatten() {
            snapshot.quotes.insert(symbol.to_string(), q);
        }
        if let Some(d) = soften(detail, "detail", symbol).flatten() {
            snapshot.details.insert(symbol.to_string(), d);
        }
        if let Some(divs) = soften(dividends, "dividends", symbol) {
            if !divs.is_empty() {
                snapshot.dividends.insert(symbol.to_string(), divs);
            }
        }
    }

    let currencies: BTreeSet<Currency> = positions
        .iter()
        .filter_map(|p| {
            p.currency
                .or_else(|| snapshot.details.get(&p.symbol).and_then(|d| d.currency))
        })
        .filter(|c| *c != base)
        .collect();

    let rates = join_all(currencies.iter().map(|&currency| async move {
        (currency, provider.fx.get_rate(currency, base).await)
    }))
    .await;

    for (currency, rate) in rates {
        match soften(rate, "FX rate", currency.code()).flatten() {
            Some(r) if r > Decimal::ZERO => snapshot.fx.insert(currency, r),
            _ => debug!("No rate for {}/{}, using 1", currency, base),
        }
    }

    info!(
        symbols = symbols.len(),
        quotes = snapshot.quotes.len(),
        details = snapshot.details.len(),
        fx_rates = snapshot.fx.rates.len(),
        "Collected market snapshot"
    );

    snapshot
}

impl MarketSnapshot {
    /// Attaches market data to a position.
    ///
    /// Labels typed in the sheet win over feed labels. Missing price falls
    /// back to the cost basis, missing beta to 1.0, and missing currency to
    /// the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the position cannot form a valid holding.
    pub fn enrich(&self, position: &Position) -> PortfolioResult<Holding> {
        let quote = self.quotes.get(&position.symbol);
        let detail = self.details.get(&position.symbol);

        let feed_classification = detail
            .map(|d| Classification {
                sector: d.sector.clone(),
                country: d.country.clone(),
                rating: None,
            })
            .unwrap_or_default();

        let currency = position
            .currency
            .or_else(|| detail.and_then(|d| d.currency))
            .unwrap_or(self.fx.base);

        let mut builder = Holding::builder()
            .symbol(&position.symbol)
            .quantity(position.quantity)
            .cost_basis(position.cost_basis)
            .maybe_current_price(quote.map(|q| q.price).filter(|p| *p > Decimal::ZERO))
            .maybe_beta(detail.and_then(|d| d.beta))
            .currency(currency)
            .classification(position.classification.clone().or(&feed_classification))
            .historical_series(detail.map(|d| d.historical_series.clone()).unwrap_or_default())
            .ytd_return(detail.and_then(|d| d.ytd_return))
            .dividend_yield(quote.and_then(|q| q.dividend_yield))
            .dividends(self.dividends.get(&position.symbol).cloned().unwrap_or_default());

        if let Some(name) = position.name.clone().or_else(|| quote.and_then(|q| q.name.clone())) {
            builder = builder.name(name);
        }

        builder.build()
    }

    /// Enriches every position, skipping any that cannot form a holding.
    #[must_use]
    pub fn enrich_all(&self, positions: &[Position]) -> Vec<Holding> {
        positions
            .iter()
            .filter_map(|p| match self.enrich(p) {
                Ok(h) => Some(h),
                Err(e) => {
                    warn!("Skipping {}: {}", p.symbol, e);
                    None
                }
            })
            .collect()
    }
}
