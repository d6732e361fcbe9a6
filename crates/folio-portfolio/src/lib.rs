//! # Folio Portfolio
//!
//! Portfolio analytics for equity and fund holdings.
//!
//! This crate turns a list of user-entered positions plus fetched market data
//! into the figures a portfolio dashboard shows.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Fail-soft**: Missing prices, betas, yields and FX rates degrade to
//!   defaults; analytics never return errors
//! - **Explicit ingestion**: Sheet headers are resolved once through a named
//!   field mapping
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Exposure**: Market value and cost in a reporting currency
//! - **Risk**: Weighted beta, risk level, volatility, Sharpe ratio
//! - **History**: Forward-filled portfolio value series and daily returns
//! - **Returns**: Per-holding gain and loss
//! - **Income**: Trailing dividends and projected income
//! - **Allocation**: Bucketing by sector, country, currency, rating
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_portfolio::prelude::*;
//!
//! let positions = positions_from_rows(&headers, &rows, None)?;
//! let snapshot = collect_snapshot(&provider, &positions, Currency::EUR).await;
//! let holdings = snapshot.enrich_all(&positions);
//!
//! let config = AnalyticsConfig::default();
//! let analytics = calculate_portfolio_analytics(&holdings, &snapshot.fx, &config);
//! let by_sector = bucket_by_sector(&holdings, &snapshot.fx, &config);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Exposure, history, risk, returns and income
//! - [`bucketing`] - Generic aggregation and allocation by classification
//! - [`market`] - Market data sources and snapshot collection
//! - [`types`] - Core types (Position, Holding, Classification, FxRates, Config)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod error;
pub mod market;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{
    positions_from_rows, AnalyticsConfig, Classification, DividendPayment, FxRates, Holding,
    HoldingBuilder, Position, DEFAULT_BUCKET_LABEL,
};

pub use analytics::{
    calculate_portfolio_analytics, daily_returns, holding_return,
    parallel::{maybe_parallel_fold, maybe_parallel_map},
    portfolio_dividend_yield, portfolio_value_series, projected_annual_income, sharpe_ratio,
    total_cost, total_value, trailing_dividend_income, trailing_dividends, unrealized_gain,
    unrealized_gain_pct, weighted_beta, weighted_ytd_return, AnalyticsResult, HoldingReturn,
    PortfolioValuePoint, ReturnStatistics, RiskLevel, RISK_FREE_RATE, TRADING_DAYS_PER_YEAR,
};

pub use bucketing::{
    aggregate_by, bucket_by_classifier, bucket_by_country, bucket_by_currency, bucket_by_rating,
    bucket_by_sector, positive_buckets, AggregationBucket, Distribution, WeightedBucket,
};

pub use market::{
    collect_snapshot, DetailSource, DividendSource, FxRateSource, JsonMarketSource,
    MarketDataProvider, MarketSnapshot, Quote, QuoteSource, SecurityDetail, SourceError,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Domain types
    pub use crate::types::{
        positions_from_rows, AnalyticsConfig, Classification, DividendPayment, FxRates, Holding,
        HoldingBuilder, Position,
    };

    // Analytics
    pub use crate::analytics::{
        calculate_portfolio_analytics, holding_return, total_value, weighted_beta,
        AnalyticsResult, HoldingReturn, ReturnStatistics, RiskLevel,
    };

    // Bucketing
    pub use crate::bucketing::{
        aggregate_by, bucket_by_country, bucket_by_currency, bucket_by_rating, bucket_by_sector,
        positive_buckets, AggregationBucket, Distribution,
    };

    // Market data
    pub use crate::market::{collect_snapshot, JsonMarketSource, MarketDataProvider, MarketSnapshot};

    // Re-export commonly used types from dependencies
    pub use folio_core::{Currency, Date, PricePoint};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
