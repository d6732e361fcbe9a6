//! Domain types for portfolio analytics.
//!
//! This module provides type-safe representations of portfolio concepts:
//!
//! - [`Position`]: A user-entered position as read from the holdings sheet
//! - [`Holding`]: A position enriched with market data
//! - [`Classification`]: Sector, country and rating labels
//! - [`FxRates`]: Conversion rates to the reporting currency
//! - [`AnalyticsConfig`]: Configuration for analytics computation

mod classification;
mod config;
mod dividend;
mod fx;
mod holding;
mod position;

pub use classification::Classification;
pub use config::{AnalyticsConfig, DEFAULT_BUCKET_LABEL};
pub use dividend::DividendPayment;
pub use fx::FxRates;
pub(crate) use holding::checked_product;
pub use holding::{Holding, HoldingBuilder};
pub use position::{positions_from_rows, Position};
