//! Market data collection.
//!
//! The analytics are pure; this module is the boundary that gathers the
//! quotes, security details, FX rates and dividend histories they consume.
//!
//! - [`QuoteSource`], [`DetailSource`], [`FxRateSource`], [`DividendSource`]:
//!   async source traits
//! - [`collect_snapshot`]: concurrent fan-out over all sources
//! - [`MarketSnapshot`]: fetched data, used to enrich positions into holdings
//! - [`JsonMarketSource`]: file-backed source implementing every trait
//!
//! A failed fetch never aborts collection. The affected field falls back to
//! its default (price = cost basis, beta = 1, yield = 0, FX rate = 1).
//! There are no timeouts or retries: a fetch that never completes holds
//! the snapshot open.

mod file;
mod snapshot;
mod sources;

pub use file::JsonMarketSource;
pub use snapshot::{collect_snapshot, MarketSnapshot};
pub use sources::*;
