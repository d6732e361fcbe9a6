//! Portfolio analytics calculations.
//!
//! This module provides analytics over enriched holdings:
//!
//! - **Exposure**: Market value, cost, weighted beta, weighted YTD return
//! - **History**: Forward-filled portfolio value series and daily returns
//! - **Risk**: Return statistics, Sharpe ratio, risk level
//! - **Returns**: Per-holding gain and loss
//! - **Income**: Dividends received and projected
//!
//! Every function is total: missing inputs degrade to zero or to the
//! documented default instead of failing.

mod exposure;
mod history;
mod income;
pub mod parallel;
mod returns;
mod risk;
mod summary;

pub use exposure::*;
pub use history::*;
pub use income::*;
pub use returns::*;
pub use risk::*;
pub use summary::*;
