//! Portfolio bucketing and classification.
//!
//! This module provides bucketing capabilities for allocation charts:
//!
//! - **Generic aggregation**: Group any records by a label and sum a value
//! - **Holding bucketing**: Distribution by sector, country, currency, rating
//!
//! All functions are pure - they take records and return buckets
//! without modifying state.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_portfolio::bucketing::*;
//!
//! let by_sector = bucket_by_sector(&holdings, &fx, &config);
//! for bucket in by_sector.chartable() {
//!     println!("{}: {:.2}% weight", bucket.category, bucket.weight_pct);
//! }
//! ```

mod aggregate;
mod holdings;

pub use aggregate::*;
pub use holdings::*;
