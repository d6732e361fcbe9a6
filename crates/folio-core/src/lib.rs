//! # Folio Core
//!
//! Core types and ingestion helpers for the Folio portfolio analytics library.
//!
//! This crate provides the foundational building blocks used throughout Folio:
//!
//! - **Types**: Domain types like `Currency`, `Date` and `PricePoint`
//! - **Numeric parsing**: Locale-formatted currency and percentage strings
//! - **Schema mapping**: Named field mappings for loosely structured feeds
//!
//! ## Design Philosophy
//!
//! - **Total functions**: A malformed cell degrades to a default, it never aborts
//! - **Explicit over implicit**: Defaulted values are visible as `Option` internally
//! - **Resolve once**: Header positions are resolved at ingestion, not during computation
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! assert_eq!(parse_locale_number("€ 1.234,56"), Some(1234.56));
//! assert_eq!(Currency::EUR.code(), "EUR");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod numeric;
pub mod schema;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::numeric::{parse_locale_number, parse_numeric, parse_numeric_str};
    pub use crate::schema::{FieldMapping, FieldSpec, ResolvedSchema};
    pub use crate::types::{Currency, Date, PricePoint};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, PricePoint};
