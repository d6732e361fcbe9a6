//! # Folio Valuation
//!
//! Fair value estimates for a single company from its latest statements.
//!
//! - **DCF**: Projected free cash flow plus a Gordon terminal value
//! - **Graham Number**: √(22.5 × EPS × book value per share)
//! - **Dividend Discount**: Next dividend over (cost of equity − growth)
//! - **P/E Multiple**: EPS × a reference multiple
//!
//! The models are independent. [`value_company`] runs all of them and
//! averages the strictly positive results for display; the average is not
//! meant as a single "true" value.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_valuation::prelude::*;
//!
//! let snapshot: FinancialSnapshot = serde_json::from_str(&json)?;
//! let summary = value_company(&snapshot, &ValuationAssumptions::default());
//! if let Some(upside) = summary.upside_pct(current_price) {
//!     println!("Upside: {upside:.1}%");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod models;
pub mod summary;
pub mod types;

pub use error::{ValuationError, ValuationResult};
pub use models::{
    discounted_cash_flow, dividend_discount, graham_number, pe_multiple, DcfInputs, DcfValuation,
    GRAHAM_MULTIPLIER,
};
pub use summary::{value_company, ValuationEstimate, ValuationModel, ValuationSummary};
pub use types::{
    BalanceSheet, CashFlowStatement, FinancialSnapshot, IncomeStatement, KeyRatios,
    ValuationAssumptions,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ValuationError, ValuationResult};
    pub use crate::models::{discounted_cash_flow, dividend_discount, graham_number, pe_multiple};
    pub use crate::summary::{value_company, ValuationEstimate, ValuationModel, ValuationSummary};
    pub use crate::types::{FinancialSnapshot, ValuationAssumptions};
}
