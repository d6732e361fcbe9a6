//! Fair value models.
//!
//! Each model is a pure function. Structurally invalid inputs produce a
//! [`ValuationError`](crate::ValuationError), never a panic or a NaN.

pub mod dcf;
pub mod ddm;
pub mod graham;
pub mod pe;

pub use dcf::{discounted_cash_flow, DcfInputs, DcfValuation};
pub use ddm::dividend_discount;
pub use graham::{graham_number, GRAHAM_MULTIPLIER};
pub use pe::pe_multiple;
