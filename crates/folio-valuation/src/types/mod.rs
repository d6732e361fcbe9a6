//! Input types for valuation models.

mod assumptions;
mod statements;

pub use assumptions::ValuationAssumptions;
pub use statements::{
    BalanceSheet, CashFlowStatement, FinancialSnapshot, IncomeStatement, KeyRatios,
};
