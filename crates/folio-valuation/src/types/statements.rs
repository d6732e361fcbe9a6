//! Latest financial statements of a company.
//!
//! Every field is optional: feeds routinely omit some of them. Derived
//! per-share figures fall back to computing from totals when the feed does
//! not report them directly.

use serde::{Deserialize, Serialize};

/// Latest income statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Net income attributable to shareholders.
    pub net_income: Option<f64>,
    /// Diluted earnings per share.
    pub eps: Option<f64>,
    /// Weighted average diluted share count.
    pub diluted_shares: Option<f64>,
}

/// Latest balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheet {
    /// Cash and short-term investments.
    pub cash_and_equivalents: Option<f64>,
    /// Short plus long-term debt.
    pub total_debt: Option<f64>,
    /// Shareholders' equity.
    pub total_equity: Option<f64>,
    /// Shares outstanding at period end.
    pub shares_outstanding: Option<f64>,
}

/// Latest cash-flow statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowStatement {
    /// Cash from operations.
    pub operating_cash_flow: Option<f64>,
    /// Capital expenditure; sign is ignored.
    pub capital_expenditure: Option<f64>,
    /// Free cash flow, when reported.
    pub free_cash_flow: Option<f64>,
    /// Dividends paid to shareholders; sign is ignored.
    pub dividends_paid: Option<f64>,
}

/// Per-share ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyRatios {
    /// Book value per share.
    pub book_value_per_share: Option<f64>,
    /// Trailing dividend per share.
    pub dividend_per_share: Option<f64>,
    /// Current price to earnings.
    pub pe_ratio: Option<f64>,
}

/// Statement data a valuation runs on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    /// Company ticker, informational.
    pub symbol: Option<String>,
    /// Income statement.
    pub income: IncomeStatement,
    /// Balance sheet.
    pub balance: BalanceSheet,
    /// Cash-flow statement.
    pub cash_flow: CashFlowStatement,
    /// Key ratios.
    pub ratios: KeyRatios,
}

impl FinancialSnapshot {
    /// Diluted share count, falling back to shares outstanding.
    #[must_use]
    pub fn diluted_shares(&self) -> Option<f64> {
        self.income
            .diluted_shares
            .or(self.balance.shares_outstanding)
    }

    /// Reported EPS, or net income over diluted shares.
    #[must_use]
    pub fn eps(&self) -> Option<f64> {
        self.income.eps.or_else(|| {
            let shares = self.diluted_shares().filter(|s| *s > 0.0)?;
            Some(self.income.net_income? / shares)
        })
    }

    /// Reported book value per share, or equity over diluted shares.
    #[must_use]
    pub fn book_value_per_share(&self) -> Option<f64> {
        self.ratios.book_value_per_share.or_else(|| {
            let shares = self.diluted_shares().filter(|s| *s > 0.0)?;
            Some(self.balance.total_equity? / shares)
        })
    }

    /// Reported free cash flow, or operating cash flow minus capex.
    #[must_use]
    pub fn free_cash_flow(&self) -> Option<f64> {
        self.cash_flow.free_cash_flow.or_else(|| {
            let ocf = self.cash_flow.operating_cash_flow?;
            let capex = self.cash_flow.capital_expenditure.unwrap_or(0.0).abs();
            Some(ocf - capex)
        })
    }

    /// Reported dividend per share, or dividends paid over diluted shares.
    #[must_use]
    pub fn dividend_per_share(&self) -> Option<f64> {
        self.ratios.dividend_per_share.or_else(|| {
            let shares = self.diluted_shares().filter(|s| *s > 0.0)?;
            Some(self.cash_flow.dividends_paid?.abs() / shares)
        })
    }

    /// Cash, zero when not reported.
    #[must_use]
    pub fn cash(&self) -> f64 {
        self.balance.cash_and_equivalents.unwrap_or(0.0)
    }

    /// Total debt, zero when not reported.
    #[must_use]
    pub fn debt(&self) -> f64 {
        self.balance.total_debt.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_figures_win() {
        let snapshot = FinancialSnapshot {
            income: IncomeStatement {
                net_income: Some(1_000.0),
                eps: Some(2.5),
                diluted_shares: Some(500.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(snapshot.eps(), Some(2.5));
    }

    #[test]
    fn test_derived_figures() {
        let snapshot = FinancialSnapshot {
            income: IncomeStatement {
                net_income: Some(1_000.0),
                ..Default::default()
            },
            balance: BalanceSheet {
                total_equity: Some(8_000.0),
                shares_outstanding: Some(400.0),
                ..Default::default()
            },
            cash_flow: CashFlowStatement {
                operating_cash_flow: Some(1_500.0),
                capital_expenditure: Some(-300.0),
                dividends_paid: Some(-200.0),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(snapshot.diluted_shares(), Some(400.0));
        assert_eq!(snapshot.eps(), Some(2.5));
        assert_eq!(snapshot.book_value_per_share(), Some(20.0));
        assert_eq!(snapshot.free_cash_flow(), Some(1_200.0));
        assert_eq!(snapshot.dividend_per_share(), Some(0.5));
        assert_eq!(snapshot.cash(), 0.0);
    }

    #[test]
    fn test_zero_shares_gives_nothing() {
        let snapshot = FinancialSnapshot {
            income: IncomeStatement {
                net_income: Some(1_000.0),
                diluted_shares: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(snapshot.eps().is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{ "income": { "eps": 3.1 }, "ratios": { "book_value_per_share": 22.0 } }"#;
        let snapshot: FinancialSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.eps(), Some(3.1));
        assert_eq!(snapshot.book_value_per_share(), Some(22.0));
        assert!(snapshot.free_cash_flow().is_none());
    }
}
