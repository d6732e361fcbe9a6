//! Discounted cash flow valuation.
//!
//! ## Formula
//!
//! ```text
//! FCF_t  = FCF_0 × (1 + g)^t                     t = 1..n
//! TV     = FCF_n × (1 + g_t) / (r − g_t)
//! EV     = Σ FCF_t / (1 + r)^t + TV / (1 + r)^n
//! Equity = EV + cash − debt
//! Value  = Equity / diluted shares
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{
    require_finite, require_positive, require_spread, ValuationError, ValuationResult,
};
use crate::types::{FinancialSnapshot, ValuationAssumptions};

/// Company figures the DCF needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfInputs {
    /// Base-year free cash flow.
    pub free_cash_flow: f64,
    /// Cash and equivalents.
    pub cash: f64,
    /// Total debt.
    pub debt: f64,
    /// Diluted share count.
    pub diluted_shares: f64,
}

impl DcfInputs {
    /// Extracts DCF inputs from statements.
    ///
    /// # Errors
    ///
    /// Returns an error if free cash flow or share count is unavailable.
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> ValuationResult<Self> {
        Ok(Self {
            free_cash_flow: snapshot
                .free_cash_flow()
                .ok_or_else(|| ValuationError::missing("free_cash_flow"))?,
            cash: snapshot.cash(),
            debt: snapshot.debt(),
            diluted_shares: snapshot
                .diluted_shares()
                .ok_or_else(|| ValuationError::missing("diluted_shares"))?,
        })
    }
}

/// DCF result with its intermediate figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfValuation {
    /// Projected free cash flows, years 1..n.
    pub projected_cash_flows: Vec<f64>,
    /// Present value of the projected flows.
    pub present_value_of_cash_flows: f64,
    /// Terminal value at year n.
    pub terminal_value: f64,
    /// Terminal value discounted to today.
    pub present_value_of_terminal: f64,
    /// Enterprise value.
    pub enterprise_value: f64,
    /// Enterprise value plus cash minus debt.
    pub equity_value: f64,
    /// Equity value per diluted share. May be negative for indebted
    /// companies.
    pub fair_value_per_share: f64,
}

/// Values a company by discounting projected free cash flows.
///
/// # Errors
///
/// Returns an error if the discount rate does not exceed the terminal growth
/// rate or the share count is not positive.
pub fn discounted_cash_flow(
    inputs: &DcfInputs,
    assumptions: &ValuationAssumptions,
) -> ValuationResult<DcfValuation> {
    let r = assumptions.discount_rate;
    let g = assumptions.growth_rate;
    let g_t = assumptions.terminal_growth_rate;
    let n = assumptions.projection_years.max(1);

    let spread = require_spread(r, g_t)?;
    let shares = require_positive("diluted_shares", inputs.diluted_shares)?;
    if r <= -1.0 {
        return Err(ValuationError::non_positive("1 + discount_rate", 1.0 + r));
    }

    let mut projected_cash_flows = Vec::with_capacity(n as usize);
    let mut present_value_of_cash_flows = 0.0;
    let mut fcf = inputs.free_cash_flow;
    let mut discount = 1.0;

    for _ in 0..n {
        fcf *= 1.0 + g;
        discount *= 1.0 + r;
        projected_cash_flows.push(fcf);
        present_value_of_cash_flows += fcf / discount;
    }

    let terminal_value = fcf * (1.0 + g_t) / spread;
    let present_value_of_terminal = terminal_value / discount;
    let enterprise_value = present_value_of_cash_flows + present_value_of_terminal;
    let equity_value = enterprise_value + inputs.cash - inputs.debt;
    let fair_value_per_share = require_finite("DCF", equity_value / shares)?;

    Ok(DcfValuation {
        projected_cash_flows,
        present_value_of_cash_flows,
        terminal_value,
        present_value_of_terminal,
        enterprise_value,
        equity_value,
        fair_value_per_share,
    })
}
