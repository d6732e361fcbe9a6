//! Running every model and combining the results for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{require_finite, ValuationResult};
use crate::models::{dividend_discount, discounted_cash_flow, graham_number, pe_multiple, DcfInputs};
use crate::types::{FinancialSnapshot, ValuationAssumptions};
use crate::ValuationError;

/// Identifies a valuation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationModel {
    /// Discounted cash flow.
    DiscountedCashFlow,
    /// Graham number.
    GrahamNumber,
    /// Gordon growth dividend discount.
    DividendDiscount,
    /// Earnings × reference P/E.
    PriceEarnings,
}

impl ValuationModel {
    /// All models in display order.
    pub const ALL: [ValuationModel; 4] = [
        Self::DiscountedCashFlow,
        Self::GrahamNumber,
        Self::DividendDiscount,
        Self::PriceEarnings,
    ];

    /// Short display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DiscountedCashFlow => "DCF",
            Self::GrahamNumber => "Graham Number",
            Self::DividendDiscount => "Dividend Discount",
            Self::PriceEarnings => "P/E Multiple",
        }
    }
}

impl fmt::Display for ValuationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationEstimate {
    /// Model that produced the estimate.
    pub model: ValuationModel,
    /// Fair value per share; `None` when not computable.
    pub fair_value_per_share: Option<f64>,
    /// Why the model could not be computed.
    pub unavailable_reason: Option<String>,
}

impl ValuationEstimate {
    fn from_result(model: ValuationModel, result: ValuationResult<f64>) -> Self {
        match result {
            Ok(value) => Self {
                model,
                fair_value_per_share: Some(value),
                unavailable_reason: None,
            },
            Err(e) => {
                debug!("{} not computable: {}", model, e);
                Self {
                    model,
                    fair_value_per_share: None,
                    unavailable_reason: Some(e.to_string()),
                }
            }
        }
    }

    /// True if the estimate can be averaged or plotted.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.fair_value_per_share.is_some_and(|v| v > 0.0)
    }
}

/// All estimates for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    /// Assumptions the models ran with.
    pub assumptions: ValuationAssumptions,
    /// One estimate per model, in [`ValuationModel::ALL`] order.
    pub estimates: Vec<ValuationEstimate>,
    /// Mean of strictly positive estimates; `None` if there are none.
    pub average_fair_value: Option<f64>,
}

impl ValuationSummary {
    /// Returns the estimate of a model.
    #[must_use]
    pub fn estimate(&self, model: ValuationModel) -> Option<&ValuationEstimate> {
        self.estimates.iter().find(|e| e.model == model)
    }

    /// Estimates that are strictly positive.
    pub fn usable(&self) -> impl Iterator<Item = &ValuationEstimate> {
        self.estimates.iter().filter(|e| e.is_usable())
    }

    /// Percentage by which the average fair value exceeds `price`.
    ///
    /// `None` without an average or with a non-positive price.
    #[must_use]
    pub fn upside_pct(&self, price: f64) -> Option<f64> {
        let fair = self.average_fair_value?;
        if price <= 0.0 || !price.is_finite() {
            return None;
        }
        Some((fair - price) / price * 100.0)
    }
}

/// Runs every model on a company's statements.
///
/// The dividend discount model uses next year's dividend, the trailing
/// dividend grown once at the dividend growth rate. Models whose inputs are
/// missing or invalid are reported as unavailable.
#[must_use]
pub fn value_company(
    snapshot: &FinancialSnapshot,
    assumptions: &ValuationAssumptions,
) -> ValuationSummary {
    let eps = snapshot.eps().ok_or_else(|| ValuationError::missing("eps"));

    let estimates: Vec<ValuationEstimate> = ValuationModel::ALL
        .iter()
        .map(|&model| {
            let result = match model {
                ValuationModel::DiscountedCashFlow => DcfInputs::from_snapshot(snapshot)
                    .and_then(|inputs| discounted_cash_flow(&inputs, assumptions))
                    .map(|v| v.fair_value_per_share),
                ValuationModel::GrahamNumber => eps.clone().and_then(|eps| {
                    let bvps = snapshot
                        .book_value_per_share()
                        .ok_or_else(|| ValuationError::missing("book_value_per_share"))?;
                    graham_number(eps, bvps)
                }),
                ValuationModel::DividendDiscount => snapshot
                    .dividend_per_share()
                    .ok_or_else(|| ValuationError::missing("dividend_per_share"))
                    .and_then(|d0| {
                        dividend_discount(
                            d0 * (1.0 + assumptions.dividend_growth_rate),
                            assumptions.discount_rate,
                            assumptions.dividend_growth_rate,
                        )
                    }),
                ValuationModel::PriceEarnings => {
                    eps.clone().and_then(|eps| {
                        require_finite("P/E", pe_multiple(eps, assumptions.reference_pe))
                    })
                }
            };
            ValuationEstimate::from_result(model, result)
        })
        .collect();

    let usable: Vec<f64> = estimates
        .iter()
        .filter(|e| e.is_usable())
        .filter_map(|e| e.fair_value_per_share)
        .collect();
    let average_fair_value = if usable.is_empty() {
        None
    } else {
        Some(usable.iter().sum::<f64>() / usable.len() as f64)
    };

    ValuationSummary {
        assumptions: assumptions.clone(),
        estimates,
        average_fair_value,
    }
}
