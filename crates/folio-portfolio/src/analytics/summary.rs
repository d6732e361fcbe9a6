//! One-shot portfolio analytics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::exposure::{checked_sum, percent_of};
use super::parallel::{maybe_parallel_fold, maybe_parallel_map};
use super::{
    daily_returns, holding_return, portfolio_dividend_yield, portfolio_value_series,
    projected_annual_income, sharpe_ratio, weighted_beta, weighted_ytd_return, HoldingReturn,
    PortfolioValuePoint, ReturnStatistics, RiskLevel,
};
use crate::types::{AnalyticsConfig, FxRates, Holding};

/// Everything the dashboard shows about a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Market value in the reporting currency.
    pub total_value: Decimal,
    /// Acquisition cost in the reporting currency.
    pub total_cost: Decimal,
    /// Market value minus cost.
    pub unrealized_gain: Decimal,
    /// Value-weighted beta.
    pub weighted_beta: f64,
    /// Label for the weighted beta.
    pub risk_level: RiskLevel,
    /// Annualized volatility of the value series.
    pub annualized_std_dev: f64,
    /// Annualized Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Mean daily return of the value series.
    pub mean_daily_return: f64,
    /// Mean daily return × 252.
    pub annualized_return: f64,
    /// Value-weighted YTD return, when any holding reports one.
    pub weighted_ytd_return: Option<f64>,
    /// Projected dividend income over a year.
    pub projected_annual_income: f64,
    /// Projected income over total value.
    pub dividend_yield: f64,
    /// Forward-filled historical value.
    pub value_series: Vec<PortfolioValuePoint>,
    /// Gain or loss per holding, in input order.
    pub per_holding_return: Vec<HoldingReturn>,
}

/// Computes all portfolio analytics in one pass.
///
/// Never fails: empty portfolios and missing history produce zeros.
#[must_use]
pub fn calculate_portfolio_analytics(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
) -> AnalyticsResult {
    let (total_value, total_cost) = maybe_parallel_fold(
        holdings,
        config,
        (Decimal::ZERO, Decimal::ZERO),
        |(v, c), h| (checked_sum(v, h.market_value(fx)), checked_sum(c, h.cost_value(fx))),
        |(v1, c1), (v2, c2)| (checked_sum(v1, v2), checked_sum(c1, c2)),
    );

    let weighted_beta = weighted_beta(holdings, fx);
    let value_series = portfolio_value_series(holdings, fx);
    let returns = daily_returns(&value_series);
    let stats = ReturnStatistics::from_returns(&returns);

    debug!(
        holdings = holdings.len(),
        observations = value_series.len(),
        returns = returns.len(),
        "Computed portfolio analytics"
    );

    AnalyticsResult {
        total_value,
        total_cost,
        unrealized_gain: total_value - total_cost,
        weighted_beta,
        risk_level: RiskLevel::from_beta(weighted_beta),
        annualized_std_dev: stats.std_dev_annualized,
        sharpe_ratio: sharpe_ratio(&stats),
        mean_daily_return: stats.mean_daily,
        annualized_return: stats.annualized_return(),
        weighted_ytd_return: weighted_ytd_return(holdings, fx),
        projected_annual_income: projected_annual_income(holdings, fx),
        dividend_yield: portfolio_dividend_yield(holdings, fx),
        value_series,
        per_holding_return: maybe_parallel_map(holdings, config, holding_return),
    }
}

impl AnalyticsResult {
    /// Unrealized gain as a percentage of cost, `None` when cost is zero.
    #[must_use]
    pub fn unrealized_gain_pct(&self) -> Option<f64> {
        percent_of(self.unrealized_gain, self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::{Date, PricePoint};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_portfolio() {
        let result =
            calculate_portfolio_analytics(&[], &FxRates::default(), &AnalyticsConfig::default());
        assert_eq!(result.total_value, Decimal::ZERO);
        assert_eq!(result.weighted_beta, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.sharpe_ratio, 0.0);
        assert_eq!(result.annualized_std_dev, 0.0);
        assert!(result.value_series.is_empty());
        assert!(result.unrealized_gain_pct().is_none());
    }

    #[test]
    fn test_history_statistics() {
        let d = |day| Date::from_ymd_opt(2024, 1, day).unwrap();
        let holding = Holding::builder()
            .symbol("X")
            .quantity(dec!(1))
            .cost_basis(dec!(100))
            .historical_series(vec![
                PricePoint::new(d(1), 100.0),
                PricePoint::new(d(2), 110.0),
                PricePoint::new(d(3), 99.0),
            ])
            .build()
            .unwrap();

        let result = calculate_portfolio_analytics(
            &[holding],
            &FxRates::default(),
            &AnalyticsConfig::sequential(),
        );

        assert_eq!(result.value_series.len(), 3);
        assert_relative_eq!(result.mean_daily_return, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.annualized_std_dev, 0.1 * 252.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            result.sharpe_ratio,
            -0.02 / (0.1 * 252.0_f64.sqrt()),
            epsilon = 1e-12
        );
    }
}
