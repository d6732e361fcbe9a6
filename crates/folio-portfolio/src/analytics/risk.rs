//! Volatility, Sharpe ratio and risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual risk-free rate used for the Sharpe ratio.
pub const RISK_FREE_RATE: f64 = 0.02;

/// Trading days used to annualize daily figures.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Beta below which a portfolio is labelled low risk.
pub const LOW_RISK_BETA: f64 = 0.8;

/// Beta above which a portfolio is labelled high risk.
pub const HIGH_RISK_BETA: f64 = 1.2;

/// Summary statistics of a daily return series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatistics {
    /// Number of returns.
    pub count: usize,
    /// Arithmetic mean daily return.
    pub mean_daily: f64,
    /// Population variance of daily returns.
    pub variance: f64,
    /// Daily standard deviation.
    pub std_dev_daily: f64,
    /// Daily standard deviation × √252.
    pub std_dev_annualized: f64,
}

impl ReturnStatistics {
    /// Computes statistics using population variance (divide by n).
    ///
    /// All fields are zero when there are no returns.
    #[must_use]
    pub fn from_returns(returns: &[f64]) -> Self {
        if returns.is_empty() {
            return Self::default();
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let std_dev_daily = variance.sqrt();

        Self {
            count: returns.len(),
            mean_daily: mean,
            variance,
            std_dev_daily,
            std_dev_annualized: std_dev_daily * TRADING_DAYS_PER_YEAR.sqrt(),
        }
    }

    /// Mean daily return × 252.
    #[must_use]
    pub fn annualized_return(&self) -> f64 {
        self.mean_daily * TRADING_DAYS_PER_YEAR
    }
}

/// Annualized Sharpe ratio against [`RISK_FREE_RATE`].
///
/// Returns 0 when volatility is zero.
#[must_use]
pub fn sharpe_ratio(stats: &ReturnStatistics) -> f64 {
    if stats.std_dev_annualized == 0.0 {
        return 0.0;
    }
    (stats.annualized_return() - RISK_FREE_RATE) / stats.std_dev_annualized
}

/// Risk label derived from weighted beta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Beta below 0.8.
    Low,
    /// Beta between 0.8 and 1.2 inclusive.
    Medium,
    /// Beta above 1.2.
    High,
}

impl RiskLevel {
    /// Classifies a beta.
    #[must_use]
    pub fn from_beta(beta: f64) -> Self {
        if beta < LOW_RISK_BETA {
            Self::Low
        } else if beta > HIGH_RISK_BETA {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_returns() {
        let stats = ReturnStatistics::from_returns(&[]);
        assert_eq!(stats, ReturnStatistics::default());
        assert_eq!(sharpe_ratio(&stats), 0.0);
    }

    #[test]
    fn test_population_variance() {
        let stats = ReturnStatistics::from_returns(&[0.01, -0.01, 0.03, -0.03]);
        assert_relative_eq!(stats.mean_daily, 0.0, epsilon = 1e-15);
        // (1 + 1 + 9 + 9) e-4 / 4
        assert_relative_eq!(stats.variance, 5e-4, epsilon = 1e-15);
        assert_relative_eq!(stats.std_dev_daily, 5e-4_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(
            stats.std_dev_annualized,
            5e-4_f64.sqrt() * 252.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sharpe() {
        let stats = ReturnStatistics::from_returns(&[0.01, 0.0, 0.02, 0.01]);
        let expected = (0.01 * 252.0 - 0.02) / stats.std_dev_annualized;
        assert_relative_eq!(sharpe_ratio(&stats), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_returns_zero_sharpe() {
        let stats = ReturnStatistics::from_returns(&[0.01, 0.01, 0.01]);
        assert_eq!(stats.std_dev_annualized, 0.0);
        assert_eq!(sharpe_ratio(&stats), 0.0);
    }

    #[test]
    fn test_risk_level() {
        assert_eq!(RiskLevel::from_beta(0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_beta(0.8), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_beta(1.2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_beta(1.21), RiskLevel::High);
        assert_eq!(RiskLevel::from_beta(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::High.to_string(), "High");
    }
}
