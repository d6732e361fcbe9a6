//! Historical portfolio value series.

use std::collections::BTreeSet;

use folio_core::Date;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::{checked_product, FxRates, Holding};

/// Total portfolio value on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuePoint {
    /// Observation date.
    pub date: Date,
    /// Σ forward-filled close × quantity × FX rate.
    pub total_value: f64,
}

/// Builds the portfolio value series over the union of all holdings' dates.
///
/// Each holding contributes its latest close at or before the date; a holding
/// with no observation yet contributes 0. Current FX rates are applied to
/// the whole history.
#[must_use]
pub fn portfolio_value_series(holdings: &[Holding], fx: &FxRates) -> Vec<PortfolioValuePoint> {
    let dates: BTreeSet<Date> = holdings
        .iter()
        .flat_map(|h| h.historical_series.iter().map(|p| p.date))
        .collect();

    if dates.is_empty() {
        return Vec::new();
    }

    let multipliers: Vec<f64> = holdings
        .iter()
        .map(|h| {
            checked_product(&h.symbol, "units", h.quantity, fx.rate(h.currency))
                .to_f64()
                .unwrap_or(0.0)
        })
        .collect();

    // Cursor into each holding's series: number of points at or before the current date.
    let mut cursors = vec![0usize; holdings.len()];

    dates
        .into_iter()
        .map(|date| {
            let mut total = 0.0;
            for (i, holding) in holdings.iter().enumerate() {
                let series = &holding.historical_series;
                while cursors[i] < series.len() && series[cursors[i]].date <= date {
                    cursors[i] += 1;
                }
                if let Some(last) = cursors[i].checked_sub(1).map(|idx| &series[idx]) {
                    total += last.close * multipliers[i];
                }
            }
            PortfolioValuePoint {
                date,
                total_value: total,
            }
        })
        .collect()
}

/// Simple daily returns of a value series.
///
/// Steps whose previous value is zero are skipped.
#[must_use]
pub fn daily_returns(series: &[PortfolioValuePoint]) -> Vec<f64> {
    series
        .windows(2)
        .filter(|w| w[0].total_value != 0.0)
        .map(|w| (w[1].total_value - w[0].total_value) / w[0].total_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::PricePoint;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> Date {
        Date::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn holding(symbol: &str, qty: Decimal, closes: &[(u32, f64)]) -> Holding {
        Holding::builder()
            .symbol(symbol)
            .quantity(qty)
            .cost_basis(dec!(1))
            .historical_series(closes.iter().map(|&(d, c)| PricePoint::new(day(d), c)).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn test_forward_fill() {
        let a = holding("A", dec!(2), &[(1, 10.0), (3, 12.0)]);
        let b = holding("B", dec!(1), &[(2, 50.0)]);

        let series = portfolio_value_series(&[a, b], &FxRates::default());

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, day(1));
        // B has no observation yet
        assert_relative_eq!(series[0].total_value, 20.0);
        // A carries its day-1 close
        assert_relative_eq!(series[1].total_value, 20.0 + 50.0);
        assert_relative_eq!(series[2].total_value, 24.0 + 50.0);
    }

    #[test]
    fn test_empty_history() {
        let a = holding("A", dec!(2), &[]);
        assert!(portfolio_value_series(&[a], &FxRates::default()).is_empty());
        assert!(portfolio_value_series(&[], &FxRates::default()).is_empty());
    }

    #[test]
    fn test_daily_returns() {
        let series = vec![
            PortfolioValuePoint { date: day(1), total_value: 100.0 },
            PortfolioValuePoint { date: day(2), total_value: 110.0 },
            PortfolioValuePoint { date: day(3), total_value: 99.0 },
        ];
        let returns = daily_returns(&series);
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_daily_returns_skip_zero_base() {
        let series = vec![
            PortfolioValuePoint { date: day(1), total_value: 0.0 },
            PortfolioValuePoint { date: day(2), total_value: 100.0 },
            PortfolioValuePoint { date: day(3), total_value: 105.0 },
        ];
        let returns = daily_returns(&series);
        assert_eq!(returns.len(), 1);
        assert_relative_eq!(returns[0], 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_has_no_returns() {
        let series = vec![PortfolioValuePoint { date: day(1), total_value: 100.0 }];
        assert!(daily_returns(&series).is_empty());
    }
}
