//! Market value, cost and value-weighted measures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::types::{FxRates, Holding};

/// Total market value in the reporting currency.
#[must_use]
pub fn total_value(holdings: &[Holding], fx: &FxRates) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |acc, h| checked_sum(acc, h.market_value(fx)))
}

/// Total acquisition cost in the reporting currency.
#[must_use]
pub fn total_cost(holdings: &[Holding], fx: &FxRates) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |acc, h| checked_sum(acc, h.cost_value(fx)))
}

/// Adds `amount` to `total`; an amount that would overflow is dropped.
pub(crate) fn checked_sum(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("Portfolio total out of range, {} left out", amount);
        total
    })
}

/// `part / whole × 100`, `None` when `whole` is zero or the ratio overflows.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<f64> {
    part.checked_div(whole)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_f64()
}

/// Market value minus cost, in the reporting currency.
#[must_use]
pub fn unrealized_gain(holdings: &[Holding], fx: &FxRates) -> Decimal {
    total_value(holdings, fx) - total_cost(holdings, fx)
}

/// Unrealized gain as a percentage of cost, `None` when cost is zero.
#[must_use]
pub fn unrealized_gain_pct(holdings: &[Holding], fx: &FxRates) -> Option<f64> {
    percent_of(unrealized_gain(holdings, fx), total_cost(holdings, fx))
}

/// Value-weighted beta.
///
/// Returns 0 when the portfolio has no value.
#[must_use]
pub fn weighted_beta(holdings: &[Holding], fx: &FxRates) -> f64 {
    weighted_average(holdings, fx, |h| Some(h.beta)).unwrap_or(0.0)
}

/// Value-weighted year-to-date return over holdings that report one.
///
/// Returns `None` if no holding reports a YTD return or their combined
/// value is zero.
#[must_use]
pub fn weighted_ytd_return(holdings: &[Holding], fx: &FxRates) -> Option<f64> {
    weighted_average(holdings, fx, |h| h.ytd_return)
}

/// Value-weighted average of a per-holding metric.
///
/// Holdings where the metric is `None` are excluded from both numerator
/// and denominator.
fn weighted_average<F>(holdings: &[Holding], fx: &FxRates, metric: F) -> Option<f64>
where
    F: Fn(&Holding) -> Option<f64>,
{
    let (sum_weighted, sum_weights) = holdings
        .iter()
        .filter_map(|h| {
            let m = metric(h)?;
            let w = h.market_value(fx).to_f64().unwrap_or(0.0);
            Some((m * w, w))
        })
        .fold((0.0, 0.0), |(sw, swt), (m, w)| (sw + m, swt + w));

    if sum_weights == 0.0 {
        None
    } else {
        Some(sum_weighted / sum_weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::Currency;
    use rust_decimal_macros::dec;

    fn holding(qty: Decimal, cost: Decimal, price: Decimal, beta: f64) -> Holding {
        Holding::builder()
            .symbol("X")
            .quantity(qty)
            .cost_basis(cost)
            .current_price(price)
            .beta(beta)
            .build()
            .unwrap()
    }

    fn example() -> Vec<Holding> {
        vec![
            holding(dec!(10), dec!(100), dec!(120), 1.2),
            holding(dec!(5), dec!(50), dec!(40), 0.5),
        ]
    }

    #[test]
    fn test_total_value() {
        assert_eq!(total_value(&example(), &FxRates::default()), dec!(1400));
        assert_eq!(total_cost(&example(), &FxRates::default()), dec!(1250));
        assert_eq!(unrealized_gain(&example(), &FxRates::default()), dec!(150));
        assert_relative_eq!(
            unrealized_gain_pct(&example(), &FxRates::default()).unwrap(),
            12.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_weighted_beta() {
        // (1200 × 1.2 + 200 × 0.5) / 1400
        let beta = weighted_beta(&example(), &FxRates::default());
        assert_relative_eq!(beta, 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_beta_single_holding() {
        let holdings = vec![holding(dec!(3), dec!(10), dec!(11), 0.73)];
        assert_relative_eq!(weighted_beta(&holdings, &FxRates::default()), 0.73);
    }

    #[test]
    fn test_weighted_beta_zero_value() {
        let holdings = vec![holding(dec!(0), dec!(10), dec!(11), 1.5)];
        let beta = weighted_beta(&holdings, &FxRates::default());
        assert_eq!(beta, 0.0);
        assert_eq!(weighted_beta(&[], &FxRates::default()), 0.0);
    }

    #[test]
    fn test_fx_weights() {
        let usd = Holding::builder()
            .symbol("AAPL")
            .quantity(dec!(10))
            .cost_basis(dec!(100))
            .beta(2.0)
            .currency(Currency::USD)
            .build()
            .unwrap();
        let eur = holding(dec!(10), dec!(50), dec!(50), 1.0);
        let fx = FxRates::new(Currency::EUR).with_rate(Currency::USD, dec!(0.5));

        // Both worth 500 EUR
        let beta = weighted_beta(&[usd, eur], &fx);
        assert_relative_eq!(beta, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_ytd_return() {
        let mut a = holding(dec!(10), dec!(100), dec!(100), 1.0);
        a.ytd_return = Some(0.10);
        let mut b = holding(dec!(10), dec!(300), dec!(300), 1.0);
        b.ytd_return = Some(0.02);
        let c = holding(dec!(100), dec!(100), dec!(100), 1.0);

        // c reports nothing and carries no weight
        let ytd = weighted_ytd_return(&[a, b, c.clone()], &FxRates::default()).unwrap();
        assert_relative_eq!(ytd, (1000.0 * 0.10 + 3000.0 * 0.02) / 4000.0, epsilon = 1e-12);

        assert!(weighted_ytd_return(&[c], &FxRates::default()).is_none());
    }
}
