//! Per-holding gain and loss.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::exposure::percent_of;
use crate::types::{checked_product, Holding};

/// Gain or loss of one holding in its own currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingReturn {
    /// Ticker symbol.
    pub symbol: String,
    /// (price − cost) × quantity.
    pub absolute: Decimal,
    /// (price − cost) / cost × 100; `None` when cost is zero.
    pub percent: Option<f64>,
}

/// Computes the return of a holding.
#[must_use]
pub fn holding_return(holding: &Holding) -> HoldingReturn {
    let diff = holding.current_price - holding.cost_basis;
    HoldingReturn {
        symbol: holding.symbol.clone(),
        absolute: checked_product(&holding.symbol, "gain", diff, holding.quantity),
        percent: percent_of(diff, holding.cost_basis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(qty: Decimal, cost: Decimal, price: Decimal) -> Holding {
        Holding::builder()
            .symbol("X")
            .quantity(qty)
            .cost_basis(cost)
            .current_price(price)
            .build()
            .unwrap()
    }

    #[test]
    fn test_gain() {
        let r = holding_return(&holding(dec!(10), dec!(100), dec!(120)));
        assert_eq!(r.absolute, dec!(200));
        assert_eq!(r.percent, Some(20.0));
    }

    #[test]
    fn test_loss() {
        let r = holding_return(&holding(dec!(5), dec!(50), dec!(40)));
        assert_eq!(r.absolute, dec!(-50));
        assert_eq!(r.percent, Some(-20.0));
    }

    #[test]
    fn test_zero_cost() {
        let r = holding_return(&holding(dec!(5), dec!(0), dec!(40)));
        assert_eq!(r.absolute, dec!(200));
        assert!(r.percent.is_none());
    }
}
