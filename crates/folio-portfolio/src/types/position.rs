//! Positions as entered in the holdings sheet.

use folio_core::numeric::parse_numeric_str;
use folio_core::schema::FieldMapping;
use folio_core::Currency;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Classification;
use crate::error::PortfolioResult;

/// A user-entered position before market data is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name from the sheet.
    pub name: Option<String>,
    /// Units held.
    pub quantity: Decimal,
    /// Average acquisition price per unit.
    pub cost_basis: Decimal,
    /// Currency typed in the sheet, if any.
    pub currency: Option<Currency>,
    /// Labels typed in the sheet; these take precedence over feed labels.
    pub classification: Classification,
    /// Value column of the sheet, parsed.
    pub sheet_value: Option<f64>,
}

impl Position {
    /// Creates a position with no optional fields.
    #[must_use]
    pub fn new(symbol: impl Into<String>, quantity: Decimal, cost_basis: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            quantity,
            cost_basis,
            currency: None,
            classification: Classification::default(),
            sheet_value: None,
        }
    }

    /// Folds another lot of the same symbol into this one.
    ///
    /// Quantities add; cost basis becomes the quantity-weighted average.
    /// Returns `false`, leaving `self` unchanged, if the merged amounts do
    /// not fit in a `Decimal`.
    fn absorb(&mut self, other: Position) -> bool {
        let Some(total_qty) = self.quantity.checked_add(other.quantity) else {
            return false;
        };
        if total_qty > Decimal::ZERO {
            let weighted = self
                .quantity
                .checked_mul(self.cost_basis)
                .zip(other.quantity.checked_mul(other.cost_basis))
                .and_then(|(a, b)| a.checked_add(b))
                .and_then(|sum| sum.checked_div(total_qty));
            match weighted {
                Some(cost) => self.cost_basis = cost,
                None => return false,
            }
        }
        self.quantity = total_qty;
        self.sheet_value = match (self.sheet_value, other.sheet_value) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
        self.classification = std::mem::take(&mut self.classification).or(&other.classification);
        if self.name.is_none() {
            self.name = other.name;
        }
        if self.currency.is_none() {
            self.currency = other.currency;
        }
        true
    }
}

/// Reads positions from a holdings sheet.
///
/// The header row is resolved once against [`FieldMapping::holdings_feed`]
/// (or the supplied mapping). Rows without a symbol are skipped, as are rows
/// with a negative quantity or cost. Amount cells go through the locale
/// parser, so unparseable amounts become zero. Repeated symbols are merged
/// into one position.
///
/// # Errors
///
/// Fails only if a required column is missing from the header row.
pub fn positions_from_rows<S, R>(
    headers: &[S],
    rows: &[R],
    mapping: Option<&FieldMapping>,
) -> PortfolioResult<Vec<Position>>
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let default_mapping;
    let mapping = match mapping {
        Some(m) => m,
        None => {
            default_mapping = FieldMapping::holdings_feed();
            &default_mapping
        }
    };
    let schema = mapping.resolve(headers)?;

    let mut positions: Vec<Position> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let row_no = i + 1;

        let Some(symbol) = schema.get(row, "symbol") else {
            debug!("Row {}: no symbol, skipped", row_no);
            continue;
        };

        let quantity = to_decimal(schema.get(row, "quantity").map_or(0.0, parse_numeric_str));
        let cost_basis =
            to_decimal(schema.get(row, "cost_basis").map_or(0.0, parse_numeric_str));

        if quantity < Decimal::ZERO || cost_basis < Decimal::ZERO {
            warn!("Row {}: negative quantity or cost for {}, skipped", row_no, symbol);
            continue;
        }

        let currency = schema.get(row, "currency").and_then(|code| {
            let parsed = Currency::from_code(code);
            if parsed.is_none() {
                debug!("Row {}: unrecognised currency '{}'", row_no, code);
            }
            parsed
        });

        let classification = Classification {
            sector: schema.get(row, "sector").map(str::to_string),
            country: schema.get(row, "country").map(str::to_string),
            rating: schema.get(row, "rating").map(str::to_string),
        };

        let position = Position {
            symbol: symbol.to_string(),
            name: schema.get(row, "name").map(str::to_string),
            quantity,
            cost_basis,
            currency,
            classification,
            sheet_value: schema.get(row, "value").map(parse_numeric_str),
        };

        match positions.iter_mut().find(|p| p.symbol == position.symbol) {
            Some(existing) => {
                debug!("Row {}: merging repeated symbol {}", row_no, symbol);
                if !existing.absorb(position) {
                    warn!("Row {}: merged amounts for {} out of range, skipped", row_no, symbol);
                }
            }
            None => positions.push(position),
        }
    }

    Ok(positions)
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

impl Position {
    /// Sheet value, or quantity × cost when the sheet has no value column.
    #[must_use]
    pub fn book_value(&self) -> f64 {
        self.sheet_value.unwrap_or_else(|| {
            self.quantity
                .checked_mul(self.cost_basis)
                .and_then(|v| v.to_f64())
                .unwrap_or(0.0)
        })
    }
}
