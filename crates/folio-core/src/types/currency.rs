//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// ISO 4217 currency code.
///
/// Stored as three uppercase ASCII letters so that any code a quote feed
/// reports can be carried, not only a fixed list. Constants are provided for
/// the currencies portfolios are most commonly reported in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// Euro
    pub const EUR: Currency = Currency(*b"EUR");
    /// United States Dollar
    pub const USD: Currency = Currency(*b"USD");
    /// British Pound Sterling
    pub const GBP: Currency = Currency(*b"GBP");
    /// Swiss Franc
    pub const CHF: Currency = Currency(*b"CHF");
    /// Japanese Yen
    pub const JPY: Currency = Currency(*b"JPY");
    /// Canadian Dollar
    pub const CAD: Currency = Currency(*b"CAD");
    /// Australian Dollar
    pub const AUD: Currency = Currency(*b"AUD");
    /// Swedish Krona
    pub const SEK: Currency = Currency(*b"SEK");
    /// Danish Krone
    pub const DKK: Currency = Currency(*b"DKK");
    /// Hong Kong Dollar
    pub const HKD: Currency = Currency(*b"HKD");

    /// Parses a currency from a string code (case-insensitive, trimmed).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let bytes = code.trim().as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Currency([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Returns the currency symbol, falling back to the code.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match &self.0 {
            b"EUR" => "€",
            b"USD" => "$",
            b"GBP" => "£",
            b"JPY" => "¥",
            b"CAD" => "C$",
            b"AUD" => "A$",
            b"HKD" => "HK$",
            _ => self.code(),
        }
    }

    /// Returns the standard number of decimal places for the currency.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match &self.0 {
            b"JPY" => 0,
            _ => 2,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Currency::from_code(s).ok_or_else(|| CoreError::invalid_currency(s))
    }
}

impl TryFrom<String> for Currency {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.code(), "GBP");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::from_code("NOK").unwrap().symbol(), "NOK");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code(" eur "), Some(Currency::EUR));
        assert_eq!(Currency::from_code("XAU").unwrap().code(), "XAU");
        assert_eq!(Currency::from_code("EU"), None);
        assert_eq!(Currency::from_code("E1R"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "EURO".parse::<Currency>().unwrap_err();
        assert_eq!(err, CoreError::invalid_currency("EURO"));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::EUR.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(Currency::default(), Currency::EUR);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
        let parsed: Currency = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(parsed, Currency::CHF);
        assert!(serde_json::from_str::<Currency>("\"12\"").is_err());
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Currency::USD);
        set.insert(Currency::EUR);
        set.insert(Currency::from_code("usd").unwrap());

        assert_eq!(set.len(), 2);
    }
}
