//! Locale-aware numeric parsing.
//!
//! Spreadsheet feeds deliver amounts as Italian-formatted text such as
//! `"€ 1.234,56"` or `"12,5%"`. The rules are:
//!
//! 1. Anything that is not a string yields `0`.
//! 2. `€`, `%` and whitespace are stripped.
//! 3. `.` is a thousands separator and is removed.
//! 4. `,` is the decimal separator and becomes `.`.
//! 5. The longest leading float literal is parsed; no literal yields `0`.
//!
//! Rule 1 discards values that are already numeric. Callers holding typed
//! numbers must not route them through [`parse_numeric`].

use serde_json::Value;

/// Parses a loosely typed cell value.
///
/// Returns `0.0` for non-string values and for strings that contain no
/// parseable number.
///
/// # Example
///
/// ```rust
/// use folio_core::numeric::parse_numeric;
/// use serde_json::json;
///
/// assert_eq!(parse_numeric(&json!("1.234,56")), 1234.56);
/// assert_eq!(parse_numeric(&json!(5)), 0.0);
/// ```
#[must_use]
pub fn parse_numeric(value: &Value) -> f64 {
    match value {
        Value::String(s) => parse_numeric_str(s),
        _ => 0.0,
    }
}

/// Parses a locale-formatted string, defaulting to `0.0`.
#[must_use]
pub fn parse_numeric_str(s: &str) -> f64 {
    parse_locale_number(s).unwrap_or(0.0)
}

/// Parses a locale-formatted string.
///
/// Returns `None` when the cleaned text has no leading float literal or the
/// literal is not finite.
#[must_use]
pub fn parse_locale_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != '€' && *c != '%' && *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let literal = leading_float(&cleaned)?;
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns the longest prefix of `s` of the form
/// `[+-]? (digits [. digits*] | . digits) ([eE] [+-]? digits)?`.
fn leading_float(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(&s[..i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_canonical_forms() {
        assert_relative_eq!(parse_numeric(&json!("1.234,56")), 1234.56);
        assert_relative_eq!(parse_numeric(&json!("€ 1.234,56")), 1234.56);
        assert_relative_eq!(parse_numeric(&json!("12,5%")), 12.5);
    }

    #[test]
    fn test_non_string_yields_zero() {
        assert_eq!(parse_numeric(&json!(5)), 0.0);
        assert_eq!(parse_numeric(&json!(12.5)), 0.0);
        assert_eq!(parse_numeric(&json!(true)), 0.0);
        assert_eq!(parse_numeric(&Value::Null), 0.0);
        assert_eq!(parse_numeric(&json!(["1"])), 0.0);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(parse_numeric_str(""), 0.0);
        assert_eq!(parse_numeric_str("€ %"), 0.0);
        assert_eq!(parse_numeric_str("   "), 0.0);
        assert_eq!(parse_locale_number("€"), None);
    }

    #[test]
    fn test_negative_and_signed() {
        assert_relative_eq!(parse_numeric_str("-1.000,25 €"), -1000.25);
        assert_relative_eq!(parse_numeric_str("+3,5%"), 3.5);
        assert_relative_eq!(parse_numeric_str("-0,4 %"), -0.4);
    }

    #[test]
    fn test_thousands_only() {
        // A lone dot is always a thousands separator
        assert_relative_eq!(parse_numeric_str("1.234"), 1234.0);
        assert_relative_eq!(parse_numeric_str("12.345.678"), 12_345_678.0);
    }

    #[test]
    fn test_leading_prefix_semantics() {
        assert_relative_eq!(parse_numeric_str("100 USD"), 100.0);
        assert_relative_eq!(parse_numeric_str("1,2,3"), 1.2);
        assert_relative_eq!(parse_numeric_str(",5"), 0.5);
        assert_eq!(parse_numeric_str("USD 100"), 0.0);
        assert_eq!(parse_numeric_str("N/A"), 0.0);
        assert_eq!(parse_numeric_str("-"), 0.0);
    }

    #[test]
    fn test_exponent() {
        assert_relative_eq!(parse_numeric_str("1e3"), 1000.0);
        assert_relative_eq!(parse_numeric_str("2,5E-2"), 0.025);
        // Dangling exponent marker is ignored
        assert_relative_eq!(parse_numeric_str("7e"), 7.0);
    }

    #[test]
    fn test_non_breaking_space() {
        assert_relative_eq!(parse_numeric_str("1.000,00\u{a0}€"), 1000.0);
    }

    #[test]
    fn test_overflow_is_not_a_number() {
        assert_eq!(parse_locale_number("1e999"), None);
        assert_eq!(parse_numeric_str("1e999"), 0.0);
    }

    fn format_italian(units: u64, cents: u64) -> String {
        let digits = units.to_string();
        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        format!("€ {},{:02}", grouped, cents)
    }

    proptest! {
        #[test]
        fn prop_italian_currency_roundtrip(units in 0u64..10_000_000_000, cents in 0u64..100) {
            let text = format_italian(units, cents);
            let expected = units as f64 + cents as f64 / 100.0;
            let parsed = parse_numeric_str(&text);
            prop_assert!((parsed - expected).abs() <= expected.abs() * 1e-12 + 1e-9);
        }

        #[test]
        fn prop_never_nan(s in ".*") {
            let v = parse_numeric_str(&s);
            prop_assert!(v.is_finite());
        }
    }
}
