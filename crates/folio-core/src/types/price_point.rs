//! Dated closing prices.

use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A single closing price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Closing price in the instrument's native currency.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Sorts a series ascending by date, keeping the last observation for a
/// repeated date.
pub fn sort_series(series: &mut Vec<PricePoint>) {
    series.sort_by_key(|p| p.date);
    // dedup_by keeps the first of a run; reverse so the later entry survives
    series.reverse();
    series.dedup_by_key(|p| p.date);
    series.reverse();
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> CoreResult<Date> {
    Date::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CoreError::invalid_date(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_sort_series() {
        let mut series = vec![
            PricePoint::new(d(3), 12.0),
            PricePoint::new(d(1), 10.0),
            PricePoint::new(d(2), 11.0),
        ];
        sort_series(&mut series);
        let dates: Vec<_> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(1), d(2), d(3)]);
    }

    #[test]
    fn test_sort_series_duplicate_date_keeps_last() {
        let mut series = vec![
            PricePoint::new(d(1), 10.0),
            PricePoint::new(d(1), 10.5),
            PricePoint::new(d(2), 11.0),
        ];
        sort_series(&mut series);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].close, 10.5);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-01").unwrap(), d(1));
        assert!(parse_date("01/03/2024").is_err());
    }

    #[test]
    fn test_serde() {
        let json = r#"{"date":"2024-03-02","close":101.5}"#;
        let p: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(p, PricePoint::new(d(2), 101.5));
    }
}
