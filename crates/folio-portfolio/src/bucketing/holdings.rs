//! Allocation of holdings by classification.

use super::Distribution;
use crate::types::{AnalyticsConfig, FxRates, Holding};
use rust_decimal::prelude::ToPrimitive;

fn value_in_base(holding: &Holding, fx: &FxRates) -> f64 {
    holding.market_value(fx).to_f64().unwrap_or(0.0)
}

/// Groups holdings by an arbitrary classifier.
///
/// Values are market values converted into the reporting currency. Holdings
/// for which the classifier returns `None` fall into the configured default
/// label.
#[must_use]
pub fn bucket_by_classifier<F>(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
    classifier: F,
) -> Distribution
where
    F: Fn(&Holding) -> Option<&str>,
{
    Distribution::from_records(
        holdings,
        classifier,
        |h| value_in_base(h, fx),
        &config.default_label,
    )
}

/// Groups holdings by sector.
#[must_use]
pub fn bucket_by_sector(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
) -> Distribution {
    bucket_by_classifier(holdings, fx, config, |h| h.classification.sector.as_deref())
}

/// Groups holdings by country of risk.
#[must_use]
pub fn bucket_by_country(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
) -> Distribution {
    bucket_by_classifier(holdings, fx, config, |h| h.classification.country.as_deref())
}

/// Groups holdings by credit rating.
#[must_use]
pub fn bucket_by_rating(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
) -> Distribution {
    bucket_by_classifier(holdings, fx, config, |h| h.classification.rating.as_deref())
}

/// Groups holdings by trading currency.
#[must_use]
pub fn bucket_by_currency(
    holdings: &[Holding],
    fx: &FxRates,
    config: &AnalyticsConfig,
) -> Distribution {
    bucket_by_classifier(holdings, fx, config, |h| Some(h.currency.code()))
}
