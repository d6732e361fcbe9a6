//! Configuration for portfolio analytics computation.

use folio_core::Currency;
use serde::{Deserialize, Serialize};

/// Label for records without a usable category.
pub const DEFAULT_BUCKET_LABEL: &str = "Altro";

/// Configuration for portfolio analytics computation.
///
/// Controls the reporting currency, bucketing labels and parallelism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Reporting currency all values are converted into.
    pub base_currency: Currency,

    /// Bucket label for holdings with no category.
    pub default_label: String,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_currency: Currency::EUR,
            default_label: DEFAULT_BUCKET_LABEL.to_string(),
            parallel: true,
            parallel_threshold: 100, // Parallel from 100 holdings up
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the reporting currency.
    #[must_use]
    pub fn with_base_currency(mut self, currency: Currency) -> Self {
        self.base_currency = currency;
        self
    }

    /// Sets the default bucket label.
    #[must_use]
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.base_currency, Currency::EUR);
        assert_eq!(config.default_label, "Altro");
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
    }

    #[test]
    fn test_sequential() {
        let config = AnalyticsConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyticsConfig::new()
            .with_base_currency(Currency::USD)
            .with_default_label("N/A")
            .with_threshold(50);

        assert_eq!(config.base_currency, Currency::USD);
        assert_eq!(config.default_label, "N/A");
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = AnalyticsConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_serde_partial() {
        // Missing keys fall back to defaults
        let parsed: AnalyticsConfig =
            serde_json::from_str(r#"{"base_currency":"USD"}"#).unwrap();
        assert_eq!(parsed.base_currency, Currency::USD);
        assert_eq!(parsed.default_label, "Altro");
        assert_eq!(parsed.parallel_threshold, 100);
    }
}
