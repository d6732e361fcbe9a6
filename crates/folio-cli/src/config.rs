//! Configuration file handling.
//!
//! ```toml
//! [analytics]
//! base_currency = "EUR"
//! default_label = "Altro"
//! parallel_threshold = 200
//!
//! [valuation]
//! discount_rate = 0.085
//! reference_pe = 18.0
//! ```

use std::path::Path;

use folio_portfolio::AnalyticsConfig;
use folio_valuation::ValuationAssumptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Effective CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Portfolio analytics settings.
    pub analytics: AnalyticsConfig,
    /// Valuation defaults.
    pub valuation: ValuationAssumptions,
}

impl CliConfig {
    /// Loads configuration from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                let content =
                    std::fs::read_to_string(path).map_err(|e| CliError::input(path, e))?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Currency;

    #[test]
    fn test_partial_file() {
        let config = CliConfig::from_toml(
            r#"
            [analytics]
            base_currency = "USD"

            [valuation]
            discount_rate = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.analytics.base_currency, Currency::USD);
        assert_eq!(config.analytics.default_label, "Altro");
        assert_eq!(config.valuation.discount_rate, 0.1);
        assert_eq!(config.valuation.reference_pe, 20.0);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_invalid_currency() {
        let result = CliConfig::from_toml("[analytics]\nbase_currency = \"EURO\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_toml() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/folio.toml"))).is_err());
        assert!(CliConfig::load(None).is_ok());
    }
}
