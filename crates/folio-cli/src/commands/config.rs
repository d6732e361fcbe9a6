//! Config command implementation.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_json, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the effective configuration as TOML
    Toml,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => print_json(config),
            _ => print_output(&rows(config), format),
        },
        ConfigCommand::Toml => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn rows(config: &CliConfig) -> Vec<KeyValue> {
    let a = &config.analytics;
    let v = &config.valuation;
    vec![
        KeyValue::new("analytics.base_currency", a.base_currency.to_string()),
        KeyValue::new("analytics.default_label", a.default_label.clone()),
        KeyValue::new("analytics.parallel", a.parallel.to_string()),
        KeyValue::new("analytics.parallel_threshold", a.parallel_threshold.to_string()),
        KeyValue::new("valuation.discount_rate", v.discount_rate.to_string()),
        KeyValue::new("valuation.growth_rate", v.growth_rate.to_string()),
        KeyValue::new("valuation.terminal_growth_rate", v.terminal_growth_rate.to_string()),
        KeyValue::new("valuation.dividend_growth_rate", v.dividend_growth_rate.to_string()),
        KeyValue::new("valuation.reference_pe", v.reference_pe.to_string()),
        KeyValue::new("valuation.projection_years", v.projection_years.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_setting() {
        let rows = rows(&CliConfig::default());
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].value, "EUR");
        assert_eq!(rows[1].value, "Altro");
    }
}
