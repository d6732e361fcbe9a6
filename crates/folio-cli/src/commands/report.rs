//! Report command implementation.
//!
//! Prints the portfolio dashboard figures and per-holding returns.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_portfolio::{calculate_portfolio_analytics, AnalyticsResult, FxRates, Holding};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::PortfolioInput;
use crate::config::CliConfig;
use crate::output::{
    format_fraction_pct, format_money, format_opt_pct, print_header, print_json, print_output,
    print_warning, KeyValue,
};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: PortfolioInput,
}

/// One row of the holdings table.
#[derive(Debug, Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Cost")]
    cost_basis: String,
    #[tabled(rename = "Price")]
    current_price: String,
    #[tabled(rename = "Ccy")]
    currency: String,
    #[tabled(rename = "Value")]
    market_value: String,
    #[tabled(rename = "Gain")]
    gain: String,
    #[tabled(rename = "Gain %")]
    gain_pct: String,
    #[tabled(rename = "Beta")]
    beta: String,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    analytics: &'a AnalyticsResult,
    holdings: &'a [Holding],
}

/// Execute the report command.
pub async fn execute(args: ReportArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let (holdings, fx) = super::load_holdings(&args.input, config).await?;
    let result = calculate_portfolio_analytics(&holdings, &fx, &config.analytics);

    match format {
        OutputFormat::Json => print_json(&ReportOutput {
            analytics: &result,
            holdings: &holdings,
        })?,
        OutputFormat::Csv => print_output(&holding_rows(&holdings, &result, &fx), format)?,
        OutputFormat::Table => {
            if holdings.is_empty() {
                print_warning("No positions found in the holdings sheet.");
            }
            print_header(&format!("Portfolio ({})", config.analytics.base_currency));
            print_output(&summary_rows(&result, config), format)?;
            print_header("Holdings");
            print_output(&holding_rows(&holdings, &result, &fx), format)?;
            println!(
                "Risk level: {}",
                match result.risk_level {
                    folio_portfolio::RiskLevel::Low => result.risk_level.label().green(),
                    folio_portfolio::RiskLevel::Medium => result.risk_level.label().yellow(),
                    folio_portfolio::RiskLevel::High => result.risk_level.label().red(),
                }
            );
        }
    }

    Ok(())
}

fn summary_rows(result: &AnalyticsResult, config: &CliConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Total Value", format_money(result.total_value)),
        KeyValue::new("Total Cost", format_money(result.total_cost)),
        KeyValue::new(
            "Unrealized Gain",
            format!(
                "{} ({})",
                format_money(result.unrealized_gain),
                format_opt_pct(result.unrealized_gain_pct())
            ),
        ),
        KeyValue::new("Weighted Beta", format!("{:.4}", result.weighted_beta)),
        KeyValue::new("Risk Level", result.risk_level.label()),
        KeyValue::new(
            "Volatility (ann.)",
            format_fraction_pct(result.annualized_std_dev),
        ),
        KeyValue::new("Return (ann.)", format_fraction_pct(result.annualized_return)),
        KeyValue::new("Sharpe Ratio", format!("{:.4}", result.sharpe_ratio)),
        KeyValue::new(
            "YTD Return",
            result
                .weighted_ytd_return
                .map_or_else(|| "n/a".to_string(), format_fraction_pct),
        ),
        KeyValue::new(
            "Projected Income",
            format!(
                "{:.2} {}",
                result.projected_annual_income, config.analytics.base_currency
            ),
        ),
        KeyValue::new("Dividend Yield", format_fraction_pct(result.dividend_yield)),
        KeyValue::new("History Points", result.value_series.len().to_string()),
    ]
}

fn holding_rows(holdings: &[Holding], result: &AnalyticsResult, fx: &FxRates) -> Vec<HoldingRow> {
    holdings
        .iter()
        .zip(&result.per_holding_return)
        .map(|(h, r)| HoldingRow {
            symbol: h.symbol.clone(),
            quantity: h.quantity.normalize().to_string(),
            cost_basis: format_money(h.cost_basis),
            current_price: format_money(h.current_price),
            currency: h.currency.to_string(),
            market_value: format_money(h.market_value(fx)),
            gain: format_money(r.absolute),
            gain_pct: format_opt_pct(r.percent),
            beta: format!("{:.2}", h.beta),
        })
        .collect()
}
