//! Value command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_valuation::{value_company, FinancialSnapshot, ValuationSummary};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::percent_arg;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Financial statements (JSON)
    #[arg(long)]
    pub financials: PathBuf,

    /// Current market price, for the upside figure
    #[arg(long)]
    pub price: Option<f64>,

    /// Discount rate in percent (e.g. 9 for 9%)
    #[arg(long, allow_hyphen_values = true)]
    pub discount_rate: Option<f64>,

    /// Cash flow growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub growth: Option<f64>,

    /// Terminal growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub terminal_growth: Option<f64>,

    /// Dividend growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub dividend_growth: Option<f64>,

    /// Reference price/earnings multiple
    #[arg(long)]
    pub pe: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct EstimateRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Fair Value")]
    fair_value: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    symbol: Option<&'a str>,
    price: Option<f64>,
    upside_pct: Option<f64>,
    #[serde(flatten)]
    summary: &'a ValuationSummary,
}

/// Execute the value command.
pub fn execute(args: ValueArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    if let Some(price) = args.price {
        if price <= 0.0 || !price.is_finite() {
            return Err(CliError::InvalidPrice(price).into());
        }
    }

    let mut assumptions = config.valuation.clone();
    if let Some(rate) = args.discount_rate {
        assumptions = assumptions.with_discount_rate(percent_arg(rate)?);
    }
    if let Some(rate) = args.growth {
        assumptions = assumptions.with_growth_rate(percent_arg(rate)?);
    }
    if let Some(rate) = args.terminal_growth {
        assumptions = assumptions.with_terminal_growth_rate(percent_arg(rate)?);
    }
    if let Some(rate) = args.dividend_growth {
        assumptions = assumptions.with_dividend_growth_rate(percent_arg(rate)?);
    }
    if let Some(pe) = args.pe {
        assumptions = assumptions.with_reference_pe(pe);
    }

    let content = std::fs::read_to_string(&args.financials)
        .map_err(|e| CliError::input(&args.financials, e))?;
    let snapshot: FinancialSnapshot =
        serde_json::from_str(&content).map_err(|e| CliError::input(&args.financials, e))?;

    let summary = value_company(&snapshot, &assumptions);
    let upside = args.price.and_then(|p| summary.upside_pct(p));

    match format {
        OutputFormat::Json => print_json(&ValueOutput {
            symbol: snapshot.symbol.as_deref(),
            price: args.price,
            upside_pct: upside,
            summary: &summary,
        })?,
        OutputFormat::Csv => print_output(&estimate_rows(&summary), format)?,
        OutputFormat::Table => {
            print_header(&format!(
                "Fair Value: {}",
                snapshot.symbol.as_deref().unwrap_or("company")
            ));
            print_output(&estimate_rows(&summary), format)?;

            let mut totals = vec![KeyValue::new(
                "Average Fair Value",
                summary
                    .average_fair_value
                    .map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v)),
            )];
            if let Some(price) = args.price {
                totals.push(KeyValue::new("Market Price", format!("{:.2}", price)));
                totals.push(KeyValue::new(
                    "Upside",
                    upside.map_or_else(
                        || "n/a".to_string(),
                        |u| {
                            let text = format!("{:+.2}%", u);
                            if u >= 0.0 {
                                text.green().to_string()
                            } else {
                                text.red().to_string()
                            }
                        },
                    ),
                ));
            }
            print_output(&totals, format)?;
        }
    }

    Ok(())
}

fn estimate_rows(summary: &ValuationSummary) -> Vec<EstimateRow> {
    summary
        .estimates
        .iter()
        .map(|e| EstimateRow {
            model: e.model.label().to_string(),
            fair_value: e
                .fair_value_per_share
                .map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v)),
            note: match (&e.unavailable_reason, e.is_usable()) {
                (Some(reason), _) => reason.clone(),
                (None, false) => "not positive, excluded from average".to_string(),
                (None, true) => String::new(),
            },
        })
        .collect()
}
