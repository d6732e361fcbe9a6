//! Allocation command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use folio_portfolio::{
    bucket_by_country, bucket_by_currency, bucket_by_rating, bucket_by_sector, Distribution,
};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::PortfolioInput;
use crate::config::CliConfig;
use crate::output::{print_header, print_output};

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    #[command(flatten)]
    pub input: PortfolioInput,

    /// Classification to group by
    #[arg(long, value_enum, default_value = "sector")]
    pub by: GroupBy,
}

/// Classification dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    /// Industry sector
    Sector,
    /// Country
    Country,
    /// Trading currency
    Currency,
    /// Credit or analyst rating
    Rating,
}

impl GroupBy {
    fn title(self) -> &'static str {
        match self {
            Self::Sector => "Allocation by Sector",
            Self::Country => "Allocation by Country",
            Self::Currency => "Allocation by Currency",
            Self::Rating => "Allocation by Rating",
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct BucketRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight %")]
    weight_pct: String,
    #[tabled(rename = "Holdings")]
    count: usize,
}

/// Execute the allocation command.
pub async fn execute(args: AllocationArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let (holdings, fx) = super::load_holdings(&args.input, config).await?;
    let analytics = &config.analytics;

    let distribution = match args.by {
        GroupBy::Sector => bucket_by_sector(&holdings, &fx, analytics),
        GroupBy::Country => bucket_by_country(&holdings, &fx, analytics),
        GroupBy::Currency => bucket_by_currency(&holdings, &fx, analytics),
        GroupBy::Rating => bucket_by_rating(&holdings, &fx, analytics),
    };

    let rows = rows(&distribution);
    if format == OutputFormat::Table {
        print_header(args.by.title());
    }
    print_output(&rows, format)
}

/// Positive buckets, largest first.
fn rows(distribution: &Distribution) -> Vec<BucketRow> {
    distribution
        .sorted_by_value()
        .into_iter()
        .filter(|b| b.total_value > 0.0)
        .map(|b| BucketRow {
            category: b.category.clone(),
            value: format!("{:.2}", b.total_value),
            weight_pct: format!("{:.2}", b.weight_pct),
            count: b.count,
        })
        .collect()
}
