//! Folio CLI - Command-line interface for portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Portfolio dashboard from a holdings sheet and a market data file
//! folio report --holdings portafoglio.csv --market market.json
//!
//! # Allocation by sector
//! folio allocation --holdings portafoglio.csv --market market.json --by sector
//!
//! # Fair value estimates
//! folio value --financials eni.json --price 14.2 --discount-rate 8.5
//!
//! # Effective configuration
//! folio --config folio.toml config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "info,folio=debug"
    } else {
        "warn,folio=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Report(args) => commands::report::execute(args, &config, format).await?,
        Commands::Allocation(args) => {
            commands::allocation::execute(args, &config, format).await?
        }
        Commands::Value(args) => commands::value::execute(args, &config, format)?,
        Commands::Config(args) => commands::config::execute(args, &config, format)?,
    }

    Ok(())
}
