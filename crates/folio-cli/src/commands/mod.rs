//! CLI command implementations.

pub mod allocation;
pub mod config;
pub mod report;
pub mod value;

pub use allocation::AllocationArgs;
pub use config::ConfigArgs;
pub use report::ReportArgs;
pub use value::ValueArgs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use folio_portfolio::{
    collect_snapshot, positions_from_rows, FxRates, Holding, JsonMarketSource, MarketDataProvider,
    Position,
};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Holdings and market data inputs shared by portfolio commands.
#[derive(Args, Debug)]
pub struct PortfolioInput {
    /// Holdings sheet (CSV with a header row)
    #[arg(long)]
    pub holdings: PathBuf,

    /// Market data file (JSON). Without it, prices default to cost.
    #[arg(long)]
    pub market: Option<PathBuf>,

    /// Field delimiter of the holdings sheet
    #[arg(long, default_value = ",")]
    pub delimiter: String,
}

/// Reads positions from a holdings CSV.
pub fn load_positions(path: &Path, delimiter: &str) -> CliResult<Vec<Position>> {
    let delimiter = match delimiter.as_bytes() {
        [b] if b.is_ascii() => *b,
        _ => return Err(CliError::InvalidDelimiter(delimiter.to_string())),
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CliError::input(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CliError::input(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CliError::input(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let positions =
        positions_from_rows(&headers, &rows, None).map_err(|e| CliError::input(path, e))?;
    info!("Read {} positions from {}", positions.len(), path.display());
    Ok(positions)
}

/// Loads positions and market data, and enriches them into holdings.
pub async fn load_holdings(
    input: &PortfolioInput,
    config: &CliConfig,
) -> CliResult<(Vec<Holding>, FxRates)> {
    let positions = load_positions(&input.holdings, &input.delimiter)?;
    let base = config.analytics.base_currency;

    let provider = match &input.market {
        Some(path) => {
            let source = JsonMarketSource::from_path(path).map_err(|e| CliError::input(path, e))?;
            if source.base() != base {
                warn!(
                    "Market file rates are in {}, reporting currency is {}",
                    source.base(),
                    base
                );
            }
            MarketDataProvider::from_source(Arc::new(source))
        }
        None => MarketDataProvider::empty(),
    };

    let snapshot = collect_snapshot(&provider, &positions, base).await;
    let holdings = snapshot.enrich_all(&positions);
    Ok((holdings, snapshot.fx))
}

/// Converts a percentage argument (8.5) into a fraction (0.085).
pub fn percent_arg(value: f64) -> CliResult<f64> {
    if !(-100.0..=100.0).contains(&value) {
        return Err(CliError::InvalidRate(value));
    }
    Ok(value / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_percent_arg() {
        assert_eq!(percent_arg(8.5).unwrap(), 0.085);
        assert!(percent_arg(150.0).is_err());
    }

    #[test]
    fn test_load_semicolon_sheet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Titolo;Quantità;Prezzo di carico;Settore").unwrap();
        writeln!(file, "ENI.MI;100;12,50;Energia").unwrap();
        writeln!(file, ";;;").unwrap();

        let positions = load_positions(file.path(), ";").unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].symbol, "ENI.MI");
    }

    #[test]
    fn test_bad_delimiter() {
        assert!(matches!(
            load_positions(Path::new("x.csv"), "::"),
            Err(CliError::InvalidDelimiter(_))
        ));
    }
}
