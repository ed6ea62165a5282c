#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries)
pub use analysis::{SearchStrategy, find_longest_lateral_trend};
pub use config::MaxPctChange;
pub use domain::{PriceSeries, Window};
pub use error::SearchError;
pub use report::{ReportFormat, TrendReport};

// CLI argument parsing
use {
    clap::Parser,
    std::{path::PathBuf, time::Instant},
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV of daily prices; the second column is the closing price in dollars
    pub csv_path: PathBuf,

    /// How far apart the high and low closes may be, in percent, for a lateral trend
    #[arg(long, default_value_t = config::SEARCH.default_max_pct_change)]
    pub max_pct_change: f64,

    /// Search algorithm
    #[arg(long, value_enum, default_value_t = SearchStrategy::default())]
    pub strategy: SearchStrategy,

    /// Use the exhaustive search (same as `--strategy exhaustive`)
    #[arg(long, default_value_t = false, conflicts_with = "strategy")]
    pub brute: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::default())]
    pub format: ReportFormat,

    /// Log at debug level for this crate
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn selected_strategy(&self) -> SearchStrategy {
        if self.brute {
            SearchStrategy::Exhaustive
        } else {
            self.strategy
        }
    }
}

/// Loads the prices named by `args`, runs the selected strategy and times it.
/// This is the public API for the binary to call
pub fn run(args: &Cli) -> anyhow::Result<TrendReport> {
    let strategy = args.selected_strategy();
    let series = data::load_prices(&args.csv_path)?;
    run_series(&series, args.max_pct_change, strategy)
}

/// Runs one strategy over an already loaded series.
pub fn run_series(
    series: &PriceSeries,
    max_pct_change: f64,
    strategy: SearchStrategy,
) -> anyhow::Result<TrendReport> {
    let threshold = MaxPctChange::new(max_pct_change)?;

    let start = Instant::now();
    let window = strategy.run(series, threshold)?;
    let elapsed = start.elapsed();

    Ok(TrendReport::new(strategy, threshold, window, elapsed))
}
