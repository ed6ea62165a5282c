//! Runs every search strategy over one price file and checks that they agree.
//!
//! Exits with an error when the winning lengths differ, which would mean one
//! of the strategies is broken.

use {
    anyhow::{Result, bail},
    clap::Parser,
    lateral_trend::{SearchStrategy, TrendReport, config::SEARCH, data::load_prices, run_series},
    std::path::PathBuf,
    strum::IntoEnumIterator,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV of daily prices; the second column is the closing price in dollars
    csv_path: PathBuf,

    /// Max percent change between high and low closes
    #[arg(long, default_value_t = SEARCH.default_max_pct_change)]
    max_pct_change: f64,
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // 2. Load once, search many
    let series = load_prices(&args.csv_path)?;
    log::info!(
        "Comparing {} strategies on {} prices (max change {}%)",
        SearchStrategy::iter().count(),
        series.len(),
        args.max_pct_change
    );

    let reports = SearchStrategy::iter()
        .map(|strategy| run_series(&series, args.max_pct_change, strategy))
        .collect::<Result<Vec<TrendReport>>>()?;

    println!("{}", TrendReport::table(&reports));

    // 3. Agreement check
    let expected = reports[0].length;
    if let Some(odd) = reports.iter().find(|r| r.length != expected) {
        bail!(
            "Strategies disagree: {} found length {}, {} found length {}",
            reports[0].strategy,
            expected,
            odd.strategy,
            odd.length
        );
    }

    log::info!("✅ All strategies agree on length {}", expected);
    Ok(())
}
