//! Closing-price data source.
//!
//! Reads a CSV with a header row and the close price (in dollars) in
//! `SEARCH.close_column`, e.g. `Date,Close,...`. Prices are converted to
//! integer cents by truncation so every later comparison is exact.

use {
    crate::{
        config::{Cents, DF, SEARCH},
        domain::PriceSeries,
    },
    anyhow::{Context, Result, bail},
    csv::ReaderBuilder,
    std::{fs::File, io::Read, path::Path},
};

/// Loads every closing price in the file at `path`.
pub fn load_prices(path: impl AsRef<Path>) -> Result<PriceSeries> {
    let path = path.as_ref();
    let file = File::open(path).context(format!("Failed to open price file: {:?}", path))?;
    let series =
        prices_from_reader(file).context(format!("Failed to load prices from: {:?}", path))?;

    if DF.log_loader {
        log::info!("Loaded {} closing prices from {:?}", series.len(), path);
    }
    Ok(series)
}

/// Same as [`load_prices`] over any reader; the header row is skipped.
pub fn prices_from_reader<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut prices: Vec<Cents> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let Some(raw) = record.get(SEARCH.close_column) else {
            bail!(
                "Line {}: missing close column {} (row has {} fields)",
                line,
                SEARCH.close_column,
                record.len()
            );
        };
        let close: f64 = raw
            .parse()
            .with_context(|| format!("Line {}: cannot parse close price '{}'", line, raw))?;
        if !close.is_finite() {
            bail!("Line {}: close price '{}' is not a finite number", line, raw);
        }

        let cents = (SEARCH.price_scale * close) as Cents;
        if cents <= 0 {
            bail!(
                "Line {}: close price {} is not positive ({} cents)",
                line,
                close,
                cents
            );
        }
        prices.push(cents);
    }

    Ok(PriceSeries::new(prices)?)
}
