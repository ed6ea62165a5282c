//! Search constants (Immutable Blueprints)

pub struct SearchConfig {
    /// Threshold used when the caller does not pass `--max-pct-change`.
    pub default_max_pct_change: f64,
    /// Multiplier from dollars in the CSV to integer cents.
    pub price_scale: f64,
    /// Zero-based CSV column holding the closing price.
    pub close_column: usize,
    /// Sub-ranges shorter than this are solved sequentially by the parallel strategy.
    pub parallel_cutoff: usize,
}

pub const SEARCH: SearchConfig = SearchConfig {
    default_max_pct_change: 5.0,
    price_scale: 100.0,
    close_column: 1,
    parallel_cutoff: 2_048,
};
