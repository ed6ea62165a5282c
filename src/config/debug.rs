//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit one line per strategy run (input size, threshold, winner).
    pub log_search: bool,

    /// Emit every crossing-midpoint candidate. Very noisy on real data.
    pub log_crossing: bool,

    /// Warn when a strategy run is slow (see `utils::timed`)
    pub log_performance: bool,

    /// Log rows rejected or converted while loading a price file
    pub log_loader: bool,
}

pub const DF: LogFlags = LogFlags {
    log_search: true,
    log_loader: true,

    log_crossing: false,
    log_performance: false,
};
