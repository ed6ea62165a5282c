use {
    crate::config::DF,
    std::{fmt::Display, time::{Duration, Instant}},
};

/// Runs `f`, logging a warning when it takes longer than `threshold`.
/// Does nothing extra unless `DF.log_performance` is on.
pub fn timed<T>(label: impl Display, threshold: Duration, f: impl FnOnce() -> T) -> T {
    if !DF.log_performance {
        return f();
    }
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    if elapsed > threshold {
        log::warn!(
            "slow {}: {:.3} ms (threshold {:.3} ms)",
            label,
            elapsed.as_secs_f64() * 1000.0,
            threshold.as_secs_f64() * 1000.0
        );
    }
    result
}
