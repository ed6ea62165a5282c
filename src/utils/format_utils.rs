use {crate::config::SEARCH, std::time::Duration};

/// Integer cents back to dollars for display.
#[inline]
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / SEARCH.price_scale
}

/// One decimal place, e.g. `2.0%`.
pub fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Whole milliseconds below a second, seconds with two decimals above.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1_000 {
        format!("{} ms", ms)
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}
