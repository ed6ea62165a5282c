use crate::{
    config::{DF, MaxPctChange},
    domain::{PriceSeries, Window},
    error::{Result, SearchError},
};

/// Reference strategy: every start index, extended rightward until the
/// window breaks the bound.
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    /// Longest feasible window in `series`.
    ///
    /// Among equal-length winners the one found last in scan order is kept
    /// (`>=`), i.e. the window with the largest start.
    ///
    /// O(n^2) on a fully flat series, close to O(n) when breaks are frequent.
    pub fn find(series: &PriceSeries, max_pct_change: MaxPctChange) -> Result<Window> {
        let prices = series.as_slice();
        let mut best = Window::singleton(0, prices).map_err(|_| SearchError::EmptyInput)?;

        for start in 0..prices.len().saturating_sub(1) {
            let mut current = Window::singleton(start, prices)?;
            for end in (start + 1)..prices.len() {
                current = Window::merge(&current, &Window::singleton(end, prices)?);
                if !current.is_feasible(max_pct_change) {
                    // Growing only widens [low, high]: no larger `end` can pass.
                    break;
                }
                if current.len() >= best.len() {
                    best = current;
                }
            }
        }

        if DF.log_search {
            log::debug!(
                "exhaustive: n={} threshold={} -> {}",
                prices.len(),
                max_pct_change,
                best
            );
        }
        Ok(best)
    }
}
