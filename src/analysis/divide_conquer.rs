//! Divide-and-conquer search for the longest lateral trend.
//!
//! Same shape as the classic maximum-subarray recursion: the best window of
//! `[first, last]` lies wholly in the left half, wholly in the right half, or
//! straddles the midpoint. The straddling case is [`DivideAndConquerSearch::crossing_best`].
//!
//! The crossing scan is quadratic in the worst case, so the whole search is
//! O(n^2) like the exhaustive one. It changes where the work happens, not the bound.

use crate::{
    config::{Cents, DF, MaxPctChange, SEARCH},
    domain::{PriceSeries, Window},
    error::{Result, SearchError},
};

pub struct DivideAndConquerSearch;

impl DivideAndConquerSearch {
    /// Longest feasible window in `series`, solved recursively on one thread.
    pub fn find(series: &PriceSeries, max_pct_change: MaxPctChange) -> Result<Window> {
        let prices = series.as_slice();
        if prices.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        let best = Self::solve(prices, 0, prices.len() - 1, max_pct_change);

        if DF.log_search {
            log::debug!(
                "divide-and-conquer: n={} threshold={} -> {}",
                prices.len(),
                max_pct_change,
                best
            );
        }
        Ok(best)
    }

    /// Same answer as [`Self::find`], with the two halves and the crossing scan
    /// run on the rayon pool. Sub-ranges shorter than `SEARCH.parallel_cutoff`
    /// fall back to the sequential recursion.
    pub fn find_parallel(series: &PriceSeries, max_pct_change: MaxPctChange) -> Result<Window> {
        let prices = series.as_slice();
        if prices.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        let best = Self::solve_parallel(prices, 0, prices.len() - 1, max_pct_change);

        if DF.log_search {
            log::debug!(
                "parallel divide-and-conquer: n={} threshold={} -> {}",
                prices.len(),
                max_pct_change,
                best
            );
        }
        Ok(best)
    }

    /// Best window inside `[first, last]` (inclusive, `first <= last`).
    pub(crate) fn solve(
        prices: &[Cents],
        first: usize,
        last: usize,
        max_pct_change: MaxPctChange,
    ) -> Window {
        if first >= last {
            return Window::unit(first, prices);
        }
        // (first + last) / 2 without the overflow
        let mid = first + (last - first) / 2;

        let left = Self::solve(prices, first, mid, max_pct_change);
        let right = Self::solve(prices, mid + 1, last, max_pct_change);
        let crossing = Self::crossing_best(prices, first, mid, last, max_pct_change);

        Self::pick(left, right, crossing)
    }

    fn solve_parallel(
        prices: &[Cents],
        first: usize,
        last: usize,
        max_pct_change: MaxPctChange,
    ) -> Window {
        if last - first + 1 < SEARCH.parallel_cutoff {
            return Self::solve(prices, first, last, max_pct_change);
        }
        let mid = first + (last - first) / 2;

        let ((left, right), crossing) = rayon::join(
            || {
                rayon::join(
                    || Self::solve_parallel(prices, first, mid, max_pct_change),
                    || Self::solve_parallel(prices, mid + 1, last, max_pct_change),
                )
            },
            || Self::crossing_best(prices, first, mid, last, max_pct_change),
        );

        Self::pick(left, right, crossing)
    }

    /// Longest of the three; ties go to crossing, then right, then left.
    #[inline]
    pub(crate) fn pick(left: Window, right: Window, crossing: Window) -> Window {
        let mut best = crossing;
        if right.len() > best.len() {
            best = right;
        }
        if left.len() > best.len() {
            best = left;
        }
        best
    }

    /// Longest feasible window inside `[first, last]` that holds both `mid`
    /// and `mid + 1`.
    ///
    /// The left anchor walks down from `mid` one index per iteration. For each
    /// anchor the right end grows from `anchor + 1` until the window breaks the
    /// bound. Growth only widens `[low, high]`, so the first break ends that
    /// anchor's scan, and an anchor that cannot even reach `mid + 1` ends the
    /// whole walk: every smaller anchor contains that failing window.
    ///
    /// Returns the singleton at `mid` when no crossing window is feasible.
    /// Equal-length candidates keep the first one found (largest anchor).
    ///
    /// # Panics
    /// Unless `first <= mid < last < prices.len()`.
    pub fn crossing_best(
        prices: &[Cents],
        first: usize,
        mid: usize,
        last: usize,
        max_pct_change: MaxPctChange,
    ) -> Window {
        assert!(
            first <= mid && mid < last && last < prices.len(),
            "crossing range [{first}, {mid}, {last}] invalid for {} prices",
            prices.len()
        );

        let mut best = Window::unit(mid, prices);

        for anchor in (first..=mid).rev() {
            let mut current = Window::unit(anchor, prices);
            let mut crossed = false;

            for end in (anchor + 1)..=last {
                current = current.extend_right(prices);
                if !current.is_feasible(max_pct_change) {
                    break;
                }
                if end > mid {
                    crossed = true;
                    if current.len() > best.len() {
                        best = current;
                    }
                }
            }

            if DF.log_crossing {
                log::trace!(
                    "crossing [{first}, {mid}, {last}] anchor {anchor}: crossed={crossed} best={best}"
                );
            }
            if !crossed {
                break;
            }
        }

        best
    }
}
