use {
    crate::{
        config::{Cents, MaxPctChange},
        error::{Result, SearchError},
    },
    serde::{Deserialize, Serialize},
    std::ops::RangeInclusive,
};

/// A contiguous, inclusive index range `[start, end]` of a price sequence
/// with its exact low and high cached.
///
/// Windows are values: `merge` builds a new one and never touches its operands.
/// Deserialized windows must satisfy `start <= end` and `0 < low <= high`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "WindowFields")]
pub struct Window {
    start: usize,
    end: usize,
    low: Cents,
    high: Cents,
}

#[derive(Deserialize)]
struct WindowFields {
    start: usize,
    end: usize,
    low: Cents,
    high: Cents,
}

impl TryFrom<WindowFields> for Window {
    type Error = SearchError;

    fn try_from(f: WindowFields) -> Result<Self> {
        if f.start > f.end || f.low <= 0 || f.low > f.high {
            return Err(SearchError::InvalidWindow {
                start: f.start,
                end: f.end,
                low: f.low,
                high: f.high,
            });
        }
        Ok(Window {
            start: f.start,
            end: f.end,
            low: f.low,
            high: f.high,
        })
    }
}

impl Window {
    /// The one-price window at `index`.
    pub fn singleton(index: usize, prices: &[Cents]) -> Result<Self> {
        let price = *prices.get(index).ok_or(SearchError::IndexOutOfRange {
            index,
            len: prices.len(),
        })?;
        Ok(Self {
            start: index,
            end: index,
            low: price,
            high: price,
        })
    }

    /// Spans `a` followed immediately by `b`.
    ///
    /// # Panics
    /// If `a.end + 1 != b.start`. A non-adjacent merge means the search itself
    /// is broken, so there is nothing sensible to recover to.
    pub fn merge(a: &Window, b: &Window) -> Window {
        assert!(
            a.end + 1 == b.start,
            "non-adjacent merge: left window ends at {}, right starts at {}",
            a.end,
            b.start
        );
        Self::merged(a, b)
    }

    /// Fallible twin of [`Window::merge`] for callers probing adjacency.
    pub fn try_merge(a: &Window, b: &Window) -> Result<Window> {
        if a.end + 1 != b.start {
            return Err(SearchError::NonAdjacentMerge {
                left_end: a.end,
                right_start: b.start,
            });
        }
        Ok(Self::merged(a, b))
    }

    #[inline]
    fn merged(a: &Window, b: &Window) -> Window {
        Window {
            start: a.start,
            end: b.end,
            low: a.low.min(b.low),
            high: a.high.max(b.high),
        }
    }

    /// Singleton for an index the search already knows is in bounds.
    #[inline]
    pub(crate) fn unit(index: usize, prices: &[Cents]) -> Window {
        let price = prices[index];
        Window {
            start: index,
            end: index,
            low: price,
            high: price,
        }
    }

    /// Extends this window by the price right after its end.
    ///
    /// The caller guarantees `self.end + 1 < prices.len()`; every search
    /// loop bounds its right anchor by the slice length.
    #[inline]
    pub(crate) fn extend_right(&self, prices: &[Cents]) -> Window {
        Self::merge(self, &Self::unit(self.end + 1, prices))
    }

    /// Percent change from low to high: `(high - low) / low * 100`.
    #[inline]
    pub fn percent_change(&self) -> f64 {
        (self.high - self.low) as f64 * 100.0 / self.low as f64
    }

    #[inline]
    pub fn is_feasible(&self, max_pct_change: MaxPctChange) -> bool {
        self.percent_change() <= max_pct_change.value()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A window always holds at least one price.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn low(&self) -> Cents {
        self.low
    }

    pub fn high(&self) -> Cents {
        self.high
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] len {} (low {}, high {})",
            self.start,
            self.end,
            self.len(),
            self.low,
            self.high
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(v: f64) -> MaxPctChange {
        MaxPctChange::new(v).unwrap()
    }

    #[test]
    fn test_singleton_takes_price_as_low_and_high() {
        let prices = [100, 250, 90];
        let w = Window::singleton(1, &prices).unwrap();
        assert_eq!((w.start(), w.end(), w.low(), w.high()), (1, 1, 250, 250));
        assert_eq!(w.len(), 1);
        assert!(w.is_feasible(pct(0.0)));
    }

    #[test]
    fn test_singleton_out_of_range() {
        let prices = [100, 101];
        assert_eq!(
            Window::singleton(2, &prices),
            Err(SearchError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(Window::singleton(0, &[]).is_err());
    }

    #[test]
    fn test_merge_combines_bounds() {
        let prices = [100, 120, 95, 110];
        let left = Window::merge(
            &Window::singleton(0, &prices).unwrap(),
            &Window::singleton(1, &prices).unwrap(),
        );
        let right = Window::merge(
            &Window::singleton(2, &prices).unwrap(),
            &Window::singleton(3, &prices).unwrap(),
        );
        let all = Window::merge(&left, &right);

        assert_eq!((all.start(), all.end()), (0, 3));
        assert_eq!((all.low(), all.high()), (95, 120));
        assert_eq!(all.len(), 4);
        // operands untouched
        assert_eq!((left.low(), left.high()), (100, 120));
        assert_eq!((right.low(), right.high()), (95, 110));
    }

    #[test]
    #[should_panic(expected = "non-adjacent merge")]
    fn test_merge_non_adjacent_panics() {
        let prices = [100, 101, 102];
        let a = Window::singleton(0, &prices).unwrap();
        let c = Window::singleton(2, &prices).unwrap();
        let _ = Window::merge(&a, &c);
    }

    #[test]
    fn test_try_merge_reports_gap() {
        let prices = [100, 101, 102];
        let a = Window::singleton(0, &prices).unwrap();
        let b = Window::singleton(1, &prices).unwrap();
        let c = Window::singleton(2, &prices).unwrap();
        assert_eq!(
            Window::try_merge(&a, &c),
            Err(SearchError::NonAdjacentMerge {
                left_end: 0,
                right_start: 2
            })
        );
        // overlapping is rejected too
        assert!(Window::try_merge(&b, &b).is_err());
        assert_eq!(Window::try_merge(&a, &b).unwrap(), Window::merge(&a, &b));
    }

    #[test]
    fn test_feasibility_boundary_is_inclusive() {
        let prices = [100, 105];
        let w = Window::singleton(0, &prices).unwrap().extend_right(&prices);
        assert_eq!(w.percent_change(), 5.0);
        assert!(w.is_feasible(pct(5.0)));
        assert!(!w.is_feasible(pct(4.99)));
    }

    #[test]
    fn test_feasibility_boundary_at_seven_percent() {
        // (high - low) / low * 100 would give 7.000000000000001 here.
        let prices = [100, 107];
        let w = Window::singleton(0, &prices).unwrap().extend_right(&prices);
        assert_eq!(w.percent_change(), 7.0);
        assert!(w.is_feasible(pct(7.0)));
    }

    #[test]
    fn test_deserialize_rejects_impossible_windows() {
        let ok: Window =
            serde_json::from_str(r#"{"start":1,"end":3,"low":95,"high":120}"#).unwrap();
        assert_eq!((ok.len(), ok.low(), ok.high()), (3, 95, 120));

        for json in [
            r#"{"start":5,"end":1,"low":100,"high":100}"#,
            r#"{"start":0,"end":1,"low":900,"high":1}"#,
            r#"{"start":0,"end":0,"low":0,"high":0}"#,
        ] {
            let err = serde_json::from_str::<Window>(json).unwrap_err();
            assert!(err.to_string().contains("invalid window"), "{json}: {err}");
        }
    }

    #[test]
    fn test_extend_right_matches_merge() {
        let prices = [300, 280, 310];
        let w = Window::singleton(0, &prices).unwrap();
        let by_extend = w.extend_right(&prices).extend_right(&prices);
        let by_merge = Window::merge(
            &Window::merge(&w, &Window::singleton(1, &prices).unwrap()),
            &Window::singleton(2, &prices).unwrap(),
        );
        assert_eq!(by_extend, by_merge);
        assert!(by_extend.contains(1));
        assert!(!by_extend.contains(3));
    }
}
