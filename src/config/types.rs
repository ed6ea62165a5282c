use serde::{Deserialize, Serialize};

use crate::config::SEARCH;
use crate::error::{Result, SearchError};

/// A closing price in minor currency units. Integers keep the min/max
/// comparisons exact.
pub type Cents = i64;

/// Upper bound on `(high - low) / low * 100` for a window to count as a lateral trend.
///
/// Deserializing goes through [`MaxPctChange::new`], so a bad threshold never
/// reaches a search.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MaxPctChange(f64);

impl MaxPctChange {
    pub const DEFAULT_VALUE: f64 = SEARCH.default_max_pct_change;
    pub const DEFAULT: Self = Self(Self::DEFAULT_VALUE);

    /// Rejects negative and NaN thresholds. Unlike the clamping price types,
    /// a bad threshold is surfaced to the caller.
    pub fn new(val: f64) -> Result<Self> {
        if val.is_nan() || val < 0.0 {
            return Err(SearchError::InvalidThreshold { value: val });
        }
        Ok(Self(val))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for MaxPctChange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for MaxPctChange {
    type Error = SearchError;

    fn try_from(v: f64) -> Result<Self> {
        Self::new(v)
    }
}

impl From<MaxPctChange> for f64 {
    fn from(t: MaxPctChange) -> f64 {
        t.0
    }
}

impl std::fmt::Display for MaxPctChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
