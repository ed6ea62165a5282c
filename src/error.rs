//! Error taxonomy for the lateral trend search.

use thiserror::Error;

/// Everything that can stop a search from producing a window.
///
/// Infeasible windows met while scanning are ordinary control flow and never
/// show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The price sequence has no elements, so no window exists.
    #[error("empty input: no prices to search")]
    EmptyInput,

    /// Threshold is negative (or NaN).
    #[error("invalid threshold {value}: max percent change must be >= 0")]
    InvalidThreshold { value: f64 },

    /// A price of zero or less makes the percent change undefined.
    #[error("non-positive price {price} at index {index}")]
    NonPositivePrice { index: usize, price: i64 },

    /// A singleton was requested for an index outside the sequence.
    #[error("index {index} out of range for {len} prices")]
    IndexOutOfRange { index: usize, len: usize },

    /// Two windows were merged without being index-adjacent.
    #[error("non-adjacent merge: left window ends at {left_end}, right starts at {right_start}")]
    NonAdjacentMerge { left_end: usize, right_start: usize },

    /// Window fields that no search could have produced.
    #[error("invalid window [{start}, {end}] with low {low}, high {high}")]
    InvalidWindow {
        start: usize,
        end: usize,
        low: i64,
        high: i64,
    },
}

pub type Result<T> = std::result::Result<T, SearchError>;
