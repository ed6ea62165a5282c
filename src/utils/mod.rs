mod format_utils;
mod perf;

pub use format_utils::{cents_to_dollars, format_elapsed, format_pct};
pub use perf::timed;
