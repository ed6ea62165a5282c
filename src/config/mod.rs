//! Configuration module for the lateral trend search.

// Can all be private now because we have a public re-export.
mod debug;
mod search;
mod types;

// Re-export commonly used items
pub use debug::DF;
pub use search::{SEARCH, SearchConfig};
pub use types::{Cents, MaxPctChange};
