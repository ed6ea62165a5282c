// Lateral trend search strategies
mod divide_conquer;
mod exhaustive;
mod search;

pub use divide_conquer::DivideAndConquerSearch;
pub use exhaustive::ExhaustiveSearch;
pub use search::{SearchStrategy, find_longest_lateral_trend};
