mod price_loader;

pub use price_loader::{load_prices, prices_from_reader};
