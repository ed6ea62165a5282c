// Domain types and value objects
mod price_series;
mod window;

// Re-export commonly used types to the world
pub use price_series::PriceSeries;
pub use window::Window;
