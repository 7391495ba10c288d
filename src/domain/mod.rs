// Domain types and value objects
mod price_point;
mod price_series;

// Re-export commonly used types to the world
pub use price_point::{MonthlyPrice, PricePoint};
pub use price_series::{PriceSeries, RawPriceSeries};
