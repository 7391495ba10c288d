mod error;
mod loader;

pub use {
    error::LoadError,
    loader::{load_price_series, load_prices, read_prices},
};
