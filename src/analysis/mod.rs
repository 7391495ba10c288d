mod dca_calculator;

pub use dca_calculator::calculate;
