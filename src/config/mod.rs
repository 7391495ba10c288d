//! Configuration module for the DCA simulator.

// Can all be private now because we have a public re-export.
mod data_source;
mod debug;
mod simulation;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use data_source::{CsvSourceConfig, DATA_SOURCE, DataSourceConfig};
pub use debug::{DF, LOG_PERFORMANCE, LogFlags};
pub use plot::PLOT_CONFIG;
pub use simulation::{SIMULATION, SimulationDefaults};
