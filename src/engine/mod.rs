mod core;
mod error;
mod messages;

pub use core::SimulationEngine;
pub use error::{InputError, SimulationError};
pub use messages::{SimulationReport, SimulationRequest};
