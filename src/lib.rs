#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types outside of crate (for dca_report.rs and tests/)
pub use analysis::calculate;
pub use app::App;
pub use config::{DATA_SOURCE, SIMULATION};
pub use data::{LoadError, load_price_series, load_prices};
pub use domain::{MonthlyPrice, PricePoint, PriceSeries, RawPriceSeries};
pub use engine::{InputError, SimulationEngine, SimulationError, SimulationReport, SimulationRequest};
pub use models::{MonthlySnapshot, SimulationResult, SummaryLines};
pub use ui::UI_TEXT;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Price CSV to load instead of the default export in the working directory
    #[arg(long)]
    pub data: Option<PathBuf>,
}

impl Cli {
    pub fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| PathBuf::from(DATA_SOURCE.csv.csv_path))
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
