mod chart_data;
mod simulation_result;
mod summary;

pub use {
    chart_data::{BarSign, ChartData, ChartKind, ChartPoint, ProfitLossBar},
    simulation_result::{MonthlySnapshot, SimulationResult},
    summary::SummaryLines,
};
