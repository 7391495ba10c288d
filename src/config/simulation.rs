//! Defaults for a simulation request

pub struct SimulationDefaults {
    /// Monthly contribution pre-filled in the form and used by `dca_report` without `--monthly`
    pub monthly_investment: f64,
}

pub const SIMULATION: SimulationDefaults = SimulationDefaults {
    monthly_investment: 100.0,
};
