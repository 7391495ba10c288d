use eframe::egui::Context;

use crate::app::{App, ReadyState, state::{AppState, LoadFailedState}};
use crate::config::SIMULATION;
use crate::engine::SimulationEngine;

/// Reads and resamples the price file once, then hands over to Ready or LoadFailed.
pub(crate) fn load_engine(app: &App, ctx: &Context) -> AppState {
    let next = match SimulationEngine::load(&app.data_path) {
        Ok(engine) => AppState::Ready(Box::new(ReadyState::new(
            engine,
            SIMULATION.monthly_investment,
        ))),
        Err(e) => {
            log::error!("Failed to load {}: {}", app.data_path.display(), e);
            AppState::LoadFailed(LoadFailedState {
                path: app.data_path.clone(),
                message: e.to_string(),
            })
        }
    };
    ctx.request_repaint();
    next
}
