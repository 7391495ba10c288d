use eframe::egui::Context;

use crate::app::state::AppState;
use crate::app::App;

/// One frame of a top-level app phase. Consumes the phase and returns the next one.
pub(crate) trait PhaseView {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState;
}
