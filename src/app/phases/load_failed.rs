use eframe::egui::{CentralPanel, Context, RichText};

use crate::app::{App, state::{AppState, LoadFailedState}, phases::phase_view::PhaseView};
use crate::config::PLOT_CONFIG;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

impl PhaseView for LoadFailedState {
    fn tick(self, _app: &mut App, ctx: &Context) -> AppState {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.error_load_failed.as_str()).color(PLOT_CONFIG.color_loss),
                );
                ui.add_space(8.0);
                ui.label(format!("{}", self.path.display()));
                ui.label(RichText::new(self.message.as_str()).color(PLOT_CONFIG.color_warning));
                ui.add_space(8.0);
                ui.label_subdued(UI_TEXT.error_load_failed_body.as_str());
            });

        AppState::LoadFailed(self)
    }
}
