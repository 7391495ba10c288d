use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::app::{App, ReadyState, state::AppState, phases::phase_view::PhaseView};
use crate::config::PLOT_CONFIG;
use crate::engine::SimulationError;
use crate::models::ChartKind;
use crate::ui::{
    InputFormPanel, Panel, ResultsPanel, UI_CONFIG, UI_TEXT, UiStyleExt,
};

impl PhaseView for Box<ReadyState> {
    fn tick(mut self, app: &mut App, ctx: &Context) -> AppState {
        render_toolbar(app, ctx);

        SidePanel::left("input_form")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                let mut panel = InputFormPanel::new(
                    self.request.start_date,
                    self.request.end_date,
                    self.request.monthly_investment,
                    self.engine.form_bounds(),
                    self.engine.prices().len(),
                );
                for event in panel.render(ui) {
                    self.apply(event);
                }
            });

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.heading(UI_TEXT.app_title.as_str());
                        ui.label(UI_TEXT.app_intro.as_str());
                        ui.add_space(12.0);

                        match &self.outcome {
                            None => ui.label_subdued(UI_TEXT.cp_press_calculate.as_str()),
                            Some(Ok(report)) => {
                                ResultsPanel::new(report).render(ui);
                                app.plot_view.show_charts(ui, &report.charts, &app.plot_visibility);
                            }
                            Some(Err(SimulationError::NoData { .. })) => {
                                ui.label(
                                    RichText::new(UI_TEXT.cp_no_data.as_str())
                                        .color(PLOT_CONFIG.color_warning),
                                );
                            }
                            Some(Err(e @ SimulationError::Invalid(_))) => {
                                ui.label(
                                    RichText::new(UI_TEXT.cp_invalid_input.as_str())
                                        .strong()
                                        .color(PLOT_CONFIG.color_loss),
                                );
                                ui.label(e.to_string());
                            }
                        }
                    });
            });

        AppState::Ready(self)
    }
}

fn render_toolbar(app: &mut App, ctx: &Context) {
    TopBottomPanel::top("toolbar")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label_subheader(UI_TEXT.tb_charts.as_str());
                for kind in ChartKind::iter() {
                    if ui
                        .selectable_label(app.plot_visibility.is_visible(kind), kind.to_string())
                        .clicked()
                    {
                        app.plot_visibility.toggle(kind);
                    }
                }
            });
        });
}
