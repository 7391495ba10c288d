use {
    eframe::{Frame, egui::Context},
    std::{mem, path::PathBuf},
};

use crate::{
    Cli,
    app::{AppState, phases::{PhaseView, loading::load_engine}},
    ui::{PlotView, PlotVisibility, setup_custom_visuals},
};

pub struct App {
    pub(crate) data_path: PathBuf,
    pub(crate) plot_view: PlotView,
    pub(crate) plot_visibility: PlotVisibility,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let data_path = args.data_path();
        log::info!("Price data: {}", data_path.display());

        Self {
            data_path,
            plot_view: PlotView::new(),
            plot_visibility: PlotVisibility::default(),
            state: AppState::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading => load_engine(self, ctx),
            AppState::Ready(s) => s.tick(self, ctx),
            AppState::LoadFailed(s) => s.tick(self, ctx),
        };
    }
}
