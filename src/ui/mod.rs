mod plot_layers;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;

pub(crate) use styles::{UiStyleExt, setup_custom_visuals};

pub(crate) use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;
pub(crate) use ui_panels::{FormEvent, InputFormPanel, Panel, ResultsPanel};
pub(crate) use ui_plot_view::{PlotView, PlotVisibility};
