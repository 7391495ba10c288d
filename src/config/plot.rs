//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Cumulative contributions line (chart a)
    pub invested_line_color: Color32,
    /// Cumulative market value line (chart a)
    pub value_line_color: Color32,
    /// Width of both cumulative lines
    pub line_width: f32,
    /// Marker radius drawn on each monthly observation. 0.0 disables markers.
    pub point_radius: f32,

    // --- PROFIT / LOSS BARS (chart b) ---
    pub bar_profit_color: Color32,
    pub bar_loss_color: Color32,
    /// Bar width as a fraction of one month (0.0 to 1.0)
    pub bar_width_pct: f64,

    /// Height of each chart in points
    pub chart_height: f32,
    /// Plot x axis divisions (split axis into n equal parts)
    pub plot_axis_divisions: u32,
    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values
    pub color_text_subdued: Color32,

    pub color_zero_line: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    invested_line_color: Color32::from_rgb(31, 119, 180), // Steel blue
    value_line_color: Color32::from_rgb(255, 127, 14),    // Orange
    line_width: 2.0,
    point_radius: 2.0,

    // Green at or above break-even, crimson below
    bar_profit_color: Color32::from_rgb(0, 128, 0),
    bar_loss_color: Color32::from_rgb(220, 20, 60),
    bar_width_pct: 0.8, // 80% width leaves a small gap between months

    chart_height: 260.0,
    plot_axis_divisions: 8,
    plot_y_padding_pct: 0.05,

    // SEMANTICS
    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_zero_line: Color32::from_gray(90),
};
