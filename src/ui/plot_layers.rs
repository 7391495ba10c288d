use eframe::egui::{Color32, Stroke};

use egui_plot::{Bar, BarChart, HLine, Line, LineStyle, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;

use crate::models::{ChartData, ChartPoint};

use crate::ui::styles::SignColor;
use crate::ui::ui_text::UI_TEXT;

use crate::utils::TimeUtils;

/// Everything a layer needs to draw itself for one calculation.
pub struct LayerContext<'a> {
    pub charts: &'a ChartData,
    /// Bar width in plot x units (days)
    pub bar_width: f64,
}

pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

fn to_plot_points(points: &[ChartPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [TimeUtils::date_to_plot_x(p.date), p.value])
        .collect()
}

fn draw_series(plot_ui: &mut PlotUi, name: &str, points: &[ChartPoint], color: Color32) {
    let coords = to_plot_points(points);

    plot_ui.line(
        Line::new(name, PlotPoints::new(coords.clone()))
            .color(color)
            .width(PLOT_CONFIG.line_width),
    );

    if PLOT_CONFIG.point_radius > 0.0 {
        plot_ui.points(
            Points::new(name, PlotPoints::new(coords))
                .color(color)
                .radius(PLOT_CONFIG.point_radius),
        );
    }
}

/// Chart (a): cumulative contributions.
pub struct InvestedLineLayer;

impl PlotLayer for InvestedLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_series(
            plot_ui,
            &UI_TEXT.legend_invested,
            &ctx.charts.invested,
            PLOT_CONFIG.invested_line_color,
        );
    }
}

/// Chart (a): market value of the units held.
pub struct ValueLineLayer;

impl PlotLayer for ValueLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_series(
            plot_ui,
            &UI_TEXT.legend_value,
            &ctx.charts.value,
            PLOT_CONFIG.value_line_color,
        );
    }
}

/// Chart (b): one bar per month, green when >= 0 and red below.
pub struct ProfitLossBarLayer;

impl PlotLayer for ProfitLossBarLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let bars: Vec<Bar> = ctx
            .charts
            .profit_loss
            .iter()
            .map(|b| {
                let color = b.sign.color();
                Bar::new(TimeUtils::date_to_plot_x(b.date), b.profit_or_loss)
                    .width(ctx.bar_width)
                    .fill(color)
                    .stroke(Stroke::new(1.0, color))
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(UI_TEXT.legend_profit_loss.as_str(), bars));
    }
}

/// Break-even reference at y = 0.
pub struct ZeroLineLayer;

impl PlotLayer for ZeroLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new("", 0.0)
                .color(PLOT_CONFIG.color_zero_line)
                .style(LineStyle::Dashed { length: 6.0 })
                .width(1.0),
        );
    }
}
