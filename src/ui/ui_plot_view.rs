use chrono::{Datelike, NaiveDate};
use eframe::egui::{Ui, Vec2b};
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Legend, Plot, PlotPoint, VPlacement};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;

use crate::models::{ChartData, ChartKind};

use crate::ui::plot_layers::{
    InvestedLineLayer, LayerContext, PlotLayer, ProfitLossBarLayer, ValueLineLayer, ZeroLineLayer,
};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;

use crate::utils::{TimeUtils, format_currency, format_currency_compact, format_month};

/// Candidate month spacings for the date axis.
const NICE_MONTH_STEPS: &[i32] = &[1, 2, 3, 6, 12, 24, 36, 60, 120];

/// Which charts are drawn. Toggled from the top toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotVisibility {
    pub invested_vs_value: bool,
    pub monthly_profit_loss: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            invested_vs_value: true,
            monthly_profit_loss: true,
        }
    }
}

impl PlotVisibility {
    pub fn is_visible(&self, kind: ChartKind) -> bool {
        match kind {
            ChartKind::InvestedVsValue => self.invested_vs_value,
            ChartKind::MonthlyProfitLoss => self.monthly_profit_loss,
        }
    }

    pub fn toggle(&mut self, kind: ChartKind) {
        match kind {
            ChartKind::InvestedVsValue => self.invested_vs_value = !self.invested_vs_value,
            ChartKind::MonthlyProfitLoss => {
                self.monthly_profit_loss = !self.monthly_profit_loss
            }
        }
    }
}

#[derive(Default)]
pub struct PlotView;

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn month_start(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

// Grid marks on month starts, spaced by the smallest "nice" step giving <= target marks
fn month_grid_marks(input: GridInput, target_count: u32) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let (Some(lo), Some(hi)) = (TimeUtils::plot_x_to_date(min), TimeUtils::plot_x_to_date(max))
    else {
        return Vec::new();
    };

    let span = (month_index(hi) - month_index(lo)).max(1);
    let step = NICE_MONTH_STEPS
        .iter()
        .copied()
        .find(|s| span / s <= target_count as i32)
        .unwrap_or(240);
    let step_size = step as f64 * TimeUtils::DAYS_IN_MONTH;

    let first = month_index(lo).div_euclid(step) * step + step;
    (first..=month_index(hi))
        .step_by(step as usize)
        .filter_map(month_start)
        .map(|date| GridMark {
            value: TimeUtils::date_to_plot_x(date),
            step_size,
        })
        .collect()
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| {
            TimeUtils::plot_x_to_date(mark.value)
                .map(format_month)
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_currency_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|mark, _range| format_currency_compact(mark.value))
        .placement(HPlacement::Left)
}

fn hover_label(name: &str, point: &PlotPoint) -> String {
    let date = TimeUtils::plot_x_to_date(point.x)
        .map(format_month)
        .unwrap_or_default();
    if name.is_empty() {
        format!("{}\n{}", date, format_currency(point.y))
    } else {
        format!("{}\n{}\n{}", name, date, format_currency(point.y))
    }
}

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    /// Draws every visible chart for one calculation. Shows a notice instead of empty axes.
    pub fn show_charts(&self, ui: &mut Ui, charts: &ChartData, visibility: &PlotVisibility) {
        if charts.is_empty() {
            ui.label_subdued(UI_TEXT.cp_no_data.as_str());
            return;
        }

        let ctx = LayerContext {
            charts,
            bar_width: TimeUtils::DAYS_IN_MONTH * PLOT_CONFIG.bar_width_pct,
        };

        for kind in ChartKind::iter().filter(|k| visibility.is_visible(*k)) {
            ui.add_space(8.0);
            ui.label_subheader(kind.to_string());
            self.show_chart(ui, kind, &ctx);
        }
    }

    fn show_chart(&self, ui: &mut Ui, kind: ChartKind, ctx: &LayerContext) {
        let (plot_id, y_label) = match kind {
            ChartKind::InvestedVsValue => ("invested_vs_value", &UI_TEXT.plot_y_axis_value),
            ChartKind::MonthlyProfitLoss => ("monthly_profit_loss", &UI_TEXT.plot_y_axis_profit_loss),
        };

        let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(3);
        match kind {
            ChartKind::InvestedVsValue => {
                layers.push(Box::new(InvestedLineLayer));
                layers.push(Box::new(ValueLineLayer));
            }
            ChartKind::MonthlyProfitLoss => {
                layers.push(Box::new(ZeroLineLayer));
                layers.push(Box::new(ProfitLossBarLayer));
            }
        }

        let divisions = PLOT_CONFIG.plot_axis_divisions;
        let y_range = ctx.charts.y_range(kind);

        Plot::new(plot_id)
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_currency_axis(y_label)])
            .x_grid_spacer(move |input| month_grid_marks(input, divisions))
            .label_formatter(hover_label)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: true, y: false })
            .allow_zoom(Vec2b { x: true, y: false })
            .show(ui, |plot_ui| {
                if let Some((lo, hi)) = y_range {
                    // Pad, and always keep zero in view so bar heights read correctly
                    let pad = ((hi - lo).abs() * PLOT_CONFIG.plot_y_padding_pct).max(1.0);
                    plot_ui.set_plot_bounds_y((lo.min(0.0) - pad)..=(hi.max(0.0) + pad));
                }
                for layer in &layers {
                    layer.render(plot_ui, ctx);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_start_wraps_years() {
        let dec = NaiveDate::from_ymd_opt(2020, 12, 15).unwrap();
        let idx = month_index(dec);
        assert_eq!(month_start(idx), NaiveDate::from_ymd_opt(2020, 12, 1));
        assert_eq!(month_start(idx + 1), NaiveDate::from_ymd_opt(2021, 1, 1));
    }

    #[test]
    fn visibility_toggles_each_chart_independently() {
        let mut vis = PlotVisibility::default();
        vis.toggle(ChartKind::MonthlyProfitLoss);
        assert!(vis.is_visible(ChartKind::InvestedVsValue));
        assert!(!vis.is_visible(ChartKind::MonthlyProfitLoss));
    }
}
