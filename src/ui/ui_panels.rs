use chrono::{Datelike, NaiveDate};
use eframe::egui::{DragValue, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::config::plot::PLOT_CONFIG;

use crate::engine::SimulationReport;

use crate::ui::styles::{UiStyleExt, get_outcome_color, section_heading, spaced_separator};
use crate::ui::ui_text::UI_TEXT;

use crate::utils::{format_date, format_pct};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEvent {
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    MonthlyInvestment(f64),
    Calculate,
}

/// Side panel with the three simulation inputs and the Calculate button.
pub struct InputFormPanel {
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_investment: f64,
    /// First and last date in the loaded price data
    bounds: (NaiveDate, NaiveDate),
    months_loaded: usize,
}

impl InputFormPanel {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_investment: f64,
        bounds: (NaiveDate, NaiveDate),
        months_loaded: usize,
    ) -> Self {
        Self {
            start_date,
            end_date,
            monthly_investment,
            bounds,
            months_loaded,
        }
    }

    // Date pickers allow any day, so pull the pick back inside the data range
    fn clamp_to_bounds(&self, date: NaiveDate) -> NaiveDate {
        let (lo, hi) = self.bounds;
        date.clamp(lo, hi)
    }

    fn render_date_picker(
        &mut self,
        ui: &mut Ui,
        label: &str,
        id: &str,
        is_start: bool,
    ) -> Option<NaiveDate> {
        let (lo, hi) = self.bounds;
        let mut picked = if is_start { self.start_date } else { self.end_date };

        ui.label(label);
        let response = ui.add(
            DatePickerButton::new(&mut picked)
                .id_salt(id)
                .calendar_week(false)
                .start_end_years(lo.year()..=hi.year()),
        );

        if !response.changed() {
            return None;
        }

        let picked = self.clamp_to_bounds(picked);
        if is_start {
            self.start_date = picked;
        } else {
            self.end_date = picked;
        }
        Some(picked)
    }
}

impl Panel for InputFormPanel {
    type Event = FormEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, &UI_TEXT.form_heading);

        if let Some(date) =
            self.render_date_picker(ui, &UI_TEXT.label_start_date, "start_date_picker", true)
        {
            events.push(FormEvent::StartDate(date));
        }
        ui.add_space(6.0);

        if let Some(date) =
            self.render_date_picker(ui, &UI_TEXT.label_end_date, "end_date_picker", false)
        {
            events.push(FormEvent::EndDate(date));
        }
        ui.add_space(6.0);

        ui.label(UI_TEXT.label_monthly_investment.as_str());
        let response = ui.add(
            DragValue::new(&mut self.monthly_investment)
                .range(0.0..=f64::MAX)
                .speed(10.0)
                .prefix("$")
                .max_decimals(2),
        );
        if response.changed() {
            events.push(FormEvent::MonthlyInvestment(self.monthly_investment));
        }

        spaced_separator(ui);

        let calculate_text = ui.button_text_primary(UI_TEXT.btn_calculate.as_str());
        if ui.button(calculate_text).clicked() {
            events.push(FormEvent::Calculate);
        }

        spaced_separator(ui);

        let (lo, hi) = self.bounds;
        ui.label_subdued(format!(
            "{}: {} to {}",
            UI_TEXT.label_data_range,
            format_date(lo),
            format_date(hi)
        ));
        ui.label_subdued(format!(
            "{}: {}",
            UI_TEXT.label_months_loaded, self.months_loaded
        ));

        #[cfg(debug_assertions)]
        if DF.log_form && !events.is_empty() {
            log::info!("Form events: {:?}", events);
        }

        events
    }
}

/// Summary metrics for one finished calculation.
pub struct ResultsPanel<'a> {
    report: &'a SimulationReport,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(report: &'a SimulationReport) -> Self {
        Self { report }
    }

    pub fn render(&self, ui: &mut Ui) {
        let result = &self.report.result;
        let summary = &self.report.summary;

        ui.label_subheader(UI_TEXT.res_heading.as_str());

        let neutral = PLOT_CONFIG.color_text_neutral;
        let yield_color = result
            .percent_yield
            .map_or(neutral, get_outcome_color);

        ui.metric(&UI_TEXT.res_total_invested, &summary.total_invested, neutral);
        ui.metric(&UI_TEXT.res_current_value, &summary.current_value, neutral);
        ui.metric(
            &UI_TEXT.res_profit_loss,
            &summary.profit_or_loss,
            get_outcome_color(result.profit_or_loss),
        );
        ui.metric(&UI_TEXT.res_percent_yield, &summary.percent_yield, yield_color);
        ui.metric(
            &UI_TEXT.res_months_profit,
            &summary.months_in_profit,
            PLOT_CONFIG.color_profit,
        );
        ui.metric(
            &UI_TEXT.res_months_loss,
            &summary.months_in_loss,
            PLOT_CONFIG.color_loss,
        );

        if !self.report.is_yield_defined() {
            ui.label(
                RichText::new(UI_TEXT.cp_yield_undefined.as_str())
                    .small()
                    .color(PLOT_CONFIG.color_warning),
            );
        }

        if let (Some(first), Some(last)) = (result.first_date(), result.last_date()) {
            ui.label_subdued(format!(
                "{} months, {} to {} ({} over the period)",
                result.period_count(),
                format_date(first),
                format_date(last),
                result
                    .percent_yield
                    .map_or_else(|| UI_TEXT.label_not_available.clone(), format_pct),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn picked_dates_are_clamped_to_loaded_data() {
        let panel = InputFormPanel::new(
            d(2020, 1, 31),
            d(2020, 12, 31),
            100.0,
            (d(2020, 1, 1), d(2020, 12, 31)),
            12,
        );
        assert_eq!(panel.clamp_to_bounds(d(2019, 6, 1)), d(2020, 1, 1));
        assert_eq!(panel.clamp_to_bounds(d(2021, 6, 1)), d(2020, 12, 31));
        assert_eq!(panel.clamp_to_bounds(d(2020, 6, 15)), d(2020, 6, 15));
    }
}
