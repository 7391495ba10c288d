use std::path::Path;

use chrono::NaiveDate;

use crate::analysis::calculate;
use crate::config::DF;
use crate::data::{LoadError, load_prices};
use crate::domain::{PriceSeries, RawPriceSeries};

use super::error::SimulationError;
use super::messages::{SimulationReport, SimulationRequest};

/// Holds the monthly price series for the session and answers calculation requests.
/// The series is read-only after construction; every `run` is a pure function of
/// (series, request).
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    /// First and last raw observation dates (form bounds)
    date_bounds: (NaiveDate, NaiveDate),
    prices: PriceSeries,
    raw_rows: usize,
}

impl SimulationEngine {
    /// Load the CSV at `path` and resample it.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::from_raw(&load_prices(path)?)
    }

    pub fn from_raw(raw: &RawPriceSeries) -> Result<Self, LoadError> {
        let date_bounds = raw.date_bounds().ok_or(LoadError::Empty)?;
        let prices = crate::trace_time!("Resample monthly", 5_000, { raw.resample_monthly() });
        log::info!(
            "Engine ready: {} raw rows -> {} months ({} to {})",
            raw.len(),
            prices.len(),
            date_bounds.0,
            date_bounds.1
        );
        Ok(Self {
            date_bounds,
            prices,
            raw_rows: raw.len(),
        })
    }

    pub fn date_bounds(&self) -> (NaiveDate, NaiveDate) {
        self.date_bounds
    }

    /// Range offered by the form. Extends to the last month-end label so a file
    /// ending mid-month can still include its final month.
    pub fn form_bounds(&self) -> (NaiveDate, NaiveDate) {
        let (first, last) = self.date_bounds;
        let last_label = self.prices.last_date().map_or(last, |label| label.max(last));
        (first, last_label)
    }

    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    pub fn raw_rows(&self) -> usize {
        self.raw_rows
    }

    /// Full-range request, matching the form's initial state.
    pub fn default_request(&self, monthly_investment: f64) -> SimulationRequest {
        let (start, end) = self.form_bounds();
        SimulationRequest::new(start, end, monthly_investment)
    }

    /// Validate, calculate and build the display data for one request.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
        if DF.log_engine_requests {
            log::info!(
                "Simulation request: {} to {}, {:.2}/month",
                request.start_date,
                request.end_date,
                request.monthly_investment
            );
        }

        request.validate()?;

        let result = crate::trace_time!("DCA calculate", 2_000, {
            calculate(
                request.start_date,
                request.end_date,
                request.monthly_investment,
                &self.prices,
            )
        });

        if result.is_empty() {
            log::warn!(
                "No monthly prices between {} and {}",
                request.start_date,
                request.end_date
            );
            return Err(SimulationError::NoData {
                start: request.start_date,
                end: request.end_date,
            });
        }

        if !result.is_yield_defined() {
            log::warn!("Nothing invested over {} months; yield undefined", result.period_count());
        }

        Ok(SimulationReport::from_result(*request, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use crate::engine::InputError;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn engine() -> SimulationEngine {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2021, 1, 4), 95.0),
            PricePoint::new(d(2021, 1, 29), 100.0),
            PricePoint::new(d(2021, 2, 26), 120.0),
            PricePoint::new(d(2021, 3, 31), 90.0),
        ]);
        SimulationEngine::from_raw(&raw).unwrap()
    }

    #[test]
    fn run_produces_summary_and_charts() {
        let engine = engine();
        assert_eq!(engine.date_bounds(), (d(2021, 1, 4), d(2021, 3, 31)));
        assert_eq!(engine.prices().len(), 3);

        let report = engine.run(&engine.default_request(10.0)).unwrap();
        assert_eq!(report.result.total_invested, 30.0);
        assert_eq!(report.summary.total_invested, "$30.00");
        assert_eq!(report.summary.current_value, "$26.50");
        assert_eq!(report.summary.profit_or_loss, "-$3.50");
        assert_eq!(report.summary.months_in_profit, "1");
        assert_eq!(report.summary.months_in_loss, "1");
        assert_eq!(report.charts.profit_loss.len(), 3);
        assert!(report.is_yield_defined());
    }

    #[test]
    fn run_rejects_invalid_requests_before_calculating() {
        let engine = engine();
        let negative = SimulationRequest::new(d(2021, 1, 1), d(2021, 3, 31), -10.0);
        assert_eq!(
            engine.run(&negative),
            Err(SimulationError::Invalid(InputError::NegativeInvestment(-10.0)))
        );
    }

    #[test]
    fn run_reports_no_data_for_empty_range() {
        let engine = engine();
        // Before the January month-end label
        let req = SimulationRequest::new(d(2021, 1, 4), d(2021, 1, 20), 10.0);
        assert_eq!(
            engine.run(&req),
            Err(SimulationError::NoData {
                start: d(2021, 1, 4),
                end: d(2021, 1, 20),
            })
        );
    }

    #[test]
    fn zero_investment_reports_undefined_yield() {
        let engine = engine();
        let report = engine.run(&engine.default_request(0.0)).unwrap();
        assert!(!report.is_yield_defined());
        assert_eq!(report.summary.percent_yield, "N/A");
    }

    #[test]
    fn form_bounds_reach_the_last_month_label() {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2021, 1, 29), 100.0),
            PricePoint::new(d(2021, 2, 12), 110.0),
        ]);
        let engine = SimulationEngine::from_raw(&raw).unwrap();
        assert_eq!(engine.date_bounds().1, d(2021, 2, 12));
        assert_eq!(engine.form_bounds(), (d(2021, 1, 29), d(2021, 2, 28)));

        let report = engine.run(&engine.default_request(10.0)).unwrap();
        assert_eq!(report.result.period_count(), 2);
    }

    #[test]
    fn from_raw_rejects_empty_series() {
        assert!(matches!(
            SimulationEngine::from_raw(&RawPriceSeries::default()),
            Err(LoadError::Empty)
        ));
    }
}
