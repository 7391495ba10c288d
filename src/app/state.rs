// src/app/state.rs

use std::path::PathBuf;

use crate::engine::{SimulationEngine, SimulationError, SimulationReport, SimulationRequest};
use crate::ui::FormEvent;

#[derive(Default)]
pub(crate) enum AppState {
    /// Price file not read yet. Resolved on the first frame.
    #[default]
    Loading,
    Ready(Box<ReadyState>),
    LoadFailed(LoadFailedState),
}

pub(crate) struct ReadyState {
    pub(crate) engine: SimulationEngine,
    /// Current form inputs, always inside the engine's form bounds
    pub(crate) request: SimulationRequest,
    /// Last Calculate press. None until the first press.
    pub(crate) outcome: Option<Result<SimulationReport, SimulationError>>,
}

impl ReadyState {
    pub(crate) fn new(engine: SimulationEngine, monthly_investment: f64) -> Self {
        let request = engine.default_request(monthly_investment);
        Self {
            engine,
            request,
            outcome: None,
        }
    }

    /// Applies one form event. Returns true when a calculation ran.
    pub(crate) fn apply(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::StartDate(date) => self.request.start_date = date,
            FormEvent::EndDate(date) => self.request.end_date = date,
            FormEvent::MonthlyInvestment(amount) => self.request.monthly_investment = amount,
            FormEvent::Calculate => {
                self.outcome = Some(self.engine.run(&self.request));
                return true;
            }
        }
        self.request = self.request.clamped_to(self.engine.form_bounds());
        false
    }
}

pub(crate) struct LoadFailedState {
    pub(crate) path: PathBuf,
    pub(crate) message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricePoint, RawPriceSeries};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ready() -> ReadyState {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2021, 1, 29), 100.0),
            PricePoint::new(d(2021, 2, 26), 120.0),
            PricePoint::new(d(2021, 3, 31), 90.0),
        ]);
        ReadyState::new(SimulationEngine::from_raw(&raw).unwrap(), 10.0)
    }

    #[test]
    fn form_starts_on_full_range_without_outcome() {
        let state = ready();
        assert_eq!(state.request.start_date, d(2021, 1, 29));
        assert_eq!(state.request.end_date, d(2021, 3, 31));
        assert!(state.outcome.is_none());
    }

    #[test]
    fn edits_only_take_effect_on_calculate() {
        let mut state = ready();
        assert!(!state.apply(FormEvent::MonthlyInvestment(20.0)));
        assert!(!state.apply(FormEvent::EndDate(d(2021, 2, 28))));
        assert!(state.outcome.is_none());

        assert!(state.apply(FormEvent::Calculate));
        let report = state.outcome.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(report.result.total_invested, 40.0);
        assert_eq!(report.result.period_count(), 2);
    }

    #[test]
    fn out_of_bounds_dates_are_clamped() {
        let mut state = ready();
        state.apply(FormEvent::StartDate(d(2019, 1, 1)));
        assert_eq!(state.request.start_date, d(2021, 1, 29));
    }

    #[test]
    fn inverted_range_is_reported_not_panicked() {
        let mut state = ready();
        state.apply(FormEvent::StartDate(d(2021, 3, 31)));
        state.apply(FormEvent::EndDate(d(2021, 1, 29)));
        state.apply(FormEvent::Calculate);
        assert!(matches!(
            state.outcome,
            Some(Err(SimulationError::Invalid(_)))
        ));
    }
}
