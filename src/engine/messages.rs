use {
    crate::{
        engine::InputError,
        models::{ChartData, SimulationResult, SummaryLines},
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// The three form inputs of one calculation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_investment: f64,
}

impl SimulationRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, monthly_investment: f64) -> Self {
        Self {
            start_date,
            end_date,
            monthly_investment,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !self.monthly_investment.is_finite() {
            return Err(InputError::NonFiniteInvestment);
        }
        if self.monthly_investment < 0.0 {
            return Err(InputError::NegativeInvestment(self.monthly_investment));
        }
        if self.start_date > self.end_date {
            return Err(InputError::InvertedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Pulls both dates inside `bounds`. Does not reorder an inverted range.
    pub fn clamped_to(&self, bounds: (NaiveDate, NaiveDate)) -> Self {
        let (lo, hi) = bounds;
        Self {
            start_date: self.start_date.clamp(lo, hi),
            end_date: self.end_date.clamp(lo, hi),
            monthly_investment: self.monthly_investment,
        }
    }
}

/// Everything displayed for one calculation. Dropped when the next request runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub request: SimulationRequest,
    pub result: SimulationResult,
    pub summary: SummaryLines,
    pub charts: ChartData,
}

impl SimulationReport {
    pub fn from_result(request: SimulationRequest, result: SimulationResult) -> Self {
        Self {
            summary: SummaryLines::from_result(&result),
            charts: ChartData::from_result(&result),
            request,
            result,
        }
    }

    pub fn is_yield_defined(&self) -> bool {
        self.result.is_yield_defined()
    }
}
