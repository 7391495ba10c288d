use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Portfolio state after one monthly purchase.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MonthlySnapshot {
    pub date: NaiveDate,
    /// Price paid this month
    pub price: f64,
    /// Cumulative contributions up to and including this month
    pub total_invested: f64,
    /// Cumulative asset quantity owned
    pub total_units: f64,
    /// `total_units * price`
    pub current_value: f64,
}

impl MonthlySnapshot {
    pub fn profit_or_loss(&self) -> f64 {
        self.current_value - self.total_invested
    }
}

/// Outcome of one DCA run. Recomputed for every request, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub monthly_investment: f64,
    pub total_invested: f64,
    pub total_units: f64,
    /// Units owned valued at the last price in range
    pub current_value: f64,
    pub profit_or_loss: f64,
    /// Profit or loss as a percentage of capital invested.
    /// `None` when nothing was invested (empty range or zero contribution).
    pub percent_yield: Option<f64>,
    pub months_in_profit: usize,
    pub months_in_loss: usize,
    pub months_unchanged: usize,
    pub monthly_values: Vec<MonthlySnapshot>,
}

impl SimulationResult {
    pub fn empty(monthly_investment: f64) -> Self {
        Self {
            monthly_investment,
            total_invested: 0.0,
            total_units: 0.0,
            current_value: 0.0,
            profit_or_loss: 0.0,
            percent_yield: None,
            months_in_profit: 0,
            months_in_loss: 0,
            months_unchanged: 0,
            monthly_values: Vec::new(),
        }
    }

    /// No months fell inside the requested range.
    pub fn is_empty(&self) -> bool {
        self.monthly_values.is_empty()
    }

    pub fn period_count(&self) -> usize {
        self.monthly_values.len()
    }

    pub fn is_yield_defined(&self) -> bool {
        self.percent_yield.is_some()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.monthly_values.first().map(|s| s.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.monthly_values.last().map(|s| s.date)
    }
}
