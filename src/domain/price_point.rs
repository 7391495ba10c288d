use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// One parsed row of the price export.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// One resampled observation per calendar month.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPrice {
    /// Last calendar day of the month. This is the date the calculator filters on.
    pub month_end: NaiveDate,
    /// Date of the row the price was taken from (on or before `month_end`)
    pub observed_on: NaiveDate,
    pub price: f64,
}

impl MonthlyPrice {
    pub fn new(month_end: NaiveDate, price: f64) -> Self {
        Self {
            month_end,
            observed_on: month_end,
            price,
        }
    }
}

impl std::fmt::Display for MonthlyPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (observed {}): {:.2}",
            self.month_end, self.observed_on, self.price
        )
    }
}
