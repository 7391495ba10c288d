use {chrono::NaiveDate, thiserror::Error};

/// Form values rejected before the calculator runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("monthly investment must not be negative (got {0})")]
    NegativeInvestment(f64),

    #[error("monthly investment must be a finite number")]
    NonFiniteInvestment,

    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Invalid(#[from] InputError),

    /// The range holds no monthly prices, so there is nothing to invest in
    #[error("no monthly prices between {start} and {end}")]
    NoData { start: NaiveDate, end: NaiveDate },
}
