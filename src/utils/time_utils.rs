use chrono::{Datelike, Months, NaiveDate};

pub type AppInstant = std::time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const MONTH_FORMAT: &str = "%b %Y";

    /// Last calendar day of the month containing `date`.
    pub fn month_end(date: NaiveDate) -> NaiveDate {
        date.with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next_first| next_first.pred_opt())
            .unwrap_or(date)
    }

    /// Plot x coordinate for a date (days since the Common Era epoch).
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }

    /// Approximate number of plot x units spanned by one calendar month.
    pub const DAYS_IN_MONTH: f64 = 30.44;
}

// Date Helper functions

pub fn format_date(date: NaiveDate) -> String {
    // Used for display purposes
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn format_month(date: NaiveDate) -> String {
    date.format(TimeUtils::MONTH_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_end_handles_leap_years_and_december() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(TimeUtils::month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(TimeUtils::month_end(d(2023, 2, 1)), d(2023, 2, 28));
        assert_eq!(TimeUtils::month_end(d(2023, 12, 31)), d(2023, 12, 31));
        assert_eq!(TimeUtils::month_end(d(2023, 4, 30)), d(2023, 4, 30));
    }

    #[test]
    fn plot_x_round_trips_through_dates() {
        let date = NaiveDate::from_ymd_opt(2019, 7, 31).unwrap();
        let x = TimeUtils::date_to_plot_x(date);
        assert_eq!(TimeUtils::plot_x_to_date(x), Some(date));
        assert_eq!(TimeUtils::plot_x_to_date(f64::NAN), None);
    }
}
