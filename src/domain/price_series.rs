use {
    crate::{
        config::DF,
        domain::{MonthlyPrice, PricePoint},
        utils::TimeUtils,
    },
    chrono::{Datelike, NaiveDate},
    itertools::Itertools,
    serde::{Deserialize, Serialize},
};

/// Parsed rows of the price export, sorted ascending by date with unique dates.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawPriceSeries {
    points: Vec<PricePoint>,
}

impl RawPriceSeries {
    /// Builds a series from rows in file order.
    /// Rows are sorted by date; when two rows share a date, the later row wins.
    pub fn from_unsorted(mut rows: Vec<PricePoint>) -> Self {
        // Stable sort keeps file order among equal dates
        rows.sort_by_key(|p| p.date);

        let mut points: Vec<PricePoint> = Vec::with_capacity(rows.len());
        for row in rows {
            match points.last_mut() {
                Some(last) if last.date == row.date => {
                    if DF.log_loader_rows {
                        log::info!(
                            "Duplicate date {}: replacing {:.2} with {:.2}",
                            row.date,
                            last.price,
                            row.price
                        );
                    }
                    *last = row;
                }
                _ => points.push(row),
            }
        }
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Earliest and latest observation dates, if any rows exist.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first_date()?, self.last_date()?))
    }

    /// Reduces the series to the last observation of each calendar month.
    /// Months without observations are absent (no forward-fill).
    pub fn resample_monthly(&self) -> PriceSeries {
        let months = self.points.iter().chunk_by(|p| (p.date.year(), p.date.month()));

        let mut points: Vec<MonthlyPrice> = Vec::new();
        for (_, rows) in &months {
            if let Some(last) = rows.last() {
                points.push(MonthlyPrice {
                    month_end: TimeUtils::month_end(last.date),
                    observed_on: last.date,
                    price: last.price,
                });
            }
        }

        if DF.log_resample {
            for p in &points {
                log::info!("Resampled month: {}", p);
            }
        }

        PriceSeries { points }
    }
}

/// One price per calendar month, strictly ascending by `month_end`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<MonthlyPrice>,
}

impl PriceSeries {
    /// Builds a series from already-resampled points (sorted here for safety of `range`).
    pub fn from_points(mut points: Vec<MonthlyPrice>) -> Self {
        points.sort_by_key(|p| p.month_end);
        points.dedup_by_key(|p| p.month_end);
        Self { points }
    }

    pub fn points(&self) -> &[MonthlyPrice] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.month_end)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.month_end)
    }

    /// Months whose `month_end` falls inside the closed range [start, end].
    /// An inverted range yields an empty slice.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> &[MonthlyPrice] {
        if start > end {
            return &[];
        }
        let lo = self.points.partition_point(|p| p.month_end < start);
        let hi = self.points.partition_point(|p| p.month_end <= end);
        &self.points[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn from_unsorted_sorts_and_later_duplicate_wins() {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2021, 3, 2), 30.0),
            PricePoint::new(d(2021, 1, 5), 10.0),
            PricePoint::new(d(2021, 3, 2), 31.0),
        ]);
        let dates: Vec<_> = raw.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2021, 1, 5), d(2021, 3, 2)]);
        assert_eq!(raw.points()[1].price, 31.0);
        assert_eq!(raw.date_bounds(), Some((d(2021, 1, 5), d(2021, 3, 2))));
    }

    #[test]
    fn resample_keeps_last_observation_of_each_month() {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2020, 1, 1), 100.0),
            PricePoint::new(d(2020, 1, 15), 105.0),
            PricePoint::new(d(2020, 1, 30), 110.0),
            PricePoint::new(d(2020, 2, 3), 120.0),
        ]);
        let monthly = raw.resample_monthly();
        assert_eq!(monthly.len(), 2);

        let jan = monthly.points()[0];
        assert_eq!(jan.month_end, d(2020, 1, 31));
        assert_eq!(jan.observed_on, d(2020, 1, 30));
        assert_eq!(jan.price, 110.0);

        // Leap year February
        assert_eq!(monthly.points()[1].month_end, d(2020, 2, 29));
        assert_eq!(monthly.points()[1].price, 120.0);
    }

    #[test]
    fn resample_does_not_forward_fill_missing_months() {
        let raw = RawPriceSeries::from_unsorted(vec![
            PricePoint::new(d(2022, 11, 10), 1.0),
            PricePoint::new(d(2023, 2, 10), 2.0),
        ]);
        let months: Vec<_> = raw
            .resample_monthly()
            .points()
            .iter()
            .map(|p| p.month_end)
            .collect();
        assert_eq!(months, vec![d(2022, 11, 30), d(2023, 2, 28)]);
    }

    #[test]
    fn range_is_inclusive_on_month_end_dates() {
        let series = PriceSeries::from_points(vec![
            MonthlyPrice::new(d(2020, 1, 31), 1.0),
            MonthlyPrice::new(d(2020, 2, 29), 2.0),
            MonthlyPrice::new(d(2020, 3, 31), 3.0),
        ]);

        assert_eq!(series.range(d(2020, 1, 31), d(2020, 3, 31)).len(), 3);
        // A mid-month start still includes that month's end-of-month label
        assert_eq!(series.range(d(2020, 1, 15), d(2020, 2, 29)).len(), 2);
        // An end before the month end excludes that month
        assert_eq!(series.range(d(2020, 1, 1), d(2020, 3, 30)).len(), 2);
        assert!(series.range(d(2020, 3, 1), d(2020, 1, 1)).is_empty());
        assert!(series.range(d(2021, 1, 1), d(2021, 12, 31)).is_empty());
    }
}
