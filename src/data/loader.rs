use {
    crate::{
        config::{CsvSourceConfig, DATA_SOURCE, DF},
        data::LoadError,
        domain::{PriceSeries, PricePoint, RawPriceSeries},
    },
    chrono::{NaiveDate, NaiveDateTime},
    csv::StringRecord,
    std::{collections::HashMap, fs::File, io::Read, path::Path},
};

/// Loads the price export at `path` into a sorted raw series.
pub fn load_prices(path: &Path) -> Result<RawPriceSeries, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = crate::trace_time!("Load price CSV", 50_000, { read_prices(file) })?;
    log::info!(
        "Loaded {} price rows from {} ({:?})",
        raw.len(),
        path.display(),
        raw.date_bounds()
    );
    Ok(raw)
}

/// Loads the price export at `path` and resamples it to one price per month.
pub fn load_price_series(path: &Path) -> Result<PriceSeries, LoadError> {
    Ok(load_prices(path)?.resample_monthly())
}

/// Parses CSV content with `Date` and `Price` columns (any order, extra columns ignored).
pub fn read_prices<R: Read>(reader: R) -> Result<RawPriceSeries, LoadError> {
    let cfg = &DATA_SOURCE.csv;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);
    let date_idx = column_index(&header_map, cfg.date_column)?;
    let price_idx = column_index(&header_map, cfg.price_column)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based
        let line = idx + 2;
        let record = result?;

        if record.iter().all(|field| field.is_empty()) {
            if DF.log_loader_rows {
                log::info!("line {}: skipping blank row", line);
            }
            continue;
        }

        let date_str = record.get(date_idx).unwrap_or_default();
        let date = parse_date(date_str, cfg).ok_or_else(|| LoadError::InvalidDate {
            line,
            value: date_str.to_string(),
        })?;

        let price_str = record.get(price_idx).unwrap_or_default();
        let price = parse_price(price_str).ok_or_else(|| LoadError::InvalidPrice {
            line,
            value: price_str.to_string(),
        })?;

        rows.push(PricePoint::new(date, price));
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(RawPriceSeries::from_unsorted(rows))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

// Exports saved by spreadsheet tools often carry a UTF-8 BOM on the first header
fn normalize_header_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}')
        .trim()
        .trim_matches('"')
        .to_lowercase()
}

fn column_index(
    header_map: &HashMap<String, usize>,
    name: &'static str,
) -> Result<usize, LoadError> {
    header_map
        .get(&normalize_header_name(name))
        .copied()
        .ok_or(LoadError::MissingColumn(name))
}

pub(crate) fn parse_date(s: &str, cfg: &CsvSourceConfig) -> Option<NaiveDate> {
    let s = s.trim().trim_matches('"');
    if s.is_empty() {
        return None;
    }
    cfg.date_formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            cfg.datetime_formats
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Accepts `34567.8`, `34,567.80`, `"$1,234"`. Rejects non-finite and non-positive values.
pub(crate) fn parse_price(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_matches('"')
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = cleaned.parse::<f64>().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_date_accepts_common_layouts() {
        let cfg = &DATA_SOURCE.csv;
        assert_eq!(parse_date("2021-03-04", cfg), Some(d(2021, 3, 4)));
        assert_eq!(parse_date("03/04/2021", cfg), Some(d(2021, 3, 4)));
        assert_eq!(parse_date("04.03.2021", cfg), Some(d(2021, 3, 4)));
        assert_eq!(parse_date("Mar 04, 2021", cfg), Some(d(2021, 3, 4)));
        assert_eq!(parse_date("2021-03-04 23:59:00", cfg), Some(d(2021, 3, 4)));
        assert_eq!(parse_date("not a date", cfg), None);
        assert_eq!(parse_date("", cfg), None);
    }

    #[test]
    fn parse_price_strips_separators_and_rejects_non_positive() {
        assert_eq!(parse_price("34,567.8"), Some(34567.8));
        assert_eq!(parse_price("\"$1,234\""), Some(1234.0));
        assert_eq!(parse_price("0.05"), Some(0.05));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn read_prices_handles_investing_com_export() {
        let csv = "\u{feff}\"Date\",\"Price\",\"Open\",\"High\",\"Low\",\"Vol.\",\"Change %\"\n\
                   \"02/03/2020\",\"9,344.4\",\"9,380.0\",\"9,600.0\",\"9,300.0\",\"800K\",\"-0.4%\"\n\
                   \"01/31/2020\",\"9,350.0\",\"9,500.0\",\"9,550.0\",\"9,250.0\",\"700K\",\"-1.5%\"\n\
                   \"01/02/2020\",\"6,965.0\",\"7,200.0\",\"7,210.0\",\"6,900.0\",\"600K\",\"-3.0%\"\n";
        let raw = read_prices(csv.as_bytes()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.first_date(), Some(d(2020, 1, 2)));
        assert_eq!(raw.last_date(), Some(d(2020, 2, 3)));

        let monthly = raw.resample_monthly();
        let prices: Vec<f64> = monthly.points().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![9350.0, 9344.4]);
    }

    #[test]
    fn read_prices_fails_fast_on_bad_date() {
        let csv = "Date,Price\n2020-01-01,100\nyesterday,101\n2020-01-03,102\n";
        match read_prices(csv.as_bytes()) {
            Err(LoadError::InvalidDate { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn read_prices_reports_missing_columns_and_empty_files() {
        let no_price = "Date,Close\n2020-01-01,100\n";
        assert!(matches!(
            read_prices(no_price.as_bytes()),
            Err(LoadError::MissingColumn("Price"))
        ));

        let header_only = "date , PRICE\n";
        assert!(matches!(
            read_prices(header_only.as_bytes()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn read_prices_rejects_zero_price_with_line() {
        let csv = "Date,Price\n2020-01-01,100\n2020-01-02,0\n";
        assert!(matches!(
            read_prices(csv.as_bytes()),
            Err(LoadError::InvalidPrice { line: 3, .. })
        ));
    }
}
