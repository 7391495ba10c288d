//! Loading price exports from disk into the engine.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use dca_simulator::{
    LoadError, SimulationEngine, SimulationError, SimulationRequest, load_price_series, load_prices,
};
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// Newest-first, quoted, with thousands separators, as investing.com exports it
const INVESTING_EXPORT: &str = "\u{feff}\"Date\",\"Price\",\"Open\",\"High\",\"Low\",\"Vol.\",\"Change %\"
\"03/29/2024\",\"69,893.4\",\"70,744.2\",\"70,913.1\",\"69,076.6\",\"45.23K\",\"-1.20%\"
\"03/15/2024\",\"69,499.8\",\"71,387.9\",\"72,357.1\",\"65,630.7\",\"118.22K\",\"-2.70%\"
\"02/29/2024\",\"61,130.0\",\"62,432.1\",\"63,676.4\",\"60,364.7\",\"98.11K\",\"-2.09%\"
\"02/01/2024\",\"43,082.2\",\"42,569.8\",\"43,243.2\",\"41,884.1\",\"47.70K\",\"1.20%\"
\"01/31/2024\",\"42,569.8\",\"43,300.1\",\"43,717.4\",\"42,309.9\",\"55.63K\",\"-1.69%\"
";

#[test]
fn loads_investing_export_and_resamples_to_month_ends() {
    let file = write_csv(INVESTING_EXPORT);

    let raw = load_prices(file.path()).unwrap();
    assert_eq!(raw.len(), 5);
    assert_eq!(raw.date_bounds(), Some((d(2024, 1, 31), d(2024, 3, 29))));

    let monthly = load_price_series(file.path()).unwrap();
    let labels: Vec<_> = monthly.points().iter().map(|p| p.month_end).collect();
    assert_eq!(labels, vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31)]);

    let closes: Vec<_> = monthly.points().iter().map(|p| p.price).collect();
    assert_eq!(closes, vec![42_569.8, 61_130.0, 69_893.4]);
}

#[test]
fn engine_runs_over_loaded_file() {
    let file = write_csv(INVESTING_EXPORT);
    let engine = SimulationEngine::load(file.path()).unwrap();

    let report = engine.run(&engine.default_request(100.0)).unwrap();
    assert_eq!(report.result.period_count(), 3);
    assert_eq!(report.summary.total_invested, "$300.00");
    assert_eq!(report.result.months_in_profit, 2);
    assert_eq!(report.result.months_in_loss, 0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["result"]["monthly_values"].as_array().map(Vec::len), Some(3));
}

#[test]
fn engine_reports_empty_window() {
    let file = write_csv(INVESTING_EXPORT);
    let engine = SimulationEngine::load(file.path()).unwrap();

    let request = SimulationRequest::new(d(2024, 2, 1), d(2024, 2, 20), 100.0);
    assert!(matches!(
        engine.run(&request),
        Err(SimulationError::NoData { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_prices(Path::new("definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("definitely/not/here.csv"));
}

#[test]
fn bad_date_names_its_line() {
    let file = write_csv("Date,Price\n2024-01-31,100\nnot-a-date,110\n");
    match load_prices(file.path()) {
        Err(LoadError::InvalidDate { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn header_only_file_is_empty() {
    let file = write_csv("Date,Price\n");
    assert!(matches!(
        SimulationEngine::load(file.path()),
        Err(LoadError::Empty)
    ));
}
