use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use dca_simulator::config::DATA_SOURCE;
use dca_simulator::utils::{format_currency, format_date};
use dca_simulator::{MonthlySnapshot, SIMULATION, SimulationEngine, SimulationError, SimulationRequest};

/// Headless DCA report over the same price CSV the GUI uses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ReportArgs {
    /// Price CSV (defaults to the export in the working directory)
    #[arg(long)]
    data: Option<PathBuf>,

    /// First day of the range, YYYY-MM-DD (defaults to the first row)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the range, YYYY-MM-DD (defaults to the last month)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Amount bought every month, in USD
    #[arg(long, default_value_t = SIMULATION.monthly_investment)]
    monthly: f64,

    /// Print the full report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    date: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Profit/Loss")]
    profit_or_loss: String,
}

impl From<&MonthlySnapshot> for MonthRow {
    fn from(s: &MonthlySnapshot) -> Self {
        Self {
            date: format_date(s.date),
            price: format_currency(s.price),
            invested: format_currency(s.total_invested),
            units: format!("{:.8}", s.total_units),
            value: format_currency(s.current_value),
            profit_or_loss: format_currency(s.profit_or_loss()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ReportArgs::parse();
    let path = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(DATA_SOURCE.csv.csv_path));

    let engine = SimulationEngine::load(&path)
        .with_context(|| format!("Failed to load price data from {}", path.display()))?;

    let (first, last) = engine.form_bounds();
    let request = SimulationRequest::new(
        args.start.unwrap_or(first),
        args.end.unwrap_or(last),
        args.monthly,
    );

    let report = match engine.run(&request) {
        Ok(report) => report,
        Err(SimulationError::NoData { start, end }) => {
            bail!(
                "No monthly prices between {} and {} (data covers {} to {})",
                start,
                end,
                first,
                last
            )
        }
        Err(e) => return Err(e).context("Invalid simulation request"),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} DCA from {} to {}, {} per month",
        DATA_SOURCE.asset_symbol,
        format_date(request.start_date),
        format_date(request.end_date),
        format_currency(request.monthly_investment)
    );
    println!();

    let rows: Vec<MonthRow> = report.result.monthly_values.iter().map(MonthRow::from).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!();

    for line in report.summary.lines() {
        println!("{}", line);
    }

    Ok(())
}
