use {
    crate::{
        config::DF,
        domain::PriceSeries,
        models::{MonthlySnapshot, SimulationResult},
    },
    chrono::NaiveDate,
    std::cmp::Ordering,
};

/// Simulates buying `monthly_investment` worth of the asset at every monthly price
/// whose date falls in the closed range [start_date, end_date].
///
/// Never divides by zero: an empty range (including start > end) yields
/// `SimulationResult::empty`, and zero total contributions leave `percent_yield` as `None`.
pub fn calculate(
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_investment: f64,
    prices: &PriceSeries,
) -> SimulationResult {
    let window = prices.range(start_date, end_date);
    let Some(last) = window.last() else {
        return SimulationResult::empty(monthly_investment);
    };

    let mut total_units = 0.0;
    let mut months_in_profit = 0;
    let mut months_in_loss = 0;
    let mut months_unchanged = 0;
    let mut previous_price: Option<f64> = None;
    let mut monthly_values = Vec::with_capacity(window.len());

    for (i, month) in window.iter().enumerate() {
        // Multiplied rather than accumulated so the total is exactly contribution * periods
        let total_invested = monthly_investment * (i + 1) as f64;
        total_units += monthly_investment / month.price;
        let current_value = total_units * month.price;

        monthly_values.push(MonthlySnapshot {
            date: month.month_end,
            price: month.price,
            total_invested,
            total_units,
            current_value,
        });

        if let Some(prev) = previous_price {
            match month.price.partial_cmp(&prev) {
                Some(Ordering::Greater) => months_in_profit += 1,
                Some(Ordering::Less) => months_in_loss += 1,
                _ => months_unchanged += 1,
            }
        }
        previous_price = Some(month.price);

        if DF.log_calculator_steps {
            log::info!(
                "{}: price {:.2}, invested {:.2}, units {:.8}, value {:.2}",
                month.month_end,
                month.price,
                total_invested,
                total_units,
                current_value
            );
        }
    }

    let total_invested = monthly_investment * window.len() as f64;
    let current_value = total_units * last.price;
    let profit_or_loss = current_value - total_invested;
    let percent_yield = (total_invested > 0.0).then(|| profit_or_loss / total_invested * 100.0);

    SimulationResult {
        monthly_investment,
        total_invested,
        total_units,
        current_value,
        profit_or_loss,
        percent_yield,
        months_in_profit,
        months_in_loss,
        months_unchanged,
        monthly_values,
    }
}
