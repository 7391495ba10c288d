use {
    crate::{
        models::SimulationResult,
        ui::UI_TEXT,
        utils::{format_currency, format_pct},
    },
    serde::{Deserialize, Serialize},
};

/// Formatted text lines shown under "Results".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryLines {
    pub total_invested: String,
    pub current_value: String,
    pub profit_or_loss: String,
    pub percent_yield: String,
    pub months_in_profit: String,
    pub months_in_loss: String,
}

impl SummaryLines {
    pub fn from_result(result: &SimulationResult) -> Self {
        let percent_yield = match result.percent_yield {
            Some(pyr) => format_pct(pyr),
            None => UI_TEXT.label_not_available.clone(),
        };
        Self {
            total_invested: format_currency(result.total_invested),
            current_value: format_currency(result.current_value),
            profit_or_loss: format_currency(result.profit_or_loss),
            percent_yield,
            months_in_profit: result.months_in_profit.to_string(),
            months_in_loss: result.months_in_loss.to_string(),
        }
    }

    /// (label, value) pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            (UI_TEXT.res_total_invested.as_str(), self.total_invested.as_str()),
            (UI_TEXT.res_current_value.as_str(), self.current_value.as_str()),
            (UI_TEXT.res_profit_loss.as_str(), self.profit_or_loss.as_str()),
            (UI_TEXT.res_percent_yield.as_str(), self.percent_yield.as_str()),
            (UI_TEXT.res_months_profit.as_str(), self.months_in_profit.as_str()),
            (UI_TEXT.res_months_loss.as_str(), self.months_in_loss.as_str()),
        ]
    }

    /// Lines as `Label: value`, e.g. `Total Invested: $1,200.00`.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }
}
