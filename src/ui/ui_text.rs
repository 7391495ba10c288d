use std::sync::LazyLock;

use crate::config::DATA_SOURCE;

// Glyphs covered by egui's bundled emoji fonts
pub const ICON_CALCULATE: &str = "\u{1f5a9}"; // (Calculator)
pub const ICON_CHART: &str = "\u{1f4c8}";
pub const ICON_WARNING: &str = "\u{26a0}";
pub const ICON_CALENDAR: &str = "\u{1f4c5}";

pub struct UiText {
    pub app_title: String,
    pub app_intro: String,

    // --- Side panel form ---
    pub form_heading: String,
    pub label_start_date: String,
    pub label_end_date: String,
    pub label_monthly_investment: String,
    pub label_data_range: String,
    pub label_months_loaded: String,
    pub btn_calculate: String,

    // --- Results ---
    pub res_heading: String,
    pub res_total_invested: String,
    pub res_current_value: String,
    pub res_profit_loss: String,
    pub res_percent_yield: String,
    pub res_months_profit: String,
    pub res_months_loss: String,
    pub label_not_available: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_y_axis_value: String,
    pub plot_y_axis_profit_loss: String,
    pub legend_invested: String,
    pub legend_value: String,
    pub legend_profit_loss: String,

    // --- Toolbar ---
    pub tb_charts: String,

    // --- Center panel messages ---
    pub cp_press_calculate: String,
    pub cp_no_data: String,
    pub cp_yield_undefined: String,
    pub cp_invalid_input: String,

    // --- ERRORS ---
    pub error_load_failed: String,
    pub error_load_failed_body: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| {
    let asset = DATA_SOURCE.asset_symbol;
    UiText {
        app_title: format!("{} DCA Simulator", asset),
        app_intro: format!(
            "Simulate Dollar-Cost Averaging (DCA) strategy for {} investment using local CSV data.",
            asset
        ),

        form_heading: "Simulation".to_string(),
        label_start_date: "Start Date".to_string(),
        label_end_date: "End Date".to_string(),
        label_monthly_investment: "Monthly Investment (USD)".to_string(),
        label_data_range: "Data range".to_string(),
        label_months_loaded: "Months loaded".to_string(),
        btn_calculate: format!("{} Calculate", ICON_CALCULATE),

        res_heading: "Results".to_string(),
        res_total_invested: "Total Invested".to_string(),
        res_current_value: "Current Value".to_string(),
        res_profit_loss: "Profit/Loss".to_string(),
        res_percent_yield: "PYR (Percent Yield Rate)".to_string(),
        res_months_profit: "Months in Profit".to_string(),
        res_months_loss: "Months in Loss".to_string(),
        label_not_available: "N/A".to_string(),

        plot_x_axis: "Date".to_string(),
        plot_y_axis_value: "Value (USD)".to_string(),
        plot_y_axis_profit_loss: "Profit/Loss (USD)".to_string(),
        legend_invested: "Total Invested".to_string(),
        legend_value: "Current Value".to_string(),
        legend_profit_loss: "Profit/Loss".to_string(),

        tb_charts: format!("{} Charts", ICON_CHART),

        cp_press_calculate: format!(
            "{} Choose a date range and monthly amount, then press Calculate.",
            ICON_CALENDAR
        ),
        cp_no_data: format!("{} No monthly prices in the selected range.", ICON_WARNING),
        cp_yield_undefined: "Nothing was invested, so the yield is undefined.".to_string(),
        cp_invalid_input: format!("{} Invalid input", ICON_WARNING),

        error_load_failed: format!("{} Failed to load price data", ICON_WARNING),
        error_load_failed_body: "Check that the CSV exists and has Date and Price columns, then restart."
            .to_string(),
    }
});
