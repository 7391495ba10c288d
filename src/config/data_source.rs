//! Price data source configuration

/// Configuration for the CSV price export
pub struct CsvSourceConfig {
    /// Default path of the price export, relative to the working directory
    pub csv_path: &'static str,
    /// Header of the date column (matched case-insensitively)
    pub date_column: &'static str,
    /// Header of the close price column (matched case-insensitively)
    pub price_column: &'static str,
    /// Date layouts tried in order when parsing the date column
    pub date_formats: &'static [&'static str],
    /// Timestamp layouts tried after `date_formats`; the time part is dropped
    pub datetime_formats: &'static [&'static str],
}

/// The Master Data Source Configuration
pub struct DataSourceConfig {
    pub csv: CsvSourceConfig,
    /// Display name of the simulated asset
    pub asset_symbol: &'static str,
}

pub const DATA_SOURCE: DataSourceConfig = DataSourceConfig {
    csv: CsvSourceConfig {
        csv_path: "Bitcoin Historical Data.csv",
        date_column: "Date",
        price_column: "Price",
        date_formats: &[
            "%Y-%m-%d",
            "%m/%d/%Y", // investing.com export
            "%d.%m.%Y",
            "%Y/%m/%d",
            "%b %d, %Y",
        ],
        datetime_formats: &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"],
    },
    asset_symbol: "BTC",
};
