mod format_utils;
mod perf;
mod time_utils;

pub use format_utils::{format_currency, format_currency_compact, format_pct};
pub use time_utils::{AppInstant, TimeUtils, format_date, format_month};
