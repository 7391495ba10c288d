/// Formats a money amount with thousands separators and two decimals.
/// Negative values keep the sign ahead of the currency symbol: `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.abs(), 2))
}

/// Formats a percentage with thousands separators and two decimals: `1,250.00%`.
pub fn format_pct(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}%", sign, group_thousands(value.abs(), 2))
}

/// Compact currency for axis labels ($950, $12.5K, $3.2M).
pub fn format_currency_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

// Expects a non-negative value
fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + decimals + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
