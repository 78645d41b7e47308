//! Display formatting helpers for money, dates, and month labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a dollar amount as USD with thousands separators, e.g. `$1,234.56`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Format the date portion of an ISO 8601 timestamp as `Jan 5, 2026`.
/// Unparseable input is shown as-is rather than hidden.
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let Ok(month_num) = month.parse::<u32>() else {
        return iso.to_owned();
    };
    let name = month_name(month_num);
    if name.is_empty() {
        return iso.to_owned();
    }
    let day = day.trim_start_matches('0');
    let day = if day.is_empty() { "0" } else { day };
    format!("{name} {day}, {year}")
}

/// Month index (1-12) to short name; empty string out of range.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    match month {
        1..=12 => NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// Axis label for one month of trend data, e.g. `Jan 2026`.
pub fn trend_label(year: i32, month: u32) -> String {
    format!("{} {year}", month_name(month))
}
