//! Display formatting shared by summaries and receipts.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::DATE_FORMAT;

/// Rewrites an ISO `YYYY-MM-DD` date as `DD-MM-YYYY`.
///
/// A value that does not parse is returned unchanged.
///
/// # Examples
///
/// ```
/// use faculty_payroll::calculation::format_display_date;
///
/// assert_eq!(format_display_date("2025-03-07"), "07-03-2025");
/// assert_eq!(format_display_date("07/03/2025"), "07/03/2025");
/// ```
pub fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Formats a value with exactly two decimal places.
pub fn fixed2(value: Decimal) -> String {
    let mut value = value.round_dp(2);
    value.rescale(2);
    value.to_string()
}

/// Formats a value with its fractional part dropped.
pub fn whole(value: Decimal) -> String {
    value.trunc().normalize().to_string()
}

/// Keeps at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
