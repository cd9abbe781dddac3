//! Number formatting for console output, reports and chart labels
//!
//! Dollar amounts and hour counts use comma thousands separators (`9,400`, `752,000.00`).
//! Chart axes abbreviate dollar values to millions (`$2.4M`).

use crate::analysis::constants::MILLION_F64;

/// Inserts comma thousands separators into a run of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats an integer with comma thousands separators, e.g. `-1234567` as `-1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats an amount with two decimals and comma thousands separators, e.g. `1,234.50`.
///
/// Non-finite values are printed as-is.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, group_digits(whole), fraction)
}

/// Formats a dollar value in millions with one decimal, for chart tick labels.
///
/// A value of 2,350,000 renders as `$2.4M`.
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / MILLION_F64)
}

/// Formats a reuse rate as a percentage label, e.g. `0.1` as `10%` and `0.125` as `12.5%`.
pub fn format_rate_label(rate: f64) -> String {
    let percent = rate * 100.0;
    let rounded = percent.round();
    if (percent - rounded).abs() < 1e-9 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", percent)
    }
}
