//! Formatting helpers for calendar figures.

use time::Date;

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// Years with at most one decimal, dropping a trailing `.0`.
pub fn format_years(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// `"January 1990"` style label.
pub fn month_year(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}
