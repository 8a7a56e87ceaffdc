//! Formatting utilities for CLI and export outputs.
//! All two-decimal rounding lives here; computed values stay full precision.

use chrono::{Datelike, NaiveDate};

pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn fmt_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// "Jul 28 – Aug 10, 2025"; the year appears on the start only when it differs.
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    let s = if start.year() == end.year() {
        start.format("%b %-d").to_string()
    } else {
        start.format("%b %-d, %Y").to_string()
    };
    format!("{} – {}", s, end.format("%b %-d, %Y"))
}

/// "Fri, Aug 15, 2025"
pub fn format_payday(payday: NaiveDate) -> String {
    payday.format("%a, %b %-d, %Y").to_string()
}

/// "August 2025", used to group pay periods by payday month.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
