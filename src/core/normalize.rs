//! Normalization of heterogeneous date/time values into typed calendar data.
//!
//! Store rows may carry spreadsheet serials, ISO-ish strings, or junk. The
//! rules follow the usual spreadsheet export conventions: serial day 0 is
//! 1899-12-30 (the epoch that absorbs the 1900 leap-year bug), and the
//! fractional part of a serial is the fraction of a 24-hour day. Unparseable
//! input yields None and must never abort an aggregation pass.

use crate::models::raw::RawField;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Serial day 0 of the spreadsheet epoch.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
}

/// Resolve a raw field into a local calendar date.
///
/// A serial's integer day count maps straight onto the calendar, with no
/// timezone conversion in between, so a day stored as `45000` comes back as
/// the same day everywhere.
pub fn normalize_date(value: &RawField) -> Option<NaiveDate> {
    match value {
        RawField::Empty => None,
        RawField::Serial(n) => {
            if !n.is_finite() {
                return None;
            }
            let days = n.floor() as i64;
            serial_epoch().checked_add_signed(Duration::days(days))
        }
        RawField::Text(s) => parse_date_text(s),
    }
}

/// Resolve a raw field into a wall-clock time (minute precision).
pub fn normalize_time(value: &RawField) -> Option<NaiveTime> {
    match value {
        RawField::Empty => None,
        RawField::Serial(n) => {
            if !n.is_finite() || *n < 0.0 {
                return None;
            }
            // fraction of a day -> minutes, rounded to the nearest minute
            let total_min = (n.fract() * 24.0 * 60.0).round() as u32 % (24 * 60);
            NaiveTime::from_hms_opt(total_min / 60, total_min % 60, 0)
        }
        RawField::Text(s) => parse_time_text(s),
    }
}

/// Resolve a stored hours field to a finite number, defaulting to 0.
/// Only used when a row's times are missing and hours cannot be recomputed.
pub fn normalize_hours(value: &RawField) -> f64 {
    let parsed = match value {
        RawField::Empty => 0.0,
        RawField::Serial(n) => *n,
        RawField::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
    };
    if parsed.is_finite() { parsed } else { 0.0 }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Datetime-ish strings: keep the calendar day, drop the rest.
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

fn parse_time_text(s: &str) -> Option<NaiveTime> {
    // H:MM or HH:MM with optional seconds; seconds are dropped.
    let re = Regex::new(r"^(\d{1,2}):(\d{2})(?::\d{2})?$").unwrap();
    let caps = re.captures(s)?;
    let hh: u32 = caps[1].parse().ok()?;
    let mm: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hh, mm, 0)
}
