//! Calendar-week grouping of shifts (Monday–Sunday, independent of paydays).

use crate::models::shift::Shift;
use crate::models::week::WeekBucket;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Monday of the calendar week containing `date`.
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    let day = date.weekday().num_days_from_sunday() as i64; // 0=Sun..6=Sat
    let diff = if day == 0 { -6 } else { 1 - day };
    date + Duration::days(diff)
}

/// Group shifts into week buckets, newest week first. Shifts reaching this
/// point always carry a valid date; rows that failed date normalization were
/// dropped at the store boundary.
pub fn group_by_week(shifts: &[Shift]) -> Vec<WeekBucket> {
    let mut map: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for shift in shifts {
        let entry = map.entry(week_start_monday(shift.date)).or_default();
        entry.0 += if shift.hours.is_finite() {
            shift.hours
        } else {
            0.0
        };
        entry.1 += 1;
    }

    map.into_iter()
        .rev()
        .map(|(start, (total_hours, shift_count))| WeekBucket {
            start,
            total_hours,
            shift_count,
        })
        .collect()
}
