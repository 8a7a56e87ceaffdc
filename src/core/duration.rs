//! Elapsed-time computation between two wall-clock times on the same day.

use chrono::NaiveTime;

/// Hours between two clock times anchored to the same calendar date.
///
/// `end < start` means the shift crossed midnight once, so a day is added.
/// Shifts longer than 24 hours are not representable. The result is exact
/// fractional hours; rounding to two decimals is a display concern.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut secs = (end - start).num_seconds();
    if secs < 0 {
        secs += 24 * 3600;
    }
    secs as f64 / 3600.0
}
