use crate::core::duration::hours_between;
use crate::core::normalize::{normalize_date, normalize_hours, normalize_time};
use crate::models::raw::RawShiftRow;
use chrono::{NaiveDate, NaiveTime};

/// A completed work shift.
///
/// `hours` is recomputed from start/end whenever both times are usable; the
/// stored hours field is only a fallback for rows with missing times.
#[derive(Debug, Clone)]
pub struct Shift {
    pub id: String,
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub hours: f64,
}

impl Shift {
    /// Normalize a raw store row. Returns None when the date is unusable,
    /// since such a row cannot be bucketed anywhere.
    pub fn from_raw(row: &RawShiftRow) -> Option<Self> {
        let date = normalize_date(&row.date)?;
        let start = normalize_time(&row.start);
        let end = normalize_time(&row.end);

        let hours = match (start, end) {
            (Some(s), Some(e)) => hours_between(s, e),
            _ => normalize_hours(&row.hours),
        };

        Some(Self {
            id: row.id.clone(),
            date,
            start,
            end,
            hours,
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
