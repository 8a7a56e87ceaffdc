use chrono::{Duration, NaiveDate};

/// One Monday–Sunday calendar week with its aggregated shift totals.
/// Derived on every listing, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub start: NaiveDate,
    pub total_hours: f64,
    pub shift_count: usize,
}

impl WeekBucket {
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }
}
