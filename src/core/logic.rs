//! High-level read pipeline shared by listing, export, and pay estimation.

use crate::db::store::ShiftStore;
use crate::errors::AppResult;
use crate::models::shift::Shift;

pub struct Core;

impl Core {
    /// Fetch all rows from the store and normalize them, newest first
    /// (by date, then start time). Rows whose date cannot be normalized are
    /// dropped here and never reach any aggregation.
    pub fn load_shifts(store: &dyn ShiftStore) -> AppResult<Vec<Shift>> {
        let raw = store.fetch()?;
        let mut shifts: Vec<Shift> = raw.iter().filter_map(Shift::from_raw).collect();
        shifts.sort_by(|a, b| (b.date, b.start).cmp(&(a.date, a.start)));
        Ok(shifts)
    }

    pub fn total_hours(shifts: &[Shift]) -> f64 {
        shifts
            .iter()
            .map(|s| if s.hours.is_finite() { s.hours } else { 0.0 })
            .sum()
    }
}
