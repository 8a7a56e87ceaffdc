//! Bi-weekly pay-period arithmetic, phase-locked to one known Friday payday.
//!
//! The anchor payday defines a lattice of contiguous 14-day Monday–Sunday
//! blocks covering the whole date line. Every consumer of period boundaries
//! (shift listing, pay estimation) goes through this one implementation, so
//! boundaries can never drift between views.

use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

const PERIOD_DAYS: i64 = 14;

/// One 14-day pay period. Pure derivation from anchor + index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub index: i64,
    /// First Monday of the period.
    pub start: NaiveDate,
    /// Second Sunday, 13 days after start.
    pub end: NaiveDate,
    /// The Friday 5 days after the period ends.
    pub payday: NaiveDate,
}

/// Aggregated shift totals for one period.
#[derive(Debug, Clone)]
pub struct PeriodBucket {
    pub period: PayPeriod,
    pub total_hours: f64,
    pub shift_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayLattice {
    base_start: NaiveDate,
}

impl PayLattice {
    /// Build a lattice from an anchor payday. The anchor must be a Friday;
    /// anything else is an input error, never silently corrected.
    pub fn new(anchor: NaiveDate) -> AppResult<Self> {
        if anchor.weekday() != Weekday::Fri {
            return Err(AppError::NotAFriday(anchor.to_string()));
        }
        // Monday starting the period that pays out on `anchor`:
        // end-of-period Sunday is anchor - 5, start is 13 days before that.
        Ok(Self {
            base_start: anchor - Duration::days(18),
        })
    }

    pub fn base_start(&self) -> NaiveDate {
        self.base_start
    }

    /// Signed index of the period containing `date`. Floor division keeps the
    /// partition contiguous for dates before the anchor as well.
    pub fn period_index(&self, date: NaiveDate) -> i64 {
        (date - self.base_start).num_days().div_euclid(PERIOD_DAYS)
    }

    pub fn period_bounds(&self, index: i64) -> PayPeriod {
        let start = self.base_start + Duration::days(index * PERIOD_DAYS);
        let end = start + Duration::days(PERIOD_DAYS - 1);
        PayPeriod {
            index,
            start,
            end,
            payday: end + Duration::days(5),
        }
    }

    pub fn period_containing(&self, date: NaiveDate) -> PayPeriod {
        self.period_bounds(self.period_index(date))
    }

    /// First payday on or after `today`.
    ///
    /// The payday of the period containing `today` can lie up to 19 days out;
    /// the previous period's payday falls inside the current period's first
    /// week and may be the nearer one.
    pub fn next_payday(&self, today: NaiveDate) -> NaiveDate {
        let idx = self.period_index(today);
        let prev = self.period_bounds(idx - 1).payday;
        if prev >= today {
            prev
        } else {
            self.period_bounds(idx).payday
        }
    }
}

/// Group shifts into pay-period buckets, newest period first.
pub fn group_by_period(shifts: &[Shift], lattice: &PayLattice) -> Vec<PeriodBucket> {
    let mut map: BTreeMap<i64, (f64, usize)> = BTreeMap::new();

    for shift in shifts {
        let entry = map.entry(lattice.period_index(shift.date)).or_default();
        entry.0 += if shift.hours.is_finite() {
            shift.hours
        } else {
            0.0
        };
        entry.1 += 1;
    }

    map.into_iter()
        .rev()
        .map(|(index, (total_hours, shift_count))| PeriodBucket {
            period: lattice.period_bounds(index),
            total_hours,
            shift_count,
        })
        .collect()
}
