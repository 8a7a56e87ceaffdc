//! Clock-in/clock-out state machine.
//!
//! Two states: Idle (no session) and Active (one running session). The
//! session timestamp lives in the state file, so a running clock survives a
//! process restart.

use crate::core::duration::hours_between;
use crate::db::store::{NewShiftRow, ShiftStore};
use crate::errors::AppResult;
use crate::state::AppState;
use chrono::NaiveDateTime;

pub struct ClockLogic;

impl ClockLogic {
    /// Idle → Active. Returns false when a session is already running
    /// (the transition is a no-op, not an error).
    pub fn clock_in(state: &mut AppState, now: NaiveDateTime) -> AppResult<bool> {
        if state.session_start().is_some() {
            return Ok(false);
        }
        state.start_session(now)?;
        Ok(true)
    }

    /// Active → Idle. Turns the running session into a persisted shift.
    /// Returns Ok(None) when no session is running.
    ///
    /// The session is cleared even when the store write fails (the clock
    /// must never get stuck Active); the write error is surfaced after
    /// local state is back to Idle. The unsaved shift is lost unless the
    /// user re-enters it manually.
    pub fn clock_out(
        state: &mut AppState,
        store: &dyn ShiftStore,
        now: NaiveDateTime,
    ) -> AppResult<Option<NewShiftRow>> {
        let Some(started) = state.session_start() else {
            return Ok(None);
        };

        let hours = hours_between(started.time(), now.time());
        let row = NewShiftRow {
            date: started.date().format("%Y-%m-%d").to_string(),
            start: started.format("%H:%M").to_string(),
            end: now.format("%H:%M").to_string(),
            hours: hours.to_string(),
        };

        let persisted = store.create(&row);
        state.clear_session()?;
        persisted?;

        Ok(Some(row))
    }
}
