//! Clock state machine + store round trips at the library level.

mod common;
use common::{setup_test_db, setup_test_state};

use chrono::NaiveDateTime;
use shiftpay::core::logic::Core;
use shiftpay::core::session::ClockLogic;
use shiftpay::db::store::{NewShiftRow, ShiftStore, SqliteStore};
use shiftpay::errors::{AppError, AppResult};
use shiftpay::models::raw::RawShiftRow;
use shiftpay::state::AppState;
use std::path::Path;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// A store whose writes always fail, for the clock-out error path.
struct BrokenStore;

impl ShiftStore for BrokenStore {
    fn fetch(&self) -> AppResult<Vec<RawShiftRow>> {
        Ok(Vec::new())
    }
    fn create(&self, _row: &NewShiftRow) -> AppResult<()> {
        Err(AppError::Other("write refused".to_string()))
    }
    fn delete(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

#[test]
fn clock_in_is_idempotent_while_active() {
    let state_path = setup_test_state("clock_in_idempotent");
    let mut state = AppState::load(Path::new(&state_path));

    assert!(ClockLogic::clock_in(&mut state, dt("2025-09-01T09:00:00")).unwrap());
    // second clock-in is a silent no-op
    assert!(!ClockLogic::clock_in(&mut state, dt("2025-09-01T10:00:00")).unwrap());
    assert_eq!(state.session_start(), Some(dt("2025-09-01T09:00:00")));
}

#[test]
fn clock_out_without_a_session_is_a_noop() {
    let state_path = setup_test_state("clock_out_idle");
    let db_path = setup_test_db("clock_out_idle");

    let mut state = AppState::load(Path::new(&state_path));
    let store = SqliteStore::open(&db_path).unwrap();

    let out = ClockLogic::clock_out(&mut state, &store, dt("2025-09-01T17:00:00")).unwrap();
    assert!(out.is_none());
}

#[test]
fn clock_out_records_the_shift_and_clears_the_session() {
    let state_path = setup_test_state("clock_out_records");
    let db_path = setup_test_db("clock_out_records");

    let mut state = AppState::load(Path::new(&state_path));
    let store = SqliteStore::open(&db_path).unwrap();

    ClockLogic::clock_in(&mut state, dt("2025-09-01T09:00:00")).unwrap();

    // the session survives a "restart" (fresh load from disk)
    let mut state = AppState::load(Path::new(&state_path));
    assert_eq!(state.session_start(), Some(dt("2025-09-01T09:00:00")));

    let row = ClockLogic::clock_out(&mut state, &store, dt("2025-09-01T17:30:00"))
        .unwrap()
        .unwrap();
    assert_eq!(row.date, "2025-09-01");
    assert_eq!(row.start, "09:00");
    assert_eq!(row.end, "17:30");

    assert!(state.session_start().is_none());

    let shifts = Core::load_shifts(&store).unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].hours, 8.5);
}

#[test]
fn failed_persist_still_clears_the_session() {
    let state_path = setup_test_state("clock_out_broken_store");

    let mut state = AppState::load(Path::new(&state_path));
    ClockLogic::clock_in(&mut state, dt("2025-09-01T09:00:00")).unwrap();

    let result = ClockLogic::clock_out(&mut state, &BrokenStore, dt("2025-09-01T17:00:00"));

    // the error surfaces, but the clock is not stuck Active
    assert!(result.is_err());
    assert!(state.session_start().is_none());
}

#[test]
fn overnight_clock_out_crosses_midnight_once() {
    let state_path = setup_test_state("clock_out_overnight");
    let db_path = setup_test_db("clock_out_overnight");

    let mut state = AppState::load(Path::new(&state_path));
    let store = SqliteStore::open(&db_path).unwrap();

    ClockLogic::clock_in(&mut state, dt("2025-09-01T22:00:00")).unwrap();
    ClockLogic::clock_out(&mut state, &store, dt("2025-09-02T06:00:00")).unwrap();

    let shifts = Core::load_shifts(&store).unwrap();
    // the shift stays on its start date
    assert_eq!(shifts[0].date_str(), "2025-09-01");
    assert_eq!(shifts[0].hours, 8.0);
}
