use crate::config::Config;
use crate::core::session::ClockLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::{info, success};
use crate::utils::formatting::fmt_hours;
use std::path::Path;

/// Handle `in`: Idle → Active.
pub fn handle_in(cfg: &Config) -> AppResult<()> {
    let mut state = AppState::load(Path::new(&cfg.state_file));
    let now = chrono::Local::now().naive_local();

    if ClockLogic::clock_in(&mut state, now)? {
        success(format!("Clocked in at {}.", now.format("%H:%M")));
    } else {
        info("Already clocked in, nothing to do.");
    }
    Ok(())
}

/// Handle `out`: Active → Idle, recording the completed shift.
pub fn handle_out(cfg: &Config) -> AppResult<()> {
    let mut state = AppState::load(Path::new(&cfg.state_file));
    let store = SqliteStore::open(&cfg.database)?;
    let now = chrono::Local::now().naive_local();

    match ClockLogic::clock_out(&mut state, &store, now)? {
        Some(row) => {
            let hours: f64 = row.hours.parse().unwrap_or(0.0);
            success(format!(
                "Clocked out: {} {} → {} ({} h).",
                row.date,
                row.start,
                row.end,
                fmt_hours(hours)
            ));
        }
        None => info("Not clocked in, nothing to do."),
    }
    Ok(())
}
