use crate::config::Config;
use crate::core::lattice::PayLattice;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::{fmt_hours, format_payday};
use std::path::Path;

/// Handle `status`: clock state, elapsed time, next payday.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let state = AppState::load(Path::new(&cfg.state_file));
    let now = chrono::Local::now().naive_local();

    match state.session_start() {
        Some(started) => {
            let elapsed = (now - started).num_seconds() as f64 / 3600.0;
            info(format!(
                "Clocked in since {} ({} hrs so far).",
                started.format("%Y-%m-%d %H:%M"),
                fmt_hours(elapsed.max(0.0))
            ));
        }
        None => info("Not clocked in."),
    }

    match state.anchor() {
        Some(anchor) => {
            let lattice = PayLattice::new(anchor)?;
            info(format!(
                "Next payday: {}.",
                format_payday(lattice.next_payday(date::today()))
            ));
        }
        None => info("No payday anchor configured (see `shiftpay payday --set`)."),
    }

    Ok(())
}
