use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duration::hours_between;
use crate::db::store::{NewShiftRow, ShiftStore, SqliteStore};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::fmt_hours;
use crate::utils::time::parse_required_time;

/// Add a shift manually. All three fields are required; hours are always
/// computed from the times, never taken from the user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_t = parse_required_time(start)?;
        let end_t = parse_required_time(end)?;

        let hours = hours_between(start_t, end_t);

        let store = SqliteStore::open(&cfg.database)?;
        store.create(&NewShiftRow {
            date: d.format("%Y-%m-%d").to_string(),
            start: start_t.format("%H:%M").to_string(),
            end: end_t.format("%H:%M").to_string(),
            hours: hours.to_string(),
        })?;

        success(format!(
            "Added shift on {}: {} → {} ({} h).",
            d,
            start_t.format("%H:%M"),
            end_t.format("%H:%M"),
            fmt_hours(hours)
        ));
    }

    Ok(())
}
