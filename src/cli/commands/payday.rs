use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lattice::PayLattice;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::format_payday;
use std::path::Path;

/// Show, set, or clear the payday anchor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payday { set, clear } = cmd {
        let mut state = AppState::load(Path::new(&cfg.state_file));

        if *clear {
            state.clear_anchor()?;
            success("Payday anchor cleared.");
            return Ok(());
        }

        if let Some(raw) = set {
            let anchor =
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;

            // rejects non-Fridays before anything is persisted
            PayLattice::new(anchor)?;
            state.set_anchor(anchor)?;

            success(format!("Payday anchor set to {}.", format_payday(anchor)));
            return Ok(());
        }

        match state.anchor() {
            Some(anchor) => {
                let lattice = PayLattice::new(anchor)?;
                info(format!("Anchor payday: {}", format_payday(anchor)));
                info(format!(
                    "Next payday:   {}",
                    format_payday(lattice.next_payday(date::today()))
                ));
            }
            None => warning(
                "No payday anchor configured. Use `shiftpay payday --set YYYY-MM-DD` \
                 with a known Friday payday.",
            ),
        }
    }

    Ok(())
}
