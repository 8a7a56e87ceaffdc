use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::estimator::estimate;
use crate::core::lattice::PayLattice;
use crate::core::logic::Core;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::formatting::{fmt_hours, fmt_money, format_payday, format_range};
use std::path::Path;

/// Estimate pay for one bi-weekly period (0 = current, -1 = previous, ...).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay { period } = cmd {
        let state = AppState::load(Path::new(&cfg.state_file));

        let Some(anchor) = state.anchor() else {
            warning(
                "No payday anchor configured. Set a known Friday payday with \
                 `shiftpay payday --set YYYY-MM-DD` first.",
            );
            return Ok(());
        };

        let lattice = PayLattice::new(anchor)?;
        let current = lattice.period_containing(date::today());
        let bounds = lattice.period_bounds(current.index + period);

        let store = SqliteStore::open(&cfg.database)?;
        let shifts = Core::load_shifts(&store)?;
        let pay = estimate(&shifts, bounds.start, bounds.end, &cfg.pay);

        println!(
            "Period: {} (Payday: {})\n",
            format_range(bounds.start, bounds.end),
            format_payday(bounds.payday)
        );

        let vacation_label = if cfg.pay.vacation_is_deduction {
            "Vacation (accrued)"
        } else {
            "Vacation (paid out)"
        };

        println!("  {:<19} {:>10}", "Hours", fmt_hours(pay.total_hours));
        println!("  {:<19} {:>10}", "Gross pay", fmt_money(pay.gross_shown));
        println!("  {:<19} {:>10}", vacation_label, fmt_money(pay.vacation));
        println!("  {:<19} {:>10}", "Federal tax", fmt_money(pay.federal));
        println!("  {:<19} {:>10}", "Pension", fmt_money(pay.pension));
        println!("  {:<19} {:>10}", "Insurance", fmt_money(pay.insurance));
        println!("  {:<19} {:>10}", "Deductions", fmt_money(pay.deductions));
        println!("  {:<19} {:>10}", "Net pay", fmt_money(pay.net));
    }

    Ok(())
}
