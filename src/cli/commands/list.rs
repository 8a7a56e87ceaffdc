use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lattice::{self, PayLattice};
use crate::core::logic::Core;
use crate::core::weekly::group_by_week;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::state::AppState;
use crate::ui::messages::warning;
use crate::utils::formatting::{fmt_hours, format_payday, format_range, month_key};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { weekly, periods } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let shifts = Core::load_shifts(&store)?;

        if *weekly {
            print_weekly(&shifts);
        } else if *periods {
            print_periods(cfg, &shifts)?;
        } else {
            print_shifts(&shifts);
        }
    }

    Ok(())
}

fn print_shifts(shifts: &[Shift]) {
    if shifts.is_empty() {
        println!("No shifts recorded.");
        return;
    }

    let mut table = Table::new(vec![
        Column::right("ID", 5),
        Column::left("Date", 10),
        Column::left("Start", 5),
        Column::left("End", 5),
        Column::right("Hours", 7),
    ]);

    for s in shifts {
        table.add_row(vec![
            s.id.clone(),
            s.date_str(),
            s.start_str(),
            s.end_str(),
            fmt_hours(s.hours),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{} shifts, {} hours total",
        shifts.len(),
        fmt_hours(Core::total_hours(shifts))
    );
}

fn print_weekly(shifts: &[Shift]) {
    let buckets = group_by_week(shifts);

    if buckets.is_empty() {
        println!("No shifts recorded.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Week (Mon–Sun)", 22),
        Column::right("Hours", 7),
        Column::right("Shifts", 6),
    ]);

    for b in &buckets {
        table.add_row(vec![
            format_range(b.start, b.end()),
            fmt_hours(b.total_hours),
            b.shift_count.to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn print_periods(cfg: &Config, shifts: &[Shift]) -> AppResult<()> {
    let state = AppState::load(Path::new(&cfg.state_file));

    let Some(anchor) = state.anchor() else {
        warning(
            "No payday anchor configured. Set a known Friday payday with \
             `shiftpay payday --set YYYY-MM-DD` to see bi-weekly periods.",
        );
        return Ok(());
    };

    let lat = PayLattice::new(anchor)?;
    let buckets = lattice::group_by_period(shifts, &lat);

    if buckets.is_empty() {
        println!("No shifts recorded.");
        return Ok(());
    }

    // Buckets arrive newest first, so consecutive runs share a payday month.
    let mut current_month = String::new();
    for b in &buckets {
        let month = month_key(b.period.payday);
        if month != current_month {
            println!("{}", month);
            current_month = month;
        }
        println!(
            "  {} (Payday: {})  {} hrs ({} shifts)",
            format_range(b.period.start, b.period.end),
            format_payday(b.period.payday),
            fmt_hours(b.total_hours),
            b.shift_count
        );
    }

    Ok(())
}
