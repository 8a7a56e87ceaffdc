use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI color keyed on the audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let entries = audit::load(&pool.conn)?;

        if entries.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        // widths computed on the plain strings, before any coloring
        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + 1 + target.len())
            .max()
            .unwrap_or(10);

        println!("📜 Audit log:\n");

        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let plain = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} {}", operation, target)
            };
            let padding = " ".repeat(op_w.saturating_sub(plain.len()));

            let colored = if target.is_empty() {
                color_for_operation(&operation).paint(operation.clone()).to_string()
            } else {
                format!(
                    "{} {}",
                    color_for_operation(&operation).paint(operation.clone()),
                    target
                )
            };

            println!("{:>id_w$}: {} | {}{} => {}", id, date, colored, padding, message);
        }
    }

    Ok(())
}
