use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let path = export::export_shifts(&store, file, *force)?;
        success(format!("CSV export completed: {}", path.display()));
    }

    Ok(())
}
