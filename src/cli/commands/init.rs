use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::audit;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = {
        let mut c = Config::load();
        if let Some(db) = &cli.db {
            c.database = db.clone();
        }
        c
    };

    let store = SqliteStore::open(&cfg.database)?;
    audit::record(store.conn(), "init", "", "database initialized")?;

    success("shiftpay is ready.");
    Ok(())
}
