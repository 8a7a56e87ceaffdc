use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let path = Config::config_file();

        if !path.exists() {
            warning(format!(
                "No configuration file found at {:?}. Run `shiftpay init` first.",
                path
            ));
            return Ok(());
        }

        info(format!("Configuration file: {:?}\n", path));
        println!("{}", fs::read_to_string(&path)?);
    }

    Ok(())
}
