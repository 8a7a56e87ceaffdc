use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten. An existing file is
/// only replaced with `force` or after an explicit confirmation.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        return Ok(());
    }

    Err(AppError::Export(
        "cancelled: existing file not overwritten".to_string(),
    ))
}
