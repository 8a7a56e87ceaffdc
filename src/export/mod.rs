mod csv;
mod fs_utils;

use crate::core::logic::Core;
use crate::db::store::ShiftStore;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Export all shifts to a CSV file. Prompts before overwriting an existing
/// file unless `force` is set.
pub fn export_shifts(store: &dyn ShiftStore, file: &str, force: bool) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    fs_utils::ensure_writable(&path, force)?;

    let shifts = Core::load_shifts(store)?;
    csv::write_csv(&path, &shifts)?;

    Ok(path)
}
