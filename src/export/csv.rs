use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::utils::formatting::fmt_hours;
use csv::Writer;
use std::path::Path;

/// Write the shifts to CSV. Fields are constrained date/time/numeric
/// formats, so nothing ever needs quoting.
pub fn write_csv(path: &Path, shifts: &[Shift]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["Date", "Start", "End", "Hours"])?;

    for shift in shifts {
        wtr.write_record(&[
            shift.date_str(),
            shift.start_str(),
            shift.end_str(),
            fmt_hours(shift.hours),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
