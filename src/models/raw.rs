//! Tagged representation of field values coming back from the row store.
//!
//! Spreadsheet-backed stores hand back a mix of numeric date serials and plain
//! text. Each field is classified exactly once at the storage boundary; the
//! normalizer then resolves the tagged value into a typed date or time.

use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum RawField {
    /// Numeric spreadsheet serial (days since 1899-12-30, fraction = time of day).
    Serial(f64),
    /// Anything textual that is not serial-shaped.
    Text(String),
    /// Missing or blank field.
    Empty,
}

impl RawField {
    /// Classify a stored cell. Numeric-looking strings are serials.
    pub fn classify(value: &str) -> Self {
        let v = value.trim();
        if v.is_empty() {
            return RawField::Empty;
        }

        let serial_re = Regex::new(r"^\d+(\.\d+)?$").unwrap();
        if serial_re.is_match(v)
            && let Ok(n) = v.parse::<f64>()
        {
            return RawField::Serial(n);
        }

        RawField::Text(v.to_string())
    }
}

/// One row exactly as the store returned it, before any normalization.
#[derive(Debug, Clone)]
pub struct RawShiftRow {
    pub id: String,
    pub date: RawField,
    pub start: RawField,
    pub end: RawField,
    pub hours: RawField,
}
