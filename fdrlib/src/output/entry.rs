//! Table cells and rows.

use crate::data::summary::round_to;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEntry {
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Decimal number, rounded on render when the table has a precision
    Float(f64),
    /// Blank cell
    Empty,
}

impl RowEntry {
    /// Render the cell, rounding decimal values to `precision` digits.
    ///
    /// Rounding applies to any cell whose text is a finite, non-integer
    /// number; integers, other text and empty cells pass through.
    pub fn to_cell(&self, precision: Option<u32>) -> String {
        let raw = self.to_string();
        match precision {
            Some(digits) => round_if_decimal(&raw, digits),
            None => raw,
        }
    }
}

impl std::fmt::Display for RowEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowEntry::Text(text) => f.write_str(text),
            RowEntry::Integer(value) => write!(f, "{value}"),
            RowEntry::Float(value) => f.write_str(&format_decimal(*value)),
            RowEntry::Empty => Ok(()),
        }
    }
}

impl From<&str> for RowEntry {
    fn from(value: &str) -> Self {
        RowEntry::Text(value.to_string())
    }
}

impl From<String> for RowEntry {
    fn from(value: String) -> Self {
        RowEntry::Text(value)
    }
}

impl From<i64> for RowEntry {
    fn from(value: i64) -> Self {
        RowEntry::Integer(value)
    }
}

impl From<u64> for RowEntry {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(RowEntry::Integer)
            .unwrap_or_else(|_| RowEntry::Text(value.to_string()))
    }
}

impl From<f64> for RowEntry {
    fn from(value: f64) -> Self {
        RowEntry::Float(value)
    }
}

/// Anything that can be laid out as one table row.
pub trait Row {
    /// Cells in column order.
    fn entries(&self) -> Vec<RowEntry>;
}

impl Row for Vec<RowEntry> {
    fn entries(&self) -> Vec<RowEntry> {
        self.clone()
    }
}

impl<const N: usize> Row for [RowEntry; N] {
    fn entries(&self) -> Vec<RowEntry> {
        self.to_vec()
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn entries(&self) -> Vec<RowEntry> {
        (**self).entries()
    }
}

/// Shortest round-trip form, always with a fractional part ("100.0", "50.1").
pub fn format_decimal(value: f64) -> String {
    format!("{value:?}")
}

fn round_if_decimal(raw: &str, precision: u32) -> String {
    if raw.is_empty() || raw.parse::<i64>().is_ok() {
        return raw.to_string();
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => format_decimal(round_to(value, precision)),
        _ => raw.to_string(),
    }
}
