//! Report date range.
//!
//! Reports carry their dates as compact `yyyyMMdd` strings; tables show them
//! as `dd.MM.yyyy`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FdrError;
use crate::Result;

/// Format of dates inside the report export.
const INPUT_FORMAT: &str = "%Y%m%d";

/// Format of dates in rendered output.
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// The period a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse both ends from `yyyyMMdd` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_report_date(start)?,
            end: parse_report_date(end)?,
        })
    }

    /// Start date as `dd.MM.yyyy`.
    pub fn start_display(&self) -> String {
        self.start.format(DISPLAY_FORMAT).to_string()
    }

    /// End date as `dd.MM.yyyy`.
    pub fn end_display(&self) -> String {
        self.end.format(DISPLAY_FORMAT).to_string()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "From {} to {}", self.start_display(), self.end_display())
    }
}

/// Parse a single `yyyyMMdd` date.
///
/// The value must be exactly eight ASCII digits; chrono alone would also
/// accept shorter day/month fields.
pub fn parse_report_date(value: &str) -> Result<NaiveDate> {
    let invalid = || FdrError::InvalidDate {
        value: value.to_string(),
    };

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, INPUT_FORMAT).map_err(|_| invalid())
}
