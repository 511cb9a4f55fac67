//! Report text parsing.
//!
//! An export is loosely structured text. Somewhere inside it sits a block
//! like this:
//!
//! ```text
//! # Start date: 20210701
//! # End date: 20210731
//! OS with version,Users
//! iOS 14.6, 1320
//! Android 11.0.0, 874
//!
//! ```
//!
//! The two lines above the marker carry the report dates. The lines after it,
//! up to the first blank line, are `<platform> <version>, <count>` records.

use std::path::Path;

use crate::error::FdrError;
use crate::Result;

use super::date::DateRange;
use super::summary::{AggregateSummary, VersionRecord};

/// Line that opens the version/user-count block.
pub const MARKER_LINE: &str = "OS with version,Users";

/// The raw pieces of a report before any value is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock<'a> {
    /// Metadata line holding the start date
    pub start_line: &'a str,
    /// Metadata line holding the end date
    pub end_line: &'a str,
    /// Trimmed, non-empty record lines following the marker
    pub data_lines: Vec<&'a str>,
}

/// Locate the marker and slice out its metadata and data lines.
pub fn extract_block(raw: &str) -> Result<ReportBlock<'_>> {
    let lines: Vec<&str> = raw.lines().collect();

    let marker = lines
        .iter()
        .position(|line| line.trim() == MARKER_LINE)
        .ok_or(FdrError::MarkerNotFound)?;

    if marker < 2 {
        return Err(FdrError::MarkerNotFound);
    }

    let data_lines: Vec<&str> = lines[marker + 1..]
        .iter()
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty())
        .collect();

    tracing::debug!(
        marker_line = marker + 1,
        data_lines = data_lines.len(),
        "located report block"
    );

    Ok(ReportBlock {
        start_line: lines[marker - 2],
        end_line: lines[marker - 1],
        data_lines,
    })
}

/// Value part of a `label: value` metadata line.
pub fn metadata_value(line: &str) -> Result<&str> {
    line.split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| FdrError::MalformedMetadata {
            line: line.to_string(),
        })
}

/// Parse one `<platform> <major>[.<minor>...], <count>` line.
pub fn parse_record(line: &str) -> Result<VersionRecord> {
    let invalid = || FdrError::InvalidRecord {
        line: line.to_string(),
    };

    let (left, right) = line.split_once(',').ok_or_else(invalid)?;
    let (platform, version) = left
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(invalid)?;

    let major = version
        .trim()
        .split('.')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let count = right.trim().parse::<u64>().map_err(|_| invalid())?;

    Ok(VersionRecord::new(platform, major, count))
}

/// Parse and aggregate a whole report.
///
/// Any malformed piece fails the whole call; there is no partial result.
pub fn aggregate(raw: &str) -> Result<AggregateSummary> {
    let block = extract_block(raw)?;
    let date_range = DateRange::parse(
        metadata_value(block.start_line)?,
        metadata_value(block.end_line)?,
    )?;

    let records = block
        .data_lines
        .iter()
        .map(|line| parse_record(line))
        .collect::<Result<Vec<_>>>()?;

    let summary = AggregateSummary::from_records(records, date_range)?;
    tracing::debug!(
        records = summary.records.len(),
        total_users = summary.total_users,
        "aggregated report"
    );
    Ok(summary)
}

/// Read a report file and aggregate it.
pub fn aggregate_file(path: impl AsRef<Path>) -> Result<AggregateSummary> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| FdrError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read report file");
    aggregate(&raw)
}
