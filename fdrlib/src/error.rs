//! Error types for fdrlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a report or rendering a table
#[derive(Error, Debug)]
pub enum FdrError {
    /// The `OS with version,Users` marker is missing, or has fewer than
    /// two metadata lines above it
    #[error("report marker line 'OS with version,Users' not found (or missing its two date lines)")]
    MarkerNotFound,

    /// A metadata line has no `label: value` separator
    #[error("malformed metadata line '{line}': expected '<label>: <value>'")]
    MalformedMetadata { line: String },

    /// A date value is not an 8-digit `yyyyMMdd` calendar date
    #[error("invalid date '{value}': expected yyyyMMdd")]
    InvalidDate { value: String },

    /// A data line could not be split into platform, version and count
    #[error("invalid record line '{line}'")]
    InvalidRecord { line: String },

    /// Summing user counts went past `u64::MAX`
    #[error("user count for '{label}' overflows")]
    CountOverflow { label: String },

    /// Titles or a row did not match the table's column count
    #[error("expected {expected} entries to match the column count, got {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    /// A table was configured with zero columns
    #[error("a table needs at least one column")]
    InvalidColumnCount,

    /// A percentage was requested against a zero total
    #[error("cannot compute percentage: {what} is zero")]
    DivisionByZero { what: String },

    /// Failed to read the report file
    #[error("failed to read file '{path}': {source}")]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}
