//! Data collection: parse a report and aggregate its usage records.
//!
//! This module handles the first stage of the pipeline - turning raw report
//! text into an [`AggregateSummary`]. It provides:
//!
//! - **Parsing**: marker-based block extraction and per-line record parsing
//! - **Dates**: the report's `yyyyMMdd` date range
//! - **Aggregation**: records merged by `(platform, major version)` with totals
//!
//! ## Example
//!
//! ```rust
//! use fdrlib::data::aggregate;
//!
//! let raw = "Start: 20210701\nEnd: 20210731\nOS with version,Users\niOS 14.6, 30\nAndroid 11.0, 10\n";
//! let summary = aggregate(raw).unwrap();
//! assert_eq!(summary.total_users, 40);
//! assert_eq!(summary.platform_percent("iOS").unwrap(), 75.0);
//! ```

pub mod date;
pub mod parser;
pub mod summary;

pub use date::DateRange;
pub use parser::{aggregate, aggregate_file, extract_block, parse_record, ReportBlock, MARKER_LINE};
pub use summary::{
    aggregate_records, percent, round_to, AggregateSummary, VersionRecord, ANDROID, IOS,
    MAX_PRECISION,
};
