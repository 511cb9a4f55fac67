//! # fdrlib
//!
//! A library for turning OS-version usage reports into fixed-width ASCII
//! tables.
//!
//! ## Overview
//!
//! Analytics dashboards export platform usage as loosely structured text.
//! Inside it, a dated block lists user counts per full OS version
//! (`iOS 14.6, 1320`). This library finds that block, folds the counts by
//! platform and major version, and lays the result out as tables:
//!
//! - **Data**: block extraction, record parsing, aggregation and totals
//! - **Output**: typed cells, row adapters and the table renderer
//! - **Options**: table layout and report settings
//!
//! ## Features
//!
//! - **Strict parsing**: malformed dates or records fail with the offending line
//! - **Keyed aggregation**: one record per `(platform, major version)`
//! - **Configurable tables**: margins, borders, row separators, rounding
//! - **Pure Rust data types**: returns structured data, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use fdrlib::{aggregate, render_report, Layout, ReportOptions};
//!
//! let raw = "\
//! # Start date: 20210701
//! # End date: 20210731
//! OS with version,Users
//! iOS 14.6, 1320
//! iOS 14.4.2, 80
//! Android 11.0.0, 600
//! ";
//!
//! let summary = aggregate(raw).unwrap();
//! assert_eq!(summary.total_users, 2000);
//! assert_eq!(summary.records.len(), 2);
//!
//! let text = render_report(&summary, ReportOptions::new().layout(Layout::Combined)).unwrap();
//! assert!(text.starts_with("From 01.07.2021 to 31.07.2021\n"));
//! assert!(text.contains("| iOS 14     | 1400  | 70.0           | 100.0    |              |"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;

pub use data::{
    aggregate, aggregate_file, aggregate_records, round_to, AggregateSummary, DateRange,
    VersionRecord, ANDROID, IOS, MAX_PRECISION,
};
pub use error::FdrError;
pub use options::{Layout, ReportOptions, TableOptions};
pub use output::{render_report, CombinedRow, Row, RowEntry, SplitRow, Table};

/// Result type for fdrlib operations
pub type Result<T> = std::result::Result<T, FdrError>;
