//! Output formatting: present aggregated data as tables.
//!
//! This module handles the final stage of the pipeline - turning an
//! [`AggregateSummary`](crate::data::AggregateSummary) into text. It provides:
//!
//! - **RowEntry / Row**: typed cells and the row contract
//! - **Row adapters**: combined and per-platform views of a record
//! - **Table**: the fixed-width ASCII layout engine
//! - **Report**: titled tables for a chosen layout
//!
//! ## Example
//!
//! ```rust
//! use fdrlib::output::{RowEntry, Table};
//! use fdrlib::TableOptions;
//!
//! let mut table = Table::new(TableOptions::new(2).precision(1)).unwrap();
//! table.set_column_titles(["Name", "Share"]).unwrap();
//! table.append_row([RowEntry::from("iOS 14"), RowEntry::Float(50.05)]).unwrap();
//! assert!(table.render().contains("| iOS 14 | 50.1  |"));
//! ```

pub mod entry;
pub mod report;
pub mod rows;
pub mod table;

pub use entry::{format_decimal, Row, RowEntry};
pub use report::{combined_table, platform_table, render_report};
pub use rows::{CombinedRow, SplitRow, COMBINED_TITLES, SPLIT_TITLES};
pub use table::Table;
