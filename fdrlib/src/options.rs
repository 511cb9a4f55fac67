//! Input options for table rendering and report composition.
//!
//! This module contains all configuration types that control how the
//! library lays out its output.

use std::str::FromStr;

/// Layout and formatting settings for a [`Table`](crate::output::Table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of columns every row must have
    pub column_count: usize,
    /// Text printed above the grid
    pub title: Option<String>,
    /// Fractional digits decimal cells are rounded to
    pub precision: Option<u32>,
    /// Pad cells with a space on each side
    pub margins: bool,
    /// Draw an outer frame
    pub border: bool,
    /// Draw a separator between every pair of rows
    pub separate_rows: bool,
}

impl TableOptions {
    /// Options for a table with `column_count` columns.
    ///
    /// Margins, border and row separators start enabled; no title or
    /// rounding.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            title: None,
            precision: None,
            margins: true,
            border: true,
            separate_rows: true,
        }
    }

    /// Set the title shown above the grid.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Round decimal cells to `digits` fractional digits.
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn margins(mut self, enabled: bool) -> Self {
        self.margins = enabled;
        self
    }

    pub fn border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    pub fn separate_rows(mut self, enabled: bool) -> Self {
        self.separate_rows = enabled;
        self
    }
}

/// How a report's records are split into tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One table per platform with a single percentage column
    #[default]
    Split,
    /// A single table with per-platform percentage columns
    Combined,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "split" => Ok(Layout::Split),
            "combined" => Ok(Layout::Combined),
            _ => Err(format!("Unknown layout: {}", s)),
        }
    }
}

/// Options for rendering a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Table arrangement
    pub layout: Layout,
    /// Fractional digits for percentages
    pub precision: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Split,
            precision: 1,
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set table arrangement.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set percentage precision.
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }
}
