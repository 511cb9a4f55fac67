//! Fixed-width ASCII table rendering.
//!
//! A [`Table`] collects column titles and rows, then lays them out on
//! demand:
//!
//! ```text
//! +------------+-------+------+
//! | OS version | Users | %    |
//! +------------+-------+------+
//! | iOS 14     | 1320  | 60.2 |
//! | iOS 13     | 874   | 39.8 |
//! +------------+-------+------+
//! ```
//!
//! Every column is as wide as its widest cell, and cells are left-justified.
//! All grid lines come out the same length whatever the margin, border and
//! separator settings.

use crate::error::FdrError;
use crate::options::TableOptions;
use crate::Result;

use super::entry::{Row, RowEntry};

const CROSSING: &str = "+";
const HORIZONTAL: &str = "-";
const VERTICAL: &str = "|";

/// A table under construction.
///
/// Titles and rows are validated against the column count as they are
/// added; a rejected call leaves the table untouched. Rendering never
/// mutates it.
#[derive(Debug, Clone)]
pub struct Table {
    options: TableOptions,
    column_titles: Option<Vec<String>>,
    rows: Vec<Vec<RowEntry>>,
}

impl Table {
    /// Create an empty table.
    ///
    /// Fails with [`FdrError::InvalidColumnCount`] for a zero-column layout.
    pub fn new(options: TableOptions) -> Result<Self> {
        if options.column_count == 0 {
            return Err(FdrError::InvalidColumnCount);
        }
        Ok(Self {
            options,
            column_titles: None,
            rows: Vec::new(),
        })
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn column_titles(&self) -> Option<&[String]> {
        self.column_titles.as_deref()
    }

    pub fn rows(&self) -> &[Vec<RowEntry>] {
        &self.rows
    }

    /// Replace the column titles.
    pub fn set_column_titles<I, S>(&mut self, titles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        self.check_width(titles.len())?;
        self.column_titles = Some(titles);
        Ok(())
    }

    /// Append one row.
    pub fn append_row<R: Row>(&mut self, row: R) -> Result<()> {
        let entries = row.entries();
        self.check_width(entries.len())?;
        self.rows.push(entries);
        Ok(())
    }

    /// Append several rows; if any row has the wrong width, none are added.
    pub fn append_rows<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        let batch: Vec<Vec<RowEntry>> = rows.into_iter().map(|row| row.entries()).collect();
        for entries in &batch {
            self.check_width(entries.len())?;
        }
        self.rows.extend(batch);
        Ok(())
    }

    /// Lay the table out as text.
    ///
    /// The optional title comes first, followed by a blank line and the grid.
    /// There is no trailing newline.
    ///
    /// Separator lines only ever sit between two grid rows, plus the top and
    /// bottom border. Without column titles the first data row has no
    /// separator above it. With `separate_rows` off the only inner separator
    /// is the one under the titles.
    pub fn render(&self) -> String {
        let matrix = self.cell_matrix();
        let widths = column_widths(&matrix, self.options.column_count);
        let separator = self.separator_line(&widths);
        let has_titles = self.column_titles.is_some();

        let mut grid: Vec<String> = Vec::with_capacity(matrix.len() * 2 + 2);
        if self.options.border {
            grid.push(separator.clone());
        }
        for (index, row) in matrix.iter().enumerate() {
            let after_titles = has_titles && index == 1;
            if index > 0 && (self.options.separate_rows || after_titles) {
                grid.push(separator.clone());
            }
            grid.push(self.format_row(row, &widths));
        }
        if self.options.border {
            grid.push(separator);
        }

        tracing::trace!(
            columns = self.options.column_count,
            rows = self.rows.len(),
            lines = grid.len(),
            "rendered table"
        );

        let body = grid.join("\n");
        match &self.options.title {
            Some(title) => format!("{title}\n\n{body}"),
            None => body,
        }
    }

    fn check_width(&self, found: usize) -> Result<()> {
        if found == self.options.column_count {
            Ok(())
        } else {
            Err(FdrError::ColumnCountMismatch {
                expected: self.options.column_count,
                found,
            })
        }
    }

    /// Titles (if any) then data rows, as display strings.
    fn cell_matrix(&self) -> Vec<Vec<String>> {
        let precision = self.options.precision;
        let titles = self.column_titles.iter().cloned();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|entry| entry.to_cell(precision))
                    .collect::<Vec<String>>()
            });
        titles.chain(rows).collect()
    }

    fn leading_space(&self, column: usize) -> bool {
        self.options.margins && (self.options.border || column != 0)
    }

    fn trailing_space(&self, column: usize) -> bool {
        self.options.margins && (self.options.border || column + 1 != self.options.column_count)
    }

    fn format_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (cell, &width))| {
                let mut padded = String::with_capacity(width + 2);
                if self.leading_space(column) {
                    padded.push(' ');
                }
                padded.push_str(&format!("{cell:<width$}"));
                if self.trailing_space(column) {
                    padded.push(' ');
                }
                padded
            })
            .collect();

        let joined = cells.join(VERTICAL);
        if self.options.border {
            format!("{VERTICAL}{joined}{VERTICAL}")
        } else {
            joined
        }
    }

    fn separator_line(&self, widths: &[usize]) -> String {
        let runs: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                let padded = width
                    + usize::from(self.leading_space(column))
                    + usize::from(self.trailing_space(column));
                HORIZONTAL.repeat(padded)
            })
            .collect();

        let joined = runs.join(CROSSING);
        if self.options.border {
            format!("{CROSSING}{joined}{CROSSING}")
        } else {
            joined
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Widest cell (in chars) of each column.
fn column_widths(matrix: &[Vec<String>], column_count: usize) -> Vec<usize> {
    let mut widths = vec![0; column_count];
    for row in matrix {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}
