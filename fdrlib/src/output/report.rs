//! Compose the final report tables from an aggregate summary.

use crate::data::summary::{AggregateSummary, ANDROID, IOS};
use crate::options::{Layout, ReportOptions, TableOptions};
use crate::Result;

use super::entry::format_decimal;
use super::rows::{CombinedRow, SplitRow, COMBINED_TITLES, SPLIT_TITLES};
use super::table::Table;

/// Render the report for `summary` in the requested layout.
///
/// The text ends with a newline. Nothing is returned if any table fails to
/// build.
pub fn render_report(summary: &AggregateSummary, options: ReportOptions) -> Result<String> {
    let tables = match options.layout {
        Layout::Combined => vec![combined_table(summary, options.precision)?],
        Layout::Split => vec![
            platform_table(summary, IOS, options.precision)?,
            platform_table(summary, ANDROID, options.precision)?,
        ],
    };

    let rendered: Vec<String> = tables.iter().map(Table::render).collect();
    Ok(format!("{}\n", rendered.join("\n\n")))
}

fn report_table_options(column_count: usize, title: String, precision: u32) -> TableOptions {
    TableOptions::new(column_count)
        .title(title)
        .precision(precision)
        .margins(true)
        .border(true)
        .separate_rows(false)
}

/// One five-column table covering iOS and Android.
pub fn combined_table(summary: &AggregateSummary, precision: u32) -> Result<Table> {
    let mut table = Table::new(report_table_options(
        COMBINED_TITLES.len(),
        summary.date_range.to_string(),
        precision,
    ))?;
    table.set_column_titles(COMBINED_TITLES)?;

    let mut rows = Vec::with_capacity(summary.records.len());
    for record in &summary.records {
        match CombinedRow::new(record, summary)? {
            Some(row) => rows.push(row),
            None => tracing::debug!(
                platform = %record.platform,
                major_version = record.major_version,
                "skipping record of unsupported platform"
            ),
        }
    }
    table.append_rows(rows)?;
    Ok(table)
}

/// A three-column table for a single platform, titled with its overall share.
pub fn platform_table(summary: &AggregateSummary, platform: &str, precision: u32) -> Result<Table> {
    let share = summary.platform_percent_rounded(platform, precision)?;
    let title = format!(
        "{}\n{} is used by {}% of users",
        summary.date_range,
        platform,
        format_decimal(share)
    );

    let mut table = Table::new(report_table_options(SPLIT_TITLES.len(), title, precision))?;
    table.set_column_titles(SPLIT_TITLES)?;

    let rows = summary
        .records_for(platform)
        .map(|record| SplitRow::new(record, summary))
        .collect::<Result<Vec<_>>>()?;
    table.append_rows(rows)?;
    Ok(table)
}
