//! Output dispatch for the CLI: ASCII tables or JSON

use std::str::FromStr;

use fdrlib::{render_report, AggregateSummary, ReportOptions};

/// How a summary is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Fixed-width tables
    #[default]
    Table,
    /// The aggregated summary as pretty-printed JSON
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Render a summary in the requested mode, ending with a newline
pub fn render_summary(
    summary: &AggregateSummary,
    mode: OutputMode,
    options: ReportOptions,
) -> anyhow::Result<String> {
    match mode {
        OutputMode::Table => Ok(render_report(summary, options)?),
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(summary)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdrlib::{DateRange, VersionRecord, IOS};

    fn sample_summary() -> AggregateSummary {
        AggregateSummary::from_records(
            vec![VersionRecord::new(IOS, 14, 5)],
            DateRange::parse("20210701", "20210731").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("table".parse::<OutputMode>().unwrap(), OutputMode::Table);
        assert_eq!("JSON".parse::<OutputMode>().unwrap(), OutputMode::Json);
        assert!("csv".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_render_json() {
        let output =
            render_summary(&sample_summary(), OutputMode::Json, ReportOptions::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["total_users"], 5);
        assert_eq!(parsed["records"][0]["platform"], "iOS");
        assert_eq!(parsed["records"][0]["major_version"], 14);
        assert_eq!(parsed["totals_by_platform"]["iOS"], 5);
        assert_eq!(parsed["date_range"]["start"], "2021-07-01");
    }

    #[test]
    fn test_render_table_propagates_errors() {
        let empty = AggregateSummary::from_records(
            Vec::new(),
            DateRange::parse("20210701", "20210731").unwrap(),
        )
        .unwrap();
        assert!(render_summary(&empty, OutputMode::Table, ReportOptions::new()).is_err());
        assert!(render_summary(&sample_summary(), OutputMode::Table, ReportOptions::new()).is_ok());
    }
}
