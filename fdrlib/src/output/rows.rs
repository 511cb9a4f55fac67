//! Row adapters turning aggregated records into table cells.
//!
//! Percentages are computed when an adapter is built, so a zero total is
//! reported up front and [`Row::entries`] never fails.

use crate::data::summary::{percent, AggregateSummary, VersionRecord, ANDROID, IOS};

use super::entry::{Row, RowEntry};

/// Column titles of the combined view.
pub const COMBINED_TITLES: [&str; 5] = [
    "OS version",
    "Users",
    "% of all users",
    "% of iOS",
    "% of Android",
];

/// Column titles of a per-platform view.
pub const SPLIT_TITLES: [&str; 3] = ["OS version", "Users", "%"];

/// Which platform column of the combined view a record fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformColumn {
    Ios,
    Android,
}

/// A record in the combined five-column view.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    label: String,
    users: u64,
    share_of_all: f64,
    share_of_platform: f64,
    column: PlatformColumn,
}

impl CombinedRow {
    /// Build the row for an iOS or Android record.
    ///
    /// Returns `Ok(None)` for any other platform.
    pub fn new(record: &VersionRecord, summary: &AggregateSummary) -> crate::Result<Option<Self>> {
        let column = match record.platform.as_str() {
            IOS => PlatformColumn::Ios,
            ANDROID => PlatformColumn::Android,
            _ => return Ok(None),
        };

        let platform_total = summary.platform_total(&record.platform);
        Ok(Some(Self {
            label: record.label(),
            users: record.user_count,
            share_of_all: percent(record.user_count, summary.total_users, "total user count")?,
            share_of_platform: percent(
                record.user_count,
                platform_total,
                &format!("{} user count", record.platform),
            )?,
            column,
        }))
    }
}

impl Row for CombinedRow {
    fn entries(&self) -> Vec<RowEntry> {
        let share = RowEntry::Float(self.share_of_platform);
        let (ios, android) = match self.column {
            PlatformColumn::Ios => (share, RowEntry::Empty),
            PlatformColumn::Android => (RowEntry::Empty, share),
        };
        vec![
            RowEntry::Text(self.label.clone()),
            RowEntry::from(self.users),
            RowEntry::Float(self.share_of_all),
            ios,
            android,
        ]
    }
}

/// A record in a single-platform three-column view.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRow {
    label: String,
    users: u64,
    share_of_platform: f64,
}

impl SplitRow {
    pub fn new(record: &VersionRecord, summary: &AggregateSummary) -> crate::Result<Self> {
        Ok(Self {
            label: record.label(),
            users: record.user_count,
            share_of_platform: percent(
                record.user_count,
                summary.platform_total(&record.platform),
                &format!("{} user count", record.platform),
            )?,
        })
    }
}

impl Row for SplitRow {
    fn entries(&self) -> Vec<RowEntry> {
        vec![
            RowEntry::Text(self.label.clone()),
            RowEntry::from(self.users),
            RowEntry::Float(self.share_of_platform),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::date::DateRange;
    use crate::error::FdrError;

    fn sample_summary(records: Vec<VersionRecord>) -> AggregateSummary {
        AggregateSummary::from_records(records, DateRange::parse("20210701", "20210731").unwrap())
            .unwrap()
    }

    #[test]
    fn test_combined_row_ios() {
        let summary = sample_summary(vec![
            VersionRecord::new(IOS, 14, 30),
            VersionRecord::new(IOS, 13, 10),
            VersionRecord::new(ANDROID, 11, 60),
        ]);
        let row = CombinedRow::new(&summary.records[0], &summary)
            .unwrap()
            .unwrap();

        assert_eq!(
            row.entries(),
            vec![
                RowEntry::from("iOS 14"),
                RowEntry::Integer(30),
                RowEntry::Float(30.0),
                RowEntry::Float(75.0),
                RowEntry::Empty,
            ]
        );
        assert_eq!(row.entries().len(), COMBINED_TITLES.len());
    }

    #[test]
    fn test_combined_row_android() {
        let summary = sample_summary(vec![
            VersionRecord::new(IOS, 14, 50),
            VersionRecord::new(ANDROID, 11, 25),
            VersionRecord::new(ANDROID, 10, 25),
        ]);
        let android = summary.records_for(ANDROID).next().unwrap();
        let row = CombinedRow::new(android, &summary).unwrap().unwrap();

        assert_eq!(
            row.entries(),
            vec![
                RowEntry::from("Android 11"),
                RowEntry::Integer(25),
                RowEntry::Float(25.0),
                RowEntry::Empty,
                RowEntry::Float(50.0),
            ]
        );
    }

    #[test]
    fn test_combined_row_skips_other_platforms() {
        let summary = sample_summary(vec![VersionRecord::new("Windows", 10, 5)]);
        assert!(CombinedRow::new(&summary.records[0], &summary)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_split_row() {
        let summary = sample_summary(vec![
            VersionRecord::new(IOS, 14, 3),
            VersionRecord::new(IOS, 13, 1),
            VersionRecord::new(ANDROID, 11, 96),
        ]);
        let row = SplitRow::new(&summary.records[1], &summary).unwrap();

        assert_eq!(
            row.entries(),
            vec![RowEntry::from("iOS 13"), RowEntry::Integer(1), RowEntry::Float(25.0)]
        );
        assert_eq!(row.entries().len(), SPLIT_TITLES.len());
    }

    #[test]
    fn test_zero_platform_total_fails() {
        let summary = sample_summary(vec![
            VersionRecord::new(IOS, 14, 0),
            VersionRecord::new(ANDROID, 11, 4),
        ]);
        let ios = &summary.records[0];

        assert!(matches!(
            SplitRow::new(ios, &summary),
            Err(FdrError::DivisionByZero { .. })
        ));
        assert!(matches!(
            CombinedRow::new(ios, &summary),
            Err(FdrError::DivisionByZero { .. })
        ));
    }
}
