//! Aggregated usage data.
//!
//! Raw report lines are folded into one [`VersionRecord`] per
//! `(platform, major version)` key. An [`AggregateSummary`] holds those
//! records together with the derived totals and the report's date range.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::FdrError;
use crate::Result;

use super::date::DateRange;

/// Platform tag used by iOS records.
pub const IOS: &str = "iOS";

/// Platform tag used by Android records.
pub const ANDROID: &str = "Android";

/// User count for one platform's major OS version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Platform name as it appears in the report (e.g. "iOS")
    pub platform: String,
    /// Integer before the first `.` of the version string
    pub major_version: u32,
    /// Number of users on this version
    pub user_count: u64,
}

impl VersionRecord {
    pub fn new(platform: impl Into<String>, major_version: u32, user_count: u64) -> Self {
        Self {
            platform: platform.into(),
            major_version,
            user_count,
        }
    }

    /// Label shown in the "OS version" column, e.g. "iOS 14".
    pub fn label(&self) -> String {
        format!("{} {}", self.platform, self.major_version)
    }
}

/// Result of aggregating a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// One record per (platform, major version), sorted descending by
    /// platform then by major version
    pub records: Vec<VersionRecord>,
    /// Sum of all record counts
    pub total_users: u64,
    /// Sum of record counts per platform
    pub totals_by_platform: BTreeMap<String, u64>,
    /// Period covered by the report
    pub date_range: DateRange,
}

impl AggregateSummary {
    /// Build a summary from raw (possibly repeated) records.
    ///
    /// Records are merged by key, totals are derived and the result is
    /// sorted. Fails with [`FdrError::CountOverflow`] if any sum exceeds
    /// `u64::MAX`.
    pub fn from_records(
        records: impl IntoIterator<Item = VersionRecord>,
        date_range: DateRange,
    ) -> Result<Self> {
        let records = aggregate_records(records)?;

        let mut totals_by_platform: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_users: u64 = 0;
        for record in &records {
            let platform_total = totals_by_platform
                .entry(record.platform.clone())
                .or_default();
            *platform_total = add_count(*platform_total, record.user_count, &record.platform)?;
            total_users = add_count(total_users, record.user_count, "all users")?;
        }

        Ok(AggregateSummary {
            records,
            total_users,
            totals_by_platform,
            date_range,
        })
    }

    /// Total users on a platform (zero if the platform never appeared).
    pub fn platform_total(&self, platform: &str) -> u64 {
        self.totals_by_platform.get(platform).copied().unwrap_or(0)
    }

    pub fn ios_users(&self) -> u64 {
        self.platform_total(IOS)
    }

    pub fn android_users(&self) -> u64 {
        self.platform_total(ANDROID)
    }

    /// Share of all users on `platform`, in percent.
    ///
    /// Fails with [`FdrError::DivisionByZero`] when the summary has no users.
    pub fn platform_percent(&self, platform: &str) -> Result<f64> {
        percent(self.platform_total(platform), self.total_users, "total user count")
    }

    /// [`platform_percent`](Self::platform_percent) rounded to `precision` digits.
    pub fn platform_percent_rounded(&self, platform: &str, precision: u32) -> Result<f64> {
        self.platform_percent(platform)
            .map(|value| round_to(value, precision))
    }

    /// Records belonging to `platform`, in summary order.
    pub fn records_for<'a>(
        &'a self,
        platform: &'a str,
    ) -> impl Iterator<Item = &'a VersionRecord> + 'a {
        self.records.iter().filter(move |r| r.platform == platform)
    }
}

/// Merge records sharing a `(platform, major_version)` key and sort them.
///
/// Counts of repeated keys are summed. Keys keep their first-seen order
/// until the final stable sort, which orders descending by platform and then
/// descending by major version. Running this on its own output returns the
/// same list.
pub fn aggregate_records(
    records: impl IntoIterator<Item = VersionRecord>,
) -> Result<Vec<VersionRecord>> {
    let mut merged: Vec<VersionRecord> = Vec::new();
    let mut index: HashMap<(String, u32), usize> = HashMap::new();

    for record in records {
        let key = (record.platform.clone(), record.major_version);
        match index.get(&key) {
            Some(&i) => {
                let entry = &mut merged[i];
                entry.user_count = entry
                    .user_count
                    .checked_add(record.user_count)
                    .ok_or_else(|| FdrError::CountOverflow {
                        label: entry.label(),
                    })?;
            }
            None => {
                index.insert(key, merged.len());
                merged.push(record);
            }
        }
    }

    merged.sort_by(|a, b| {
        b.platform
            .cmp(&a.platform)
            .then_with(|| b.major_version.cmp(&a.major_version))
    });
    Ok(merged)
}

fn add_count(total: u64, count: u64, label: &str) -> Result<u64> {
    total
        .checked_add(count)
        .ok_or_else(|| FdrError::CountOverflow {
            label: label.to_string(),
        })
}

/// `100 * part / whole`, refusing a zero `whole`.
///
/// `what` names the denominator in the error message.
pub fn percent(part: u64, whole: u64, what: &str) -> Result<f64> {
    if whole == 0 {
        return Err(FdrError::DivisionByZero {
            what: what.to_string(),
        });
    }
    Ok(part as f64 * 100.0 / whole as f64)
}

/// Largest precision [`round_to`] acts on; an f64 has no further digits.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `precision` fractional digits, halves away from zero.
///
/// Precisions above [`MAX_PRECISION`], and values too large to scale, are
/// returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = match i32::try_from(precision) {
        Ok(exponent) if precision <= MAX_PRECISION => 10f64.powi(exponent),
        _ => return value,
    };
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_range() -> DateRange {
        DateRange::parse("20210701", "20210731").unwrap()
    }

    #[test]
    fn test_aggregate_records_merges_keys() {
        let records = aggregate_records(vec![
            VersionRecord::new(IOS, 12, 1487),
            VersionRecord::new(IOS, 12, 13),
            VersionRecord::new(ANDROID, 4, 1),
        ])
        .unwrap();

        assert_eq!(
            records,
            vec![VersionRecord::new(IOS, 12, 1500), VersionRecord::new(ANDROID, 4, 1)]
        );
    }

    #[test]
    fn test_aggregate_records_ordering() {
        let records = aggregate_records(vec![
            VersionRecord::new(ANDROID, 9, 5),
            VersionRecord::new(IOS, 13, 7),
            VersionRecord::new(ANDROID, 11, 2),
            VersionRecord::new(IOS, 14, 3),
            VersionRecord::new(ANDROID, 10, 8),
        ])
        .unwrap();

        let keys: Vec<(&str, u32)> = records
            .iter()
            .map(|r| (r.platform.as_str(), r.major_version))
            .collect();
        assert_eq!(
            keys,
            vec![
                (IOS, 14),
                (IOS, 13),
                (ANDROID, 11),
                (ANDROID, 10),
                (ANDROID, 9)
            ]
        );
    }

    #[test]
    fn test_aggregate_records_is_idempotent() {
        let once = aggregate_records(vec![
            VersionRecord::new(ANDROID, 10, 4),
            VersionRecord::new(IOS, 14, 3),
            VersionRecord::new(ANDROID, 10, 6),
            VersionRecord::new(IOS, 12, 1),
        ])
        .unwrap();
        let twice = aggregate_records(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_summary_totals() {
        let summary = AggregateSummary::from_records(
            vec![
                VersionRecord::new(IOS, 12, 1487),
                VersionRecord::new(IOS, 12, 13),
                VersionRecord::new(ANDROID, 4, 1),
            ],
            sample_range(),
        )
        .unwrap();

        assert_eq!(summary.total_users, 1501);
        assert_eq!(summary.ios_users(), 1500);
        assert_eq!(summary.android_users(), 1);
        assert_eq!(summary.platform_total("Windows"), 0);
        assert_eq!(summary.records_for(IOS).count(), 1);
    }

    #[test]
    fn test_platform_percent() {
        let summary = AggregateSummary::from_records(
            vec![
                VersionRecord::new(IOS, 14, 3),
                VersionRecord::new(ANDROID, 11, 1),
            ],
            sample_range(),
        )
        .unwrap();

        assert_eq!(summary.platform_percent(IOS).unwrap(), 75.0);
        assert_eq!(summary.platform_percent(ANDROID).unwrap(), 25.0);
        assert_eq!(summary.platform_percent("Windows").unwrap(), 0.0);
    }

    #[test]
    fn test_platform_percent_rounded() {
        let summary = AggregateSummary::from_records(
            vec![
                VersionRecord::new(IOS, 14, 1),
                VersionRecord::new(ANDROID, 11, 2),
            ],
            sample_range(),
        )
        .unwrap();

        assert_eq!(summary.platform_percent_rounded(IOS, 1).unwrap(), 33.3);
        assert_eq!(summary.platform_percent_rounded(ANDROID, 2).unwrap(), 66.67);
    }

    #[test]
    fn test_percent_of_empty_summary_fails() {
        let summary = AggregateSummary::from_records(Vec::new(), sample_range()).unwrap();

        assert_eq!(summary.total_users, 0);
        assert!(summary.records.is_empty());
        assert!(matches!(
            summary.platform_percent(IOS),
            Err(FdrError::DivisionByZero { .. })
        ));
        assert!(matches!(
            summary.platform_percent_rounded(ANDROID, 1),
            Err(FdrError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(50.05, 1), 50.1);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-0.05, 1), -0.1);
        assert_eq!(round_to(33.333333, 2), 33.33);
        assert_eq!(round_to(7.0, 3), 7.0);
    }

    #[test]
    fn test_round_to_out_of_range_precision() {
        assert_eq!(round_to(75.0, 400), 75.0);
        assert_eq!(round_to(1.0 / 3.0, 16), 1.0 / 3.0);
        assert_eq!(round_to(2.0 / 3.0, 3_000_000_000), 2.0 / 3.0);
        assert_eq!(round_to(1e300, 15), 1e300);
        assert!(round_to(100.0 / 3.0, MAX_PRECISION).is_finite());
    }

    #[test]
    fn test_merge_overflow_fails() {
        let result = aggregate_records(vec![
            VersionRecord::new(IOS, 14, u64::MAX),
            VersionRecord::new(IOS, 14, 1),
        ]);
        match result {
            Err(FdrError::CountOverflow { label }) => assert_eq!(label, "iOS 14"),
            other => panic!("expected CountOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_total_overflow_fails() {
        let same_platform = AggregateSummary::from_records(
            vec![
                VersionRecord::new(ANDROID, 11, u64::MAX),
                VersionRecord::new(ANDROID, 10, 1),
            ],
            sample_range(),
        );
        match same_platform {
            Err(FdrError::CountOverflow { label }) => assert_eq!(label, ANDROID),
            other => panic!("expected CountOverflow, got {other:?}"),
        }

        let across_platforms = AggregateSummary::from_records(
            vec![
                VersionRecord::new(IOS, 14, u64::MAX),
                VersionRecord::new(ANDROID, 11, 1),
            ],
            sample_range(),
        );
        match across_platforms {
            Err(FdrError::CountOverflow { label }) => assert_eq!(label, "all users"),
            other => panic!("expected CountOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_record_label() {
        assert_eq!(VersionRecord::new(IOS, 12, 1).label(), "iOS 12");
    }
}
