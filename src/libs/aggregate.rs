//! Report aggregation over case and time-log snapshots.
//!
//! This module derives everything a report shows from two flat snapshots:
//! the cases in scope and their time logs. Per-case hour totals, status
//! counters, and the grand total are computed here once, then reused by the
//! on-screen report view and by every export format, so the numbers can
//! never drift between surfaces.
//!
//! ```rust
//! use lextrack::libs::aggregate::aggregate_cases;
//! use lextrack::libs::case::{Case, CaseStatus};
//! use lextrack::libs::time_log::{ActivityType, TimeLog};
//! use chrono::NaiveDate;
//!
//! let mut case = Case::new("Smith v. Jones", "Acme Insurance", None, CaseStatus::Active);
//! case.id = Some(1);
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let log = TimeLog::new(
//!     1,
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(11, 15, 0).unwrap(),
//!     ActivityType::Research,
//!     None,
//!     None,
//! );
//!
//! let totals = aggregate_cases(&[case], &[log]);
//! assert_eq!(totals[0].total_hours, 2.25);
//! ```

use crate::libs::case::{Case, CaseStatus};
use crate::libs::filter::PeriodFilter;
use crate::libs::time_log::TimeLog;
use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;

/// A case paired with its total logged hours for one snapshot.
///
/// The total is only meaningful for the log snapshot it was computed from;
/// it is derived data, never stored.
#[derive(Debug, Clone)]
pub struct CaseHours {
    pub case: Case,
    pub total_hours: f64,
}

impl CaseHours {
    /// Whether any hours accrued. Billable cases become export rows;
    /// non-billable ones still appear in listings and counters.
    pub fn is_billable(&self) -> bool {
        self.total_hours > 0.0
    }
}

/// Sums the hours of every log belonging to `case_id`.
pub fn case_total_hours(case_id: i64, logs: &[TimeLog]) -> f64 {
    logs.iter().filter(|log| log.case_id == case_id).map(|log| log.hours()).sum()
}

/// Pairs every case with its total hours, preserving case order.
///
/// Cases without any matching logs get an explicit 0.0 rather than being
/// dropped.
pub fn aggregate_cases(cases: &[Case], logs: &[TimeLog]) -> Vec<CaseHours> {
    cases
        .iter()
        .map(|case| CaseHours {
            case: case.clone(),
            total_hours: case.id.map(|id| case_total_hours(id, logs)).unwrap_or(0.0),
        })
        .collect()
}

/// Snapshot-level counters for the report summary.
#[derive(Debug, Clone, Default)]
pub struct CaseStats {
    pub total_cases: usize,
    pub active_cases: usize,
    pub closed_cases: usize,
    pub pending_cases: usize,
    pub billable_cases: usize,
    pub total_hours: f64,
}

impl CaseStats {
    /// Computes counters from the aggregated cases.
    ///
    /// The grand total is the sum of the per-case totals, so it always
    /// matches the case table it is shown next to. A log whose case is
    /// not in the snapshot contributes nothing here, the same way it
    /// produces no case row.
    pub fn from_snapshot(cases: &[CaseHours]) -> Self {
        let mut stats = CaseStats {
            total_hours: cases.iter().map(|entry| entry.total_hours).sum(),
            ..CaseStats::default()
        };

        for entry in cases {
            stats.total_cases += 1;
            match entry.case.status {
                CaseStatus::Active => stats.active_cases += 1,
                CaseStatus::Closed => stats.closed_cases += 1,
                CaseStatus::Pending => stats.pending_cases += 1,
            }
            if entry.is_billable() {
                stats.billable_cases += 1;
            }
        }

        stats
    }
}

/// Complete report snapshot handed to views and exporters.
///
/// Built once per command from immutable store snapshots: the period filter
/// is applied to the logs, cases are aggregated against the filtered set,
/// and the labels, counters, and title lookup are captured alongside.
#[derive(Debug, Clone)]
pub struct TimeReport {
    pub period_label: String,
    pub period_token: String,
    pub attorney: Option<String>,
    pub generated_at: NaiveDateTime,
    pub cases: Vec<CaseHours>,
    pub logs: Vec<TimeLog>,
    pub stats: CaseStats,
    case_titles: HashMap<i64, String>,
}

impl TimeReport {
    pub fn build(cases: &[Case], logs: &[TimeLog], period: &PeriodFilter, attorney: Option<String>) -> Self {
        let filtered = period.filter_logs(logs);
        let aggregated = aggregate_cases(cases, &filtered);
        let stats = CaseStats::from_snapshot(&aggregated);
        let case_titles = cases
            .iter()
            .filter_map(|case| case.id.map(|id| (id, case.title.clone())))
            .collect();

        TimeReport {
            period_label: period.label(),
            period_token: period.token(),
            attorney,
            generated_at: Local::now().naive_local(),
            cases: aggregated,
            logs: filtered,
            stats,
            case_titles,
        }
    }

    /// Cases that accrued hours in the period, in snapshot order. These
    /// become the exported case-summary rows.
    pub fn billable_cases(&self) -> Vec<&CaseHours> {
        self.cases.iter().filter(|entry| entry.is_billable()).collect()
    }

    /// Resolves a case title for detail rows.
    pub fn case_title(&self, case_id: i64) -> &str {
        self.case_titles.get(&case_id).map(|title| title.as_str()).unwrap_or("Unknown Case")
    }
}
