//! Period and case filtering over in-memory snapshots.
//!
//! Commands fetch full snapshots from the store and narrow them here: time
//! logs by reporting period, cases by status, free-text search, or creation
//! day. Filters never mutate their input; they return fresh vectors in the
//! original order, so a snapshot can be reused across several views.
//!
//! ```rust
//! use lextrack::libs::filter::PeriodFilter;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let period = PeriodFilter::range(start, end);
//!
//! assert_eq!(period.token(), "2024-01-01-to-2024-01-31");
//! assert_eq!(period.label(), "Jan 1, 2024 to Jan 31, 2024");
//! ```

use crate::libs::case::{Case, CaseStatus};
use crate::libs::messages::Message;
use crate::libs::time_log::TimeLog;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Reporting period over time-log start timestamps.
///
/// `All` keeps everything, `Range` spans whole days inclusive on both ends,
/// and `Month` covers one calendar month. A log belongs to a period when its
/// start timestamp falls inside the window; the end may spill past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    Range { start: NaiveDate, end: NaiveDate },
    Month { year: i32, month: u32 },
}

impl PeriodFilter {
    /// Inclusive day range from `start` through `end`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        PeriodFilter::Range { start, end }
    }

    /// Calendar month with a one-based month number.
    ///
    /// Returns `None` when the month is outside 1..=12.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| PeriodFilter::Month { year, month })
    }

    /// Calendar month with a zero-based month index, where 0 is January.
    ///
    /// ```rust
    /// use lextrack::libs::filter::PeriodFilter;
    ///
    /// assert_eq!(
    ///     PeriodFilter::month_index(2024, 0),
    ///     Some(PeriodFilter::Month { year: 2024, month: 1 })
    /// );
    /// assert_eq!(PeriodFilter::month_index(2024, 12), None);
    /// ```
    pub fn month_index(year: i32, index: u32) -> Option<Self> {
        Self::month(year, index + 1)
    }

    /// Resolves command-line arguments into a period.
    ///
    /// A month wins over a date range. A range needs both endpoints;
    /// anything partial or absent falls back to `All`.
    pub fn from_args(from: Option<NaiveDate>, to: Option<NaiveDate>, month: Option<(i32, u32)>) -> Self {
        match (month, from, to) {
            (Some((year, month)), _, _) => PeriodFilter::Month { year, month },
            (None, Some(start), Some(end)) => PeriodFilter::Range { start, end },
            _ => PeriodFilter::All,
        }
    }

    /// The window as timestamps, from the first instant of the first day
    /// through 23:59:59 of the last. `None` means unbounded.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self {
            PeriodFilter::All => None,
            PeriodFilter::Range { start, end } => Some((start.and_hms_opt(0, 0, 0)?, end.and_hms_opt(23, 59, 59)?)),
            PeriodFilter::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(*year, *month, 1)?;
                let (next_year, next_month) = if *month == 12 { (*year + 1, 1) } else { (*year, *month + 1) };
                let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
                Some((first.and_hms_opt(0, 0, 0)?, last.and_hms_opt(23, 59, 59)?))
            }
        }
    }

    /// Whether a timestamp falls inside this period.
    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        match self.bounds() {
            Some((start, end)) => timestamp >= start && timestamp <= end,
            None => true,
        }
    }

    /// Returns the logs whose start timestamp falls inside this period,
    /// preserving input order.
    pub fn filter_logs(&self, logs: &[TimeLog]) -> Vec<TimeLog> {
        logs.iter().filter(|log| self.matches(log.start_time)).cloned().collect()
    }

    /// Filename-safe token identifying the period.
    pub fn token(&self) -> String {
        match self {
            PeriodFilter::All => "all-time".to_string(),
            PeriodFilter::Range { start, end } => {
                format!("{}-to-{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
            }
            PeriodFilter::Month { year, month } => format!("{:04}-{:02}", year, month),
        }
    }

    /// Human-readable period label for report headers.
    pub fn label(&self) -> String {
        match self {
            PeriodFilter::All => "All Time".to_string(),
            PeriodFilter::Range { start, end } => {
                format!("{} to {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
            }
            PeriodFilter::Month { year, month } => match NaiveDate::from_ymd_opt(*year, *month, 1) {
                Some(first) => first.format("%B %Y").to_string(),
                None => format!("{:04}-{:02}", year, month),
            },
        }
    }
}

/// Parses an optional `YYYY-MM-DD` argument.
///
/// `None` and empty strings resolve to `None` (no filtering); anything else
/// must parse or the user gets a format error.
pub fn parse_date_arg(input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(s.to_string()))),
    }
}

/// Parses an optional `YYYY-MM` argument into (year, month).
pub fn parse_month_arg(input: Option<&str>) -> Result<Option<(i32, u32)>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            // Borrow the day-parsing path so month range checks come for free
            let first_day = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
                .map_err(|_| msg_error_anyhow!(Message::InvalidMonthFormat(s.to_string())))?;
            Ok(Some((first_day.year(), first_day.month())))
        }
    }
}

/// Predicate set for narrowing case listings.
///
/// All criteria are optional and combine with AND. The text search is a
/// case-insensitive substring match over title, client name, and
/// description; a case without a description simply cannot match on it.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    pub status: Option<CaseStatus>,
    pub search: Option<String>,
    pub day: Option<NaiveDate>,
}

impl CaseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Option<CaseStatus>) -> Self {
        self.status = status;
        self
    }

    /// Empty or whitespace-only queries are treated as no search at all.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    /// Keeps only cases created on the given day.
    pub fn with_day(mut self, day: Option<NaiveDate>) -> Self {
        self.day = day;
        self
    }

    pub fn matches(&self, case: &Case) -> bool {
        if let Some(status) = self.status {
            if case.status != status {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let in_title = case.title.to_lowercase().contains(&query);
            let in_client = case.client_name.to_lowercase().contains(&query);
            let in_description = case
                .description
                .as_ref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or(false);
            if !(in_title || in_client || in_description) {
                return false;
            }
        }

        if let Some(day) = self.day {
            match case.created_at {
                Some(created) if created.date() == day => {}
                _ => return false,
            }
        }

        true
    }

    /// Returns the matching cases, preserving input order.
    pub fn filter_cases(&self, cases: &[Case]) -> Vec<Case> {
        cases.iter().filter(|case| self.matches(case)).cloned().collect()
    }
}
