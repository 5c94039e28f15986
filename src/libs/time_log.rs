//! Time log entity and activity categories.

use crate::libs::formatter::{format_hours_between, hours_between};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Billing category of a time log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActivityType {
    Consultation,
    Research,
    CourtTime,
    Drafting,
    Administrative,
    #[default]
    Other,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Consultation => "Consultation",
            ActivityType::Research => "Research",
            ActivityType::CourtTime => "Court Time",
            ActivityType::Drafting => "Drafting",
            ActivityType::Administrative => "Administrative",
            ActivityType::Other => "Other",
        }
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consultation" => Ok(ActivityType::Consultation),
            "research" => Ok(ActivityType::Research),
            "court time" | "court-time" => Ok(ActivityType::CourtTime),
            "drafting" => Ok(ActivityType::Drafting),
            "administrative" => Ok(ActivityType::Administrative),
            "other" => Ok(ActivityType::Other),
            other => Err(format!("unknown activity type '{}'", other)),
        }
    }
}

impl ToSql for ActivityType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ActivityType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// A single billable interval attached to one case.
///
/// Time logs are immutable once recorded: the application creates and
/// deletes them but never edits one in place. The end timestamp must be
/// strictly after the start; the repository rejects anything else before
/// touching the database.
#[derive(Debug, Clone)]
pub struct TimeLog {
    pub id: Option<i64>,
    pub case_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub activity_type: ActivityType,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl TimeLog {
    /// Creates a new unsaved time log. Empty optional text collapses to `None`.
    pub fn new(
        case_id: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        activity_type: ActivityType,
        description: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            case_id,
            start_time,
            end_time,
            activity_type,
            description: description.filter(|s| !s.trim().is_empty()),
            notes: notes.filter(|s| !s.trim().is_empty()),
            created_at: None,
        }
    }

    /// Length of this entry in fractional hours.
    pub fn hours(&self) -> f64 {
        hours_between(self.start_time, self.end_time)
    }

    /// Length of this entry as an "Xh Ym" display string.
    pub fn duration(&self) -> String {
        format_hours_between(self.start_time, self.end_time)
    }
}
