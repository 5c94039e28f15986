//! Case entity and status lifecycle.
//!
//! A case is the central record of the application: a legal matter with a
//! client, an optional description, an optional assigned attorney, and a
//! lifecycle status. Time logs attach to cases, and every report or export
//! is ultimately a view over cases and their logged hours.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Lifecycle state of a case.
///
/// Stored as its display text in the database and parsed back on read, so
/// the raw table stays readable with plain SQL tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStatus {
    Active,
    Closed,
    Pending,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "Active",
            CaseStatus::Closed => "Closed",
            CaseStatus::Pending => "Pending",
        }
    }
}

impl Display for CaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CaseStatus::Active),
            "closed" => Ok(CaseStatus::Closed),
            "pending" => Ok(CaseStatus::Pending),
            other => Err(format!("unknown case status '{}'", other)),
        }
    }
}

impl ToSql for CaseStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for CaseStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// A legal matter with a client and an optional assigned attorney.
///
/// `id` and the timestamps are `None` until the record has been inserted;
/// the repository fills them in on read.
#[derive(Debug, Clone)]
pub struct Case {
    pub id: Option<i64>,
    pub title: String,
    pub client_name: String,
    pub description: Option<String>,
    pub status: CaseStatus,
    pub attorney_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Case {
    /// Creates a new unsaved case. Empty descriptions collapse to `None`.
    pub fn new(title: &str, client_name: &str, description: Option<String>, status: CaseStatus) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            client_name: client_name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            status,
            attorney_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Assigns the owning attorney, builder style.
    pub fn with_attorney(mut self, attorney_id: Option<i64>) -> Self {
        self.attorney_id = attorney_id;
        self
    }
}
