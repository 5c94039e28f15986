//! Time log repository.
//!
//! Entries are create-and-delete only; there is no update path. The
//! end-after-start invariant is enforced here, before any SQL runs, so an
//! invalid interval can never reach the table regardless of which command
//! produced it.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::time_log::TimeLog;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_LOG: &str = "INSERT INTO time_logs (case_id, start_time, end_time, activity_type, description, notes, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const DELETE_LOG: &str = "DELETE FROM time_logs WHERE id = ?1";
const SELECT_ALL_LOGS: &str = "SELECT id, case_id, start_time, end_time, activity_type, description, notes, created_at
    FROM time_logs ORDER BY start_time, id";
const SELECT_LOG_BY_ID: &str = "SELECT id, case_id, start_time, end_time, activity_type, description, notes, created_at
    FROM time_logs WHERE id = ?1";
const SELECT_LOGS_BY_CASE: &str = "SELECT id, case_id, start_time, end_time, activity_type, description, notes, created_at
    FROM time_logs WHERE case_id = ?1 ORDER BY start_time DESC, id DESC";

pub struct TimeLogs {
    conn: Connection,
}

impl TimeLogs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a new time log and return its id.
    ///
    /// Rejects intervals whose end is not strictly after the start.
    pub fn insert(&mut self, log: &TimeLog) -> Result<i64> {
        if log.end_time <= log.start_time {
            return Err(msg_error_anyhow!(Message::TimeLogEndBeforeStart));
        }

        self.conn.execute(
            INSERT_LOG,
            params![log.case_id, log.start_time, log.end_time, log.activity_type, log.description, log.notes],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete a time log
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_LOG, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TimeLogNotFound(id)));
        }
        Ok(())
    }

    /// Get all time logs in chronological order
    pub fn list(&mut self) -> Result<Vec<TimeLog>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_LOGS)?;
        let log_iter = stmt.query_map([], map_time_log)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }
        Ok(logs)
    }

    /// Get one case's time logs, newest first
    pub fn list_by_case(&mut self, case_id: i64) -> Result<Vec<TimeLog>> {
        let mut stmt = self.conn.prepare(SELECT_LOGS_BY_CASE)?;
        let log_iter = stmt.query_map(params![case_id], map_time_log)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }
        Ok(logs)
    }

    /// Get a time log by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<TimeLog>> {
        self.conn
            .query_row(SELECT_LOG_BY_ID, params![id], map_time_log)
            .optional()
            .map_err(Into::into)
    }
}

fn map_time_log(row: &Row) -> rusqlite::Result<TimeLog> {
    Ok(TimeLog {
        id: row.get(0)?,
        case_id: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        activity_type: row.get(4)?,
        description: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}
