use crate::db::db::Db;
use crate::libs::case::Case;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_CASE: &str = "INSERT INTO cases (title, client_name, description, status, attorney_id, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, datetime(CURRENT_TIMESTAMP, 'localtime'), datetime(CURRENT_TIMESTAMP, 'localtime'))";
const UPDATE_CASE: &str = "UPDATE cases SET title = ?2, client_name = ?3, description = ?4, status = ?5, attorney_id = ?6,
    updated_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE id = ?1";
const DELETE_CASE: &str = "DELETE FROM cases WHERE id = ?1";
const SELECT_ALL_CASES: &str = "SELECT id, title, client_name, description, status, attorney_id, created_at, updated_at
    FROM cases ORDER BY created_at DESC, id DESC";
const SELECT_CASE_BY_ID: &str = "SELECT id, title, client_name, description, status, attorney_id, created_at, updated_at
    FROM cases WHERE id = ?1";
const SELECT_CASES_BY_ATTORNEY: &str = "SELECT id, title, client_name, description, status, attorney_id, created_at, updated_at
    FROM cases WHERE attorney_id = ?1 ORDER BY created_at DESC, id DESC";

pub struct Cases {
    conn: Connection,
}

impl Cases {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a new case and return its id
    pub fn insert(&mut self, case: &Case) -> Result<i64> {
        self.conn.execute(
            INSERT_CASE,
            params![case.title, case.client_name, case.description, case.status, case.attorney_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing case
    pub fn update(&mut self, id: i64, case: &Case) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_CASE,
            params![id, case.title, case.client_name, case.description, case.status, case.attorney_id],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CaseNotFound(id)));
        }
        Ok(())
    }

    /// Delete a case; its time logs cascade with it
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_CASE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CaseNotFound(id)));
        }
        Ok(())
    }

    /// Get all cases, newest first
    pub fn list(&mut self) -> Result<Vec<Case>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CASES)?;
        let case_iter = stmt.query_map([], map_case)?;

        let mut cases = Vec::new();
        for case in case_iter {
            cases.push(case?);
        }
        Ok(cases)
    }

    /// Get the cases assigned to one attorney, newest first
    pub fn list_by_attorney(&mut self, attorney_id: i64) -> Result<Vec<Case>> {
        let mut stmt = self.conn.prepare(SELECT_CASES_BY_ATTORNEY)?;
        let case_iter = stmt.query_map(params![attorney_id], map_case)?;

        let mut cases = Vec::new();
        for case in case_iter {
            cases.push(case?);
        }
        Ok(cases)
    }

    /// Get a case by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Case>> {
        self.conn
            .query_row(SELECT_CASE_BY_ID, params![id], map_case)
            .optional()
            .map_err(Into::into)
    }
}

fn map_case(row: &Row) -> rusqlite::Result<Case> {
    Ok(Case {
        id: row.get(0)?,
        title: row.get(1)?,
        client_name: row.get(2)?,
        description: row.get(3)?,
        status: row.get(4)?,
        attorney_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
