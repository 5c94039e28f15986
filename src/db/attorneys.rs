use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_ATTORNEY: &str = "INSERT INTO attorneys (name, email, title, is_active, created_at)
    VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const UPDATE_ATTORNEY: &str = "UPDATE attorneys SET name = ?2, email = ?3, title = ?4, is_active = ?5 WHERE id = ?1";
const DELETE_ATTORNEY: &str = "DELETE FROM attorneys WHERE id = ?1";
const SELECT_ALL_ATTORNEYS: &str = "SELECT id, name, email, title, is_active, created_at FROM attorneys ORDER BY name";
const SELECT_ATTORNEY_BY_ID: &str = "SELECT id, name, email, title, is_active, created_at FROM attorneys WHERE id = ?1";
const SELECT_ATTORNEY_BY_NAME: &str = "SELECT id, name, email, title, is_active, created_at FROM attorneys WHERE name = ?1";
const SELECT_ATTORNEY_BY_EMAIL: &str = "SELECT id, name, email, title, is_active, created_at FROM attorneys WHERE email = ?1";

/// A member of the firm who can own cases.
///
/// Attorneys are never deleted out from under their history lightly:
/// deactivating via `is_active` keeps them out of pickers while their past
/// cases stay attributed.
#[derive(Debug, Clone)]
pub struct Attorney {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl Attorney {
    pub fn new(name: &str, email: &str, title: Option<String>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            title: title.filter(|t| !t.trim().is_empty()),
            is_active: true,
            created_at: None,
        }
    }
}

pub struct Attorneys {
    conn: Connection,
}

impl Attorneys {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a new attorney and return their id
    pub fn insert(&mut self, attorney: &Attorney) -> Result<i64> {
        self.conn.execute(
            INSERT_ATTORNEY,
            params![attorney.name, attorney.email, attorney.title, attorney.is_active],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing attorney
    pub fn update(&mut self, id: i64, attorney: &Attorney) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_ATTORNEY,
            params![id, attorney.name, attorney.email, attorney.title, attorney.is_active],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::AttorneyNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Delete an attorney; their cases stay, unassigned
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_ATTORNEY, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::AttorneyNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Get all attorneys ordered by name
    pub fn list(&mut self) -> Result<Vec<Attorney>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_ATTORNEYS)?;
        let attorney_iter = stmt.query_map([], map_attorney)?;

        let mut attorneys = Vec::new();
        for attorney in attorney_iter {
            attorneys.push(attorney?);
        }
        Ok(attorneys)
    }

    /// Get an attorney by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Attorney>> {
        self.conn
            .query_row(SELECT_ATTORNEY_BY_ID, params![id], map_attorney)
            .optional()
            .map_err(Into::into)
    }

    /// Get an attorney by exact name
    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Attorney>> {
        self.conn
            .query_row(SELECT_ATTORNEY_BY_NAME, params![name], map_attorney)
            .optional()
            .map_err(Into::into)
    }

    /// Get an attorney by email
    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Attorney>> {
        self.conn
            .query_row(SELECT_ATTORNEY_BY_EMAIL, params![email], map_attorney)
            .optional()
            .map_err(Into::into)
    }
}

fn map_attorney(row: &Row) -> rusqlite::Result<Attorney> {
    Ok(Attorney {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        title: row.get(3)?,
        is_active: row.get(4)?,
        created_at: row.get(5)?,
    })
}
