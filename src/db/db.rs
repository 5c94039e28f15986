//! Database connection management.
//!
//! `Db` is the single entry point to the SQLite file in the user's data
//! directory. Opening a connection enables foreign-key enforcement (time
//! logs cascade with their case, attorney references null out) and applies
//! any pending schema migrations, so repositories can assume the current
//! schema without creating tables themselves.

use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

const DB_FILE_NAME: &str = "lextrack.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database, creating and migrating it on demand.
    pub fn new() -> Result<Self> {
        let db_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_path)?;

        // SQLite leaves foreign keys off per connection
        conn.pragma_update(None, "foreign_keys", "ON")?;

        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
