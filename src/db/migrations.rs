//! Database schema migration management and versioning.
//!
//! Evolves the database schema over time while keeping existing data intact.
//! Migrations are the only place schema is created or changed; repositories
//! assume the tables exist and never issue their own DDL.
//!
//! ## Features
//!
//! - **Version Tracking**: Applied migrations are recorded in a `migrations` table
//! - **Automatic Application**: Pending migrations run when the database opens
//! - **Transaction Safety**: All pending migrations apply within one transaction
//! - **Rollback Support**: Development-time rollback (debug builds only)
//!
//! ## Usage
//!
//! ```rust
//! use lextrack::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory().unwrap();
//! init_with_migrations(&mut conn).unwrap();
//! let version = get_db_version(&conn).unwrap();
//! assert!(version > 0);
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
///
/// Each applied migration is recorded with its version, name, and
/// application timestamp, giving an audit trail of schema changes.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation logic.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations and the logic to apply them in order.
///
/// Designed for single-threaded use while the database opens; concurrent
/// migration attempts should be avoided.
pub struct MigrationManager {
    /// Ordered list of all available migrations
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Creates a manager with every known migration registered.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    ///
    /// This is the complete schema history of the application. Versions are
    /// append-only: released migrations are never edited, new changes get a
    /// new version.
    fn register_migrations(&mut self) {
        // Version 1: Cases and time logs with their lookup indices
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS cases (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    client_name TEXT NOT NULL,
                    description TEXT,
                    status TEXT NOT NULL DEFAULT 'Active',
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS time_logs (
                    id INTEGER PRIMARY KEY,
                    case_id INTEGER NOT NULL,
                    start_time TIMESTAMP NOT NULL,
                    end_time TIMESTAMP NOT NULL,
                    activity_type TEXT NOT NULL DEFAULT 'Other',
                    description TEXT,
                    notes TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (case_id) REFERENCES cases(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Status and creation-date lookups drive the case list filters
            tx.execute("CREATE INDEX IF NOT EXISTS idx_cases_status ON cases(status)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_cases_created_at ON cases(created_at)", [])?;
            // Per-case and period lookups over time logs
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_logs_case_id ON time_logs(case_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_logs_start_time ON time_logs(start_time)", [])?;

            Ok(())
        });

        // Version 2: Attorney roster and case ownership
        self.add_migration(2, "add_attorneys", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS attorneys (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    title TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            // Deleting an attorney keeps their cases, unassigned
            tx.execute(
                "ALTER TABLE cases ADD COLUMN attorney_id INTEGER REFERENCES attorneys(id) ON DELETE SET NULL",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_cases_attorney_id ON cases(attorney_id)", [])?;

            Ok(())
        });

        // Version 3: Active flag so departed attorneys stay in history
        self.add_migration(3, "add_attorney_active_flag", |tx| {
            tx.execute("ALTER TABLE attorneys ADD COLUMN is_active BOOLEAN NOT NULL DEFAULT 1", [])?;
            Ok(())
        });
    }

    /// Adds a migration to the internal registry.
    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in version order.
    ///
    /// Creates the tracking table if needed, determines the current version,
    /// and applies everything newer inside a single transaction. A failing
    /// migration aborts the whole batch, leaving the previous schema.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database schema is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied migration version, or 0 for a fresh database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Rolls the recorded version back to `target_version` (debug builds only).
    ///
    /// Removes migration records without reversing schema changes; there are
    /// no down() functions. Useful in tests to force a re-run.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));

        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

/// Applies all pending migrations to a connection.
///
/// The recommended way to bring a database up to date; `Db::new` calls this
/// on every open.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version of a database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}
