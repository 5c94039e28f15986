//! Database layer for the lextrack application.
//!
//! Provides the persistence layer built on SQLite: connection management,
//! versioned schema migrations, and one repository per entity. Repositories
//! expose typed operations returning `anyhow::Result`, treat empty result
//! sets as empty vectors, and report missing rows on update or delete as
//! errors through the message system.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Case Management**: Case records with status and attorney ownership
//! - **Time Tracking**: Billable time log storage with interval validation
//! - **Attorney Roster**: Firm members who own cases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lextrack::db::cases::Cases;
//! use lextrack::libs::case::{Case, CaseStatus};
//!
//! fn demo() -> anyhow::Result<()> {
//!     let mut cases = Cases::new()?;
//!     let case = Case::new("Smith v. Jones", "Acme Insurance", None, CaseStatus::Active);
//!     let id = cases.insert(&case)?;
//!     println!("created case {}", id);
//!     Ok(())
//! }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file, turns on foreign
/// keys, and applies migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// Attorney roster operations.
///
/// The attorneys who own cases, with lookup by id, name, and email.
pub mod attorneys;

/// Case record operations.
///
/// CRUD over legal matters, with attorney-scoped listings. Deleting a case
/// removes its time logs through the cascade.
pub mod cases;

/// Time log operations.
///
/// Insert-and-delete storage for billable intervals; inserts validate the
/// end-after-start invariant before touching the table.
pub mod time_logs;
