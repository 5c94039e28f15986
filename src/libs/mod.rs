//! Core library modules for the lextrack application.
//!
//! Serves as the main entry point for all lextrack library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Model**: Cases, time logs, status and activity vocabularies
//! - **Reporting**: Period filtering, hour aggregation, report snapshots
//! - **User Interface**: Console tables, data export, duration formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lextrack::db::cases::Cases;
//! use lextrack::libs::case::{Case, CaseStatus};
//!
//! fn run() -> anyhow::Result<()> {
//!     let case = Case::new("Smith v. Jones", "Acme Insurance", None, CaseStatus::Active);
//!     let mut cases_db = Cases::new()?;
//!     cases_db.insert(&case)?;
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod case;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod time_log;
pub mod view;
