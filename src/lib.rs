//! # Lextrack - Legal Time Tracking
//!
//! A command-line utility for managing legal cases, logging billable
//! time, and exporting billing-ready reports.
//!
//! ## Features
//!
//! - **Case Management**: Open, edit, and close legal matters per client
//! - **Time Tracking**: Record billable intervals against cases
//! - **Attorney Roster**: Assign cases to the firm's attorneys
//! - **Report Generation**: Period-filtered hour totals per case
//! - **Data Export**: Export reports to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lextrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
