//! Display implementation for lextrack application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into the human-readable text shown
//! in the terminal. It is the single place where user-facing wording lives, so
//! every prompt, confirmation, and error reads consistently across commands.
//!
//! ## Message Categories
//!
//! The implementation covers these categories:
//! - **Case Messages**: Case management, creation, updates, and deletion
//! - **Time Log Messages**: Billable time entry recording and validation
//! - **Attorney Messages**: Attorney roster management
//! - **Validation Messages**: Rejected user input with the expected format
//! - **Report Messages**: On-screen report and case detail headers
//! - **Export Messages**: Report file generation status
//! - **Configuration Messages**: Setup wizard prompts and results
//! - **General Messages**: Shared confirmations and cancellations
//! - **Migration Messages**: Database schema evolution progress
//!
//! ## Text Standards
//!
//! - **Sentence Case**: Natural capitalization for readability
//! - **Active Voice**: Clear, direct communication style
//! - **Specific Details**: Identifiers and names are interpolated into the text
//! - **Format Hints**: Validation failures state the expected input format
//!
//! ## Usage Integration
//!
//! The display system integrates with the messaging macros:
//! ```rust
//! use lextrack::{msg_error, msg_success};
//! use lextrack::libs::messages::Message;
//!
//! msg_success!(Message::CaseCreated("Smith v. Jones".to_string()));
//! msg_error!(Message::TimeLogEndBeforeStart);
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// Each variant is handled explicitly, so adding a message forces a
    /// wording decision here. Parameterized variants interpolate their
    /// values with `format!`; static variants return fixed text.
    ///
    /// # Arguments
    ///
    /// * `f` - The formatter for writing the text output
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the message was successfully formatted.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CASE MESSAGES ===
            Message::CaseCreated(title) => format!("Case '{}' created successfully", title),
            Message::CaseUpdated(title) => format!("Case '{}' updated successfully", title),
            Message::CaseDeleted(id) => format!("Case {} and its time logs deleted", id),
            Message::CaseNotFound(id) => format!("Case with ID {} not found", id),
            Message::NoCasesFound => "No cases found".to_string(),
            Message::CaseListHeader => "Cases:".to_string(),
            Message::EditingCase(title) => format!("Editing case: {}", title),
            Message::SelectCaseAction => "What would you like to do?".to_string(),
            Message::ConfirmDeleteCase(title) => format!("Delete case '{}' and all of its time logs?", title),
            Message::PromptCaseTitle => "Case title".to_string(),
            Message::PromptClientName => "Client name".to_string(),
            Message::PromptCaseDescription => "Description (leave empty to skip)".to_string(),
            Message::PromptCaseStatus => "Case status".to_string(),
            Message::PromptSelectCase => "Select a case".to_string(),
            Message::PromptAssignAttorney => "Assign attorney".to_string(),

            // === TIME LOG MESSAGES ===
            Message::TimeLogCreated(duration) => format!("Time log recorded ({})", duration),
            Message::TimeLogDeleted(id) => format!("Time log {} deleted", id),
            Message::TimeLogNotFound(id) => format!("Time log with ID {} not found", id),
            Message::NoTimeLogsFound => "No time logs found".to_string(),
            Message::TimeLogListHeader => "Time logs:".to_string(),
            Message::SelectTimeLogAction => "What would you like to do?".to_string(),
            Message::TimeLogEndBeforeStart => "End time must be after start time".to_string(),
            Message::ConfirmDeleteTimeLog(id) => format!("Delete time log {}?", id),
            Message::PromptLogDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTimeLogId => "Time log ID".to_string(),
            Message::PromptStartTime => "Start time (HH:MM)".to_string(),
            Message::PromptEndTime => "End time (HH:MM)".to_string(),
            Message::PromptActivityType => "Activity type".to_string(),
            Message::PromptLogDescription => "Description (leave empty to skip)".to_string(),
            Message::PromptLogNotes => "Notes (leave empty to skip)".to_string(),

            // === ATTORNEY MESSAGES ===
            Message::AttorneyCreated(name) => format!("Attorney '{}' added successfully", name),
            Message::AttorneyUpdated(name) => format!("Attorney '{}' updated successfully", name),
            Message::AttorneyDeleted(id) => format!("Attorney {} deleted", id),
            Message::AttorneyNotFound(name) => format!("Attorney '{}' not found", name),
            Message::AttorneyNotFoundWithId(id) => format!("Attorney with ID {} not found", id),
            Message::AttorneyEmailExists(email) => format!("An attorney with email '{}' already exists", email),
            Message::NoAttorneysFound => "No attorneys found".to_string(),
            Message::AttorneyListHeader => "Attorneys:".to_string(),
            Message::EditingAttorney(name) => format!("Editing attorney: {}", name),
            Message::SelectAttorneyAction => "What would you like to do?".to_string(),
            Message::ConfirmDeleteAttorney(name) => format!("Delete attorney '{}'? Their cases will remain unassigned.", name),
            Message::PromptAttorneyName => "Attorney name".to_string(),
            Message::PromptAttorneyEmail => "Email address".to_string(),
            Message::PromptAttorneyTitle => "Job title (leave empty to skip)".to_string(),
            Message::PromptAttorneyActive => "Attorney is active".to_string(),
            Message::PromptSelectAttorney => "Select attorney".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDateFormat(input) => format!("Invalid date '{}'. Expected format: YYYY-MM-DD", input),
            Message::InvalidMonthFormat(input) => format!("Invalid month '{}'. Expected format: YYYY-MM", input),
            Message::InvalidTimeFormat(input) => format!("Invalid time '{}'. Expected format: HH:MM", input),

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("📊 Time report: {}", period),
            Message::ReportAttorney(name) => format!("Attorney: {}", name),
            Message::CaseDetailHeader(title) => format!("📁 {}", title),

            // === EXPORT MESSAGES ===
            Message::ExportingReport => "Exporting time report...".to_string(),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigModuleDefaults => "Defaults".to_string(),
            Message::ConfigModuleExport => "Export".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultAttorney => "Default attorney name (leave empty for all)".to_string(),
            Message::PromptExportDirectory => "Export directory (leave empty for current)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration {}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::NothingToRollback => "Database is already at or below the target version".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from version {} to version {}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to version {}", version),
        };
        write!(f, "{}", text)
    }
}
