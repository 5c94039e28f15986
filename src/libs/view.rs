//! Terminal table rendering for lists, detail screens, and reports.

use crate::db::attorneys::Attorney;
use crate::libs::aggregate::{CaseHours, TimeReport};
use crate::libs::case::Case;
use crate::libs::formatter::format_hours;
use crate::libs::messages::Message;
use crate::libs::time_log::TimeLog;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Renders the case list with per-case hour totals.
    ///
    /// Zero-hour cases stay in the listing even though exports skip them.
    pub fn cases(cases: &[CaseHours]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CLIENT", "STATUS", "HOURS", "CREATED"]);
        for entry in cases {
            table.add_row(row![
                entry.case.id.unwrap_or(0),
                entry.case.title,
                entry.case.client_name,
                entry.case.status,
                format_hours(entry.total_hours),
                entry.case.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders one case with its log history and total hours.
    pub fn case_detail(case: &Case, total_hours: f64, logs: &[TimeLog]) -> Result<()> {
        msg_print!(Message::CaseDetailHeader(case.title.clone()));

        let mut table = Table::new();
        table.add_row(row!["CLIENT", case.client_name]);
        table.add_row(row!["STATUS", case.status]);
        table.add_row(row!["DESCRIPTION", case.description.clone().unwrap_or_default()]);
        table.add_row(row![
            "CREATED",
            case.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_default()
        ]);
        table.add_row(row!["TOTAL HOURS", format_hours(total_hours)]);
        table.printstd();

        if !logs.is_empty() {
            Self::case_logs(logs)?;
        }

        Ok(())
    }

    /// Renders the log table of a single case, newest first.
    pub fn case_logs(logs: &[TimeLog]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "DURATION", "ACTIVITY", "DESCRIPTION"]);
        for log in logs {
            table.add_row(row![
                log.id.unwrap_or(0),
                log.start_time.format("%Y-%m-%d"),
                log.start_time.format("%H:%M"),
                log.end_time.format("%H:%M"),
                log.duration(),
                log.activity_type,
                log.description.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the time-log list with case titles resolved by id.
    pub fn time_logs(logs: &[TimeLog], case_titles: &HashMap<i64, String>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CASE", "DATE", "START", "END", "DURATION", "ACTIVITY"]);
        for log in logs {
            let case_title = case_titles.get(&log.case_id).map(|title| title.as_str()).unwrap_or("Unknown Case");
            table.add_row(row![
                log.id.unwrap_or(0),
                case_title,
                log.start_time.format("%Y-%m-%d"),
                log.start_time.format("%H:%M"),
                log.end_time.format("%H:%M"),
                log.duration(),
                log.activity_type
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the attorney list.
    pub fn attorneys(attorneys: &[Attorney]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "TITLE", "ACTIVE"]);
        for attorney in attorneys {
            table.add_row(row![
                attorney.id.unwrap_or(0),
                attorney.name,
                attorney.email,
                attorney.title.clone().unwrap_or_default(),
                if attorney.is_active { "Yes" } else { "No" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the on-screen report: summary counters, then the case table.
    pub fn report(report: &TimeReport) -> Result<()> {
        msg_print!(Message::ReportHeader(report.period_label.clone()));
        if let Some(attorney) = &report.attorney {
            msg_print!(Message::ReportAttorney(attorney.clone()));
        }

        let mut summary = Table::new();
        summary.add_row(row!["TOTAL CASES", report.stats.total_cases]);
        summary.add_row(row!["ACTIVE", report.stats.active_cases]);
        summary.add_row(row!["CLOSED", report.stats.closed_cases]);
        summary.add_row(row!["PENDING", report.stats.pending_cases]);
        summary.add_row(row!["BILLABLE", report.stats.billable_cases]);
        summary.add_row(row!["TOTAL HOURS", format_hours(report.stats.total_hours)]);
        summary.printstd();

        Self::cases(&report.cases)?;

        Ok(())
    }
}
