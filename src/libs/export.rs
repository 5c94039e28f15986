//! Report export for billing review, archival, and spreadsheet handoff.
//!
//! Renders a [`TimeReport`](crate::libs::aggregate::TimeReport) into a
//! sectioned export document and writes it in the requested format. All
//! formats emit the same document: a report header, a summary block, the
//! billable case table, and the full time-log detail. A second entry point
//! exports a single case's log history without the surrounding report.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON, and Excel with formatted headers
//! - **Identical Content**: every format renders the same gathered rows
//! - **File Naming**: period- and attorney-derived default filenames
//! - **Field Safety**: titles containing commas or quotes survive round-trips
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lextrack::libs::aggregate::TimeReport;
//! use lextrack::libs::export::{ExportFormat, Exporter};
//! use lextrack::libs::filter::PeriodFilter;
//!
//! fn run() -> anyhow::Result<()> {
//!     let report = TimeReport::build(&[], &[], &PeriodFilter::All, None);
//!     let exporter = Exporter::new(ExportFormat::Csv, None, None);
//!     exporter.export_report(&report)?;
//!     Ok(())
//! }
//! ```

use crate::{
    libs::{aggregate::TimeReport, case::Case, formatter::format_hours, messages::Message, time_log::TimeLog},
    msg_success,
};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Title row of the full report document.
const EXPORT_TITLE: &str = "Legal Time Tracking - Complete Export";

/// Case-summary table headers.
const CASE_HEADERS: [&str; 7] = ["Case ID", "Title", "Client", "Status", "Total Hours", "Created Date", "Description"];

/// Time-log detail headers. Per-case exports drop the leading
/// `Case Title` column since every row belongs to the same case.
const LOG_HEADERS: [&str; 8] = ["Case Title", "Date", "Start Time", "End Time", "Duration", "Activity Type", "Description", "Notes"];

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet import and billing systems.
    Csv,

    /// Pretty-printed JSON carrying the document as a structured object.
    Json,

    /// Excel workbook with bold section headers and auto-sized columns.
    Excel,
}

impl ExportFormat {
    /// File extension used for default filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Serializable case-summary row.
///
/// Every field except the id is pre-formatted text so each output format
/// renders identical values.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCaseRow {
    /// Case identifier from the database
    pub id: i64,
    /// Case title
    pub title: String,
    /// Client name
    pub client: String,
    /// Case status text
    pub status: String,
    /// Total logged hours formatted as "Xh Ym"
    pub total_hours: String,
    /// Creation date in YYYY-MM-DD format
    pub created_date: String,
    /// Case description, empty string when absent
    pub description: String,
}

/// Serializable time-log detail row.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportLogRow {
    /// Resolved case title, "Unknown Case" when unresolvable
    pub case_title: String,
    /// Log date in YYYY-MM-DD format
    pub date: String,
    /// Start time in HH:MM format
    pub start_time: String,
    /// End time in HH:MM format
    pub end_time: String,
    /// Duration formatted as "Xh Ym"
    pub duration: String,
    /// Activity type text
    pub activity_type: String,
    /// Log description, empty string when absent
    pub description: String,
    /// Free-form notes, empty string when absent
    pub notes: String,
}

/// Complete export document gathered from a report snapshot.
///
/// The JSON format serializes this structure directly; CSV and Excel walk
/// it section by section.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Document title row
    pub title: String,
    /// Human-readable period label
    pub period: String,
    /// Attorney scope label, "All Attorneys" when unscoped
    pub attorney: String,
    /// Generation timestamp in YYYY-MM-DD HH:MM:SS format
    pub generated_on: String,
    /// Count of cases with nonzero hours in the period
    pub total_cases: usize,
    /// Grand total hours formatted as "Xh Ym"
    pub total_hours: String,
    /// Case-summary rows, billable cases only
    pub cases: Vec<ExportCaseRow>,
    /// Time-log detail rows for the filtered period
    pub time_logs: Vec<ExportLogRow>,
}

/// Export handler holding the format and destination configuration.
///
/// The destination is resolved per export: an explicit output path wins
/// outright, otherwise a default filename is generated and placed in the
/// configured export directory or the current directory.
pub struct Exporter {
    /// The desired output format
    format: ExportFormat,
    /// Explicit output path, overrides default naming entirely
    output: Option<PathBuf>,
    /// Directory that default-named files are written into
    directory: Option<PathBuf>,
}

impl Exporter {
    /// Creates a new exporter with the given format and destination options.
    ///
    /// ## Default File Naming
    ///
    /// When `output` is `None`, filenames derive from the export content:
    ///
    /// - Full report: `legal-time-tracking-{attorney}-{period}-export.{ext}`
    ///   where the attorney segment is present only for scoped reports and
    ///   the period token is `all-time`, a date range, or `YYYY-MM`
    /// - Per-case: `{case-title}-time-logs.{ext}`
    ///
    /// Name segments are lowercased with whitespace collapsed to hyphens.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lextrack::libs::export::{ExportFormat, Exporter};
    /// use std::path::PathBuf;
    ///
    /// // Default filename in the current directory
    /// let exporter = Exporter::new(ExportFormat::Csv, None, None);
    ///
    /// // Explicit output path
    /// let output = PathBuf::from("reports/january.xlsx");
    /// let exporter = Exporter::new(ExportFormat::Excel, Some(output), None);
    /// ```
    pub fn new(format: ExportFormat, output: Option<PathBuf>, directory: Option<PathBuf>) -> Self {
        Self { format, output, directory }
    }

    /// Exports the full report document in the configured format.
    ///
    /// Gathers the document rows once from the report snapshot, then hands
    /// them to the format-specific writer. The output path is derived from
    /// the report's attorney scope and period token unless an explicit path
    /// was configured.
    ///
    /// # Arguments
    ///
    /// * `report` - The aggregated report snapshot to render
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` once the file is written, or an error if row
    /// gathering or file writing fails.
    pub fn export_report(&self, report: &TimeReport) -> Result<()> {
        let document = self.gather_document(report);
        let path = self.report_path(report);

        match self.format {
            ExportFormat::Csv => self.export_report_csv(&document, &path)?,
            ExportFormat::Json => self.export_report_json(&document, &path)?,
            ExportFormat::Excel => self.export_report_excel(&document, &path)?,
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    /// Exports a single case's time-log history.
    ///
    /// The document is one section: a `Time Logs for {title}` heading, the
    /// detail headers without the case-title column, and one row per log in
    /// the order given. JSON serializes the rows as a plain array.
    ///
    /// # Arguments
    ///
    /// * `case` - The case whose logs are exported; its title names the file
    /// * `logs` - The log records to render, typically newest first
    pub fn export_case_logs(&self, case: &Case, logs: &[TimeLog]) -> Result<()> {
        let rows: Vec<ExportLogRow> = logs.iter().map(|log| log_row(&case.title, log)).collect();
        let path = self.case_path(case);

        match self.format {
            ExportFormat::Csv => self.export_case_logs_csv(case, &rows, &path)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_case_logs_excel(case, &rows, &path)?,
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    /// Builds the export document from a report snapshot.
    ///
    /// Case rows cover billable cases only; detail rows cover every log
    /// that survived the period filter, with titles resolved through the
    /// report's lookup.
    fn gather_document(&self, report: &TimeReport) -> ExportDocument {
        let cases = report
            .billable_cases()
            .into_iter()
            .map(|entry| ExportCaseRow {
                id: entry.case.id.unwrap_or(0),
                title: entry.case.title.clone(),
                client: entry.case.client_name.clone(),
                status: entry.case.status.to_string(),
                total_hours: format_hours(entry.total_hours),
                created_date: entry.case.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                description: entry.case.description.clone().unwrap_or_default(),
            })
            .collect();

        let time_logs = report.logs.iter().map(|log| log_row(report.case_title(log.case_id), log)).collect();

        ExportDocument {
            title: EXPORT_TITLE.to_string(),
            period: report.period_label.clone(),
            attorney: report.attorney.clone().unwrap_or_else(|| "All Attorneys".to_string()),
            generated_on: report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            total_cases: report.stats.billable_cases,
            total_hours: format_hours(report.stats.total_hours),
            cases,
            time_logs,
        }
    }

    /// Resolves the full-report destination path.
    fn report_path(&self, report: &TimeReport) -> PathBuf {
        let scope = report.attorney.as_deref().map(|name| format!("{}-", slug(name))).unwrap_or_default();
        self.resolve_path(format!("legal-time-tracking-{}{}-export.{}", scope, report.period_token, self.format.extension()))
    }

    /// Resolves the per-case destination path.
    fn case_path(&self, case: &Case) -> PathBuf {
        self.resolve_path(format!("{}-time-logs.{}", slug(&case.title), self.format.extension()))
    }

    /// Applies the destination precedence to a default filename.
    fn resolve_path(&self, default_name: String) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        match &self.directory {
            Some(directory) => directory.join(default_name),
            None => PathBuf::from(default_name),
        }
    }

    /// Writes the full report document as sectioned CSV.
    ///
    /// Section rows, key-value rows, and table rows have different widths,
    /// so the writer runs in flexible mode. Field quoting and escaping
    /// follow standard CSV rules regardless of field content.
    fn export_report_csv(&self, document: &ExportDocument, path: &Path) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

        wtr.write_record(&[document.title.as_str()])?;
        wtr.write_record(&[format!("Period: {}", document.period)])?;
        wtr.write_record(&[format!("Attorney: {}", document.attorney)])?;
        wtr.write_record(&["Generated on:", &document.generated_on])?;

        wtr.write_record(&[""])?;
        wtr.write_record(&["SUMMARY"])?;
        wtr.write_record(&["Total Cases:", &document.total_cases.to_string()])?;
        wtr.write_record(&["Total Hours:", &document.total_hours])?;

        wtr.write_record(&[""])?;
        wtr.write_record(&["CASES SUMMARY"])?;
        wtr.write_record(&CASE_HEADERS)?;
        for case in &document.cases {
            wtr.write_record(&[
                case.id.to_string(),
                case.title.clone(),
                case.client.clone(),
                case.status.clone(),
                case.total_hours.clone(),
                case.created_date.clone(),
                case.description.clone(),
            ])?;
        }

        wtr.write_record(&[""])?;
        wtr.write_record(&["TIME LOGS DETAIL"])?;
        wtr.write_record(&LOG_HEADERS)?;
        for log in &document.time_logs {
            wtr.write_record(&[
                log.case_title.clone(),
                log.date.clone(),
                log.start_time.clone(),
                log.end_time.clone(),
                log.duration.clone(),
                log.activity_type.clone(),
                log.description.clone(),
                log.notes.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Writes the full report document as pretty-printed JSON.
    fn export_report_json(&self, document: &ExportDocument, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        File::create(path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Writes the full report document as a formatted Excel worksheet.
    fn export_report_excel(&self, document: &ExportDocument, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let title_format = Format::new().set_bold().set_font_size(14.0);
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, &document.title, &title_format)?;
        worksheet.write_string(1, 0, &format!("Period: {}", document.period))?;
        worksheet.write_string(2, 0, &format!("Attorney: {}", document.attorney))?;
        worksheet.write_string(3, 0, "Generated on:")?;
        worksheet.write_string(3, 1, &document.generated_on)?;

        let mut row = 5;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        row += 1;
        worksheet.write_string(row, 0, "Total Cases:")?;
        worksheet.write_number(row, 1, document.total_cases as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "Total Hours:")?;
        worksheet.write_string(row, 1, &document.total_hours)?;

        row += 2;
        worksheet.write_string_with_format(row, 0, "CASES SUMMARY", &header_format)?;
        row += 1;
        for (col, header) in CASE_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *header, &header_format)?;
        }
        row += 1;
        for case in &document.cases {
            worksheet.write_number(row, 0, case.id as f64)?;
            worksheet.write_string(row, 1, &case.title)?;
            worksheet.write_string(row, 2, &case.client)?;
            worksheet.write_string(row, 3, &case.status)?;
            worksheet.write_string(row, 4, &case.total_hours)?;
            worksheet.write_string(row, 5, &case.created_date)?;
            worksheet.write_string(row, 6, &case.description)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "TIME LOGS DETAIL", &header_format)?;
        row += 1;
        for (col, header) in LOG_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *header, &header_format)?;
        }
        row += 1;
        for log in &document.time_logs {
            worksheet.write_string(row, 0, &log.case_title)?;
            worksheet.write_string(row, 1, &log.date)?;
            worksheet.write_string(row, 2, &log.start_time)?;
            worksheet.write_string(row, 3, &log.end_time)?;
            worksheet.write_string(row, 4, &log.duration)?;
            worksheet.write_string(row, 5, &log.activity_type)?;
            worksheet.write_string(row, 6, &log.description)?;
            worksheet.write_string(row, 7, &log.notes)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }

    /// Writes a per-case log history as CSV.
    fn export_case_logs_csv(&self, case: &Case, rows: &[ExportLogRow], path: &Path) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

        wtr.write_record(&[format!("Time Logs for {}", case.title)])?;
        wtr.write_record(&[""])?;
        wtr.write_record(&LOG_HEADERS[1..])?;
        for log in rows {
            wtr.write_record(&[
                log.date.as_str(),
                log.start_time.as_str(),
                log.end_time.as_str(),
                log.duration.as_str(),
                log.activity_type.as_str(),
                log.description.as_str(),
                log.notes.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Writes a per-case log history as a formatted Excel worksheet.
    fn export_case_logs_excel(&self, case: &Case, rows: &[ExportLogRow], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let title_format = Format::new().set_bold().set_font_size(14.0);
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, &format!("Time Logs for {}", case.title), &title_format)?;
        for (col, header) in LOG_HEADERS[1..].iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
        }

        let mut row = 3;
        for log in rows {
            worksheet.write_string(row, 0, &log.date)?;
            worksheet.write_string(row, 1, &log.start_time)?;
            worksheet.write_string(row, 2, &log.end_time)?;
            worksheet.write_string(row, 3, &log.duration)?;
            worksheet.write_string(row, 4, &log.activity_type)?;
            worksheet.write_string(row, 5, &log.description)?;
            worksheet.write_string(row, 6, &log.notes)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}

/// Builds a detail row from a log and its resolved case title.
fn log_row(case_title: &str, log: &TimeLog) -> ExportLogRow {
    ExportLogRow {
        case_title: case_title.to_string(),
        date: log.start_time.format("%Y-%m-%d").to_string(),
        start_time: log.start_time.format("%H:%M").to_string(),
        end_time: log.end_time.format("%H:%M").to_string(),
        duration: log.duration(),
        activity_type: log.activity_type.to_string(),
        description: log.description.clone().unwrap_or_default(),
        notes: log.notes.clone().unwrap_or_default(),
    }
}

/// Lowercases text and collapses whitespace runs into single hyphens.
fn slug(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}
