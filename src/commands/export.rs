//! Report export command for billing handoff and archival.
//!
//! Builds the same report snapshot the on-screen report shows and writes it
//! as a file in the requested format. With `--case` the command instead
//! exports a single case's complete time-log history.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format with formatted headers
//!
//! ## Output Destination
//!
//! An explicit `--output` path wins. Otherwise the file gets a generated
//! name derived from the attorney scope and period and lands in the
//! configured export directory, falling back to the current directory.

use crate::{
    commands::report,
    db::{cases::Cases, time_logs::TimeLogs},
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        filter::{parse_date_arg, parse_month_arg, PeriodFilter},
        messages::Message,
    },
    msg_error, msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported report
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path, overrides the generated filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Period start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Period end date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Calendar month (YYYY-MM), wins over --from/--to
    #[arg(short, long)]
    month: Option<String>,

    /// Limit the report to one attorney's cases
    #[arg(short, long)]
    attorney: Option<String>,

    /// Cover every attorney, ignoring the configured default
    #[arg(long)]
    all_attorneys: bool,

    /// Export one case's full time-log history instead of a report
    #[arg(short, long)]
    case: Option<i64>,
}

/// Executes the export command.
///
/// The full-report path reuses the report command's snapshot builder, so an
/// export always matches what `lextrack report` showed for the same
/// arguments. The per-case path skips aggregation entirely and dumps the
/// case's logs newest first.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let directory = Config::read()?.export.map(|export| PathBuf::from(export.directory));
    let exporter = Exporter::new(args.format, args.output, directory);

    if let Some(case_id) = args.case {
        let case = match Cases::new()?.get_by_id(case_id)? {
            Some(case) => case,
            None => {
                msg_error!(Message::CaseNotFound(case_id));
                return Ok(());
            }
        };
        let logs = TimeLogs::new()?.list_by_case(case_id)?;

        msg_info!(Message::ExportingReport);
        return exporter.export_case_logs(&case, &logs);
    }

    let from = parse_date_arg(args.from.as_deref())?;
    let to = parse_date_arg(args.to.as_deref())?;
    let month = parse_month_arg(args.month.as_deref())?;
    let period = PeriodFilter::from_args(from, to, month);

    let report = match report::build(&period, args.attorney, args.all_attorneys)? {
        Some(report) => report,
        None => return Ok(()),
    };

    msg_info!(Message::ExportingReport);
    exporter.export_report(&report)
}
