//! On-screen time report command.
//!
//! Fetches a fresh snapshot of cases and time logs, narrows the logs to the
//! requested period, and renders the aggregated totals as terminal tables.
//! The same report-building path feeds the export command, so what the user
//! sees on screen is exactly what an export of the same period contains.

use crate::{
    db::{attorneys::Attorneys, cases::Cases, time_logs::TimeLogs},
    libs::{
        aggregate::TimeReport,
        config::Config,
        filter::{parse_date_arg, parse_month_arg, PeriodFilter},
        messages::Message,
        view::View,
    },
    msg_error,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct ReportArgs {
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
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let from = parse_date_arg(args.from.as_deref())?;
    let to = parse_date_arg(args.to.as_deref())?;
    let month = parse_month_arg(args.month.as_deref())?;
    let period = PeriodFilter::from_args(from, to, month);

    let report = match build(&period, args.attorney, args.all_attorneys)? {
        Some(report) => report,
        None => return Ok(()),
    };

    View::report(&report)?;
    Ok(())
}

/// Fetches a snapshot and builds the report for a period and attorney scope.
///
/// The attorney is resolved explicitly per call: a `--attorney` flag wins,
/// then the configured default unless `--all-attorneys` suppresses it,
/// otherwise the report covers the whole firm. A named attorney that is not
/// on the roster is reported and yields `None`; nothing is built from a
/// half-resolved scope.
pub(crate) fn build(period: &PeriodFilter, attorney: Option<String>, all_attorneys: bool) -> Result<Option<TimeReport>> {
    let attorney = match attorney {
        Some(name) => Some(name),
        None if all_attorneys => None,
        None => Config::read()?.attorney,
    };

    let (cases, attorney) = match attorney {
        Some(name) => match Attorneys::new()?.get_by_name(&name)? {
            Some(attorney) => (Cases::new()?.list_by_attorney(attorney.id.unwrap_or(0))?, Some(attorney.name)),
            None => {
                msg_error!(Message::AttorneyNotFound(name));
                return Ok(None);
            }
        },
        None => (Cases::new()?.list()?, None),
    };

    let mut logs = TimeLogs::new()?.list()?;

    // An attorney-scoped report must not count other attorneys' hours
    if attorney.is_some() {
        let case_ids: HashSet<i64> = cases.iter().filter_map(|case| case.id).collect();
        logs.retain(|log| case_ids.contains(&log.case_id));
    }

    Ok(Some(TimeReport::build(&cases, &logs, period, attorney)))
}
