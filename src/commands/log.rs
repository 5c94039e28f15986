//! Time-log command: record, list, and delete billable time entries.
//!
//! Entries are immutable once recorded; corrections are made by deleting
//! and re-recording. The create flow validates the end time against the
//! start time before anything reaches the store.

use crate::{
    db::{cases::Cases, time_logs::TimeLogs},
    libs::{
        filter::{parse_date_arg, parse_month_arg, PeriodFilter},
        messages::{warning, Message},
        time_log::{ActivityType, TimeLog},
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    command: Option<LogCommand>,
}

#[derive(Debug, Subcommand)]
enum LogCommand {
    /// Record a billable time entry
    Create {
        /// Case ID the entry belongs to
        #[arg(short, long)]
        case: Option<i64>,
        /// Entry date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,
        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,
        /// Activity type
        #[arg(short, long, value_enum)]
        activity: Option<ActivityType>,
        /// Work description
        #[arg(long)]
        description: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List time entries
    List {
        /// Keep only entries of this case
        #[arg(short, long)]
        case: Option<i64>,
        /// Period start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Period end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Calendar month (YYYY-MM), wins over --from/--to
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a time entry
    Delete {
        /// Time log ID
        id: i64,
    },
}

pub fn cmd(args: LogArgs) -> Result<()> {
    match args.command {
        Some(LogCommand::Create {
            case,
            date,
            start,
            end,
            activity,
            description,
            notes,
        }) => handle_create(case, date, start, end, activity, description, notes),
        Some(LogCommand::List { case, from, to, month }) => handle_list(case, from, to, month),
        Some(LogCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(
    case: Option<i64>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
    activity: Option<ActivityType>,
    description: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let case_id = match case {
        Some(id) => {
            if Cases::new()?.get_by_id(id)?.is_none() {
                msg_error!(Message::CaseNotFound(id));
                return Ok(());
            }
            id
        }
        None => match select_case()? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let date: String = match date {
        Some(date) => date,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogDate.to_string())
            .default(Local::now().format("%Y-%m-%d").to_string())
            .interact_text()?,
    };
    let date = parse_date(&date)?;

    let start: String = match start {
        Some(start) => start,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStartTime.to_string())
            .interact_text()?,
    };
    let start = parse_time(&start)?;

    let end: String = match end {
        Some(end) => end,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEndTime.to_string())
            .interact_text()?,
    };
    let end = parse_time(&end)?;

    let activity = match activity {
        Some(activity) => activity,
        None => {
            let activities = [
                ActivityType::Consultation,
                ActivityType::Research,
                ActivityType::CourtTime,
                ActivityType::Drafting,
                ActivityType::Administrative,
                ActivityType::Other,
            ];
            let default = activities.iter().position(|a| *a == ActivityType::default()).unwrap_or(0);
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptActivityType.to_string())
                .items(&activities.iter().map(|a| a.as_str()).collect::<Vec<_>>())
                .default(default)
                .interact()?;
            activities[selection]
        }
    };

    let description = match description {
        Some(description) => Some(description),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLogDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

    let notes = match notes {
        Some(notes) => Some(notes),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLogNotes.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

    let start_time = date.and_time(start);
    let end_time = date.and_time(end);

    // Checked here for a friendly message; the store enforces it again
    if end_time <= start_time {
        msg_error!(Message::TimeLogEndBeforeStart);
        return Ok(());
    }

    let log = TimeLog::new(case_id, start_time, end_time, activity, description, notes);
    TimeLogs::new()?.insert(&log)?;

    msg_success!(Message::TimeLogCreated(log.duration()));
    Ok(())
}

fn handle_list(case: Option<i64>, from: Option<String>, to: Option<String>, month: Option<String>) -> Result<()> {
    let from = parse_date_arg(from.as_deref())?;
    let to = parse_date_arg(to.as_deref())?;
    let month = parse_month_arg(month.as_deref())?;
    let period = PeriodFilter::from_args(from, to, month);

    let logs = match case {
        Some(case_id) => {
            if Cases::new()?.get_by_id(case_id)?.is_none() {
                msg_error!(Message::CaseNotFound(case_id));
                return Ok(());
            }
            TimeLogs::new()?.list_by_case(case_id)?
        }
        None => TimeLogs::new()?.list()?,
    };
    let logs = period.filter_logs(&logs);

    if logs.is_empty() {
        msg_info!(Message::NoTimeLogsFound);
        return Ok(());
    }

    let case_titles: HashMap<i64, String> = Cases::new()?
        .list()?
        .into_iter()
        .filter_map(|case| case.id.map(|id| (id, case.title)))
        .collect();

    msg_print!(Message::TimeLogListHeader, true);
    View::time_logs(&logs, &case_titles)?;
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut logs_db = TimeLogs::new()?;

    if logs_db.get_by_id(id)?.is_none() {
        msg_error!(Message::TimeLogNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(warning(Message::ConfirmDeleteTimeLog(id)))
        .default(false)
        .interact()?;

    if confirmed {
        logs_db.delete(id)?;
        msg_success!(Message::TimeLogDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Record time", "List time logs", "Delete time log"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTimeLogAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_create(None, None, None, None, None, None, None),
        1 => handle_list(None, None, None, None),
        2 => {
            let id: i64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTimeLogId.to_string())
                .interact_text()?;
            handle_delete(id)
        }
        _ => Ok(()),
    }
}

/// Lets the user pick a case by title and returns its id.
fn select_case() -> Result<Option<i64>> {
    let cases = Cases::new()?.list()?;
    if cases.is_empty() {
        msg_info!(Message::NoCasesFound);
        return Ok(None);
    }

    let titles: Vec<String> = cases.iter().map(|case| case.title.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectCase.to_string())
        .items(&titles)
        .interact()?;

    Ok(cases[selection].id)
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(input.to_string())))
}

fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(input.to_string())))
}
