//! Case management command: create, list, show, edit, and delete cases.
//!
//! Every field can be supplied as a flag for scripted use; missing fields
//! fall back to interactive prompts. Running `lextrack case` without a
//! subcommand opens a small action menu.

use crate::{
    db::{attorneys::Attorneys, cases::Cases, time_logs::TimeLogs},
    libs::{
        aggregate::aggregate_cases,
        case::{Case, CaseStatus},
        filter::{parse_date_arg, CaseFilter},
        messages::{warning, Message},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct CaseArgs {
    #[command(subcommand)]
    command: Option<CaseCommand>,
}

#[derive(Debug, Subcommand)]
enum CaseCommand {
    /// Open a new case
    Create {
        /// Case title
        #[arg(short, long)]
        title: Option<String>,
        /// Client name
        #[arg(short, long)]
        client: Option<String>,
        /// Case description
        #[arg(short, long)]
        description: Option<String>,
        /// Case status
        #[arg(short, long, value_enum)]
        status: Option<CaseStatus>,
        /// Attorney name to assign
        #[arg(short, long)]
        attorney: Option<String>,
    },
    /// List cases with their logged hours
    List {
        /// Filter by case status
        #[arg(long, value_enum)]
        status: Option<CaseStatus>,
        /// Case-insensitive search over title, client, and description
        #[arg(long)]
        search: Option<String>,
        /// Keep only cases created on this day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<String>,
        /// Keep only cases assigned to this attorney
        #[arg(long)]
        attorney: Option<String>,
    },
    /// Show one case with its time logs
    Show {
        /// Case ID
        id: i64,
    },
    /// Edit a case
    Edit {
        /// Case ID
        id: i64,
    },
    /// Delete a case and its time logs
    Delete {
        /// Case ID
        id: i64,
    },
}

pub fn cmd(args: CaseArgs) -> Result<()> {
    match args.command {
        Some(CaseCommand::Create {
            title,
            client,
            description,
            status,
            attorney,
        }) => handle_create(title, client, description, status, attorney),
        Some(CaseCommand::List {
            status,
            search,
            day,
            attorney,
        }) => handle_list(status, search, day, attorney),
        Some(CaseCommand::Show { id }) => handle_show(id),
        Some(CaseCommand::Edit { id }) => handle_edit(id),
        Some(CaseCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(
    title: Option<String>,
    client: Option<String>,
    description: Option<String>,
    status: Option<CaseStatus>,
    attorney: Option<String>,
) -> Result<()> {
    let title: String = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCaseTitle.to_string())
            .interact_text()?,
    };

    let client: String = match client {
        Some(client) => client,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClientName.to_string())
            .interact_text()?,
    };

    let description = match description {
        Some(description) => Some(description),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCaseDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

    let status = match status {
        Some(status) => status,
        None => {
            let statuses = [CaseStatus::Active, CaseStatus::Closed, CaseStatus::Pending];
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCaseStatus.to_string())
                .items(&statuses.iter().map(|status| status.as_str()).collect::<Vec<_>>())
                .default(0)
                .interact()?;
            statuses[selection]
        }
    };

    let mut case = Case::new(&title, &client, description, status);

    if let Some(name) = attorney {
        match Attorneys::new()?.get_by_name(&name)? {
            Some(attorney) => case = case.with_attorney(attorney.id),
            None => {
                msg_error!(Message::AttorneyNotFound(name));
                return Ok(());
            }
        }
    }

    Cases::new()?.insert(&case)?;

    msg_success!(Message::CaseCreated(title));
    Ok(())
}

fn handle_list(status: Option<CaseStatus>, search: Option<String>, day: Option<String>, attorney: Option<String>) -> Result<()> {
    let day = parse_date_arg(day.as_deref())?;
    let filter = CaseFilter::new().with_status(status).with_search(search).with_day(day);

    let cases = match attorney {
        Some(name) => match Attorneys::new()?.get_by_name(&name)? {
            Some(attorney) => Cases::new()?.list_by_attorney(attorney.id.unwrap_or(0))?,
            None => {
                msg_error!(Message::AttorneyNotFound(name));
                return Ok(());
            }
        },
        None => Cases::new()?.list()?,
    };
    let cases = filter.filter_cases(&cases);

    if cases.is_empty() {
        msg_info!(Message::NoCasesFound);
        return Ok(());
    }

    // Hour totals always come from the full log set, not a period slice
    let logs = TimeLogs::new()?.list()?;
    let aggregated = aggregate_cases(&cases, &logs);

    msg_print!(Message::CaseListHeader, true);
    View::cases(&aggregated)?;
    Ok(())
}

fn handle_show(id: i64) -> Result<()> {
    let case = match Cases::new()?.get_by_id(id)? {
        Some(case) => case,
        None => {
            msg_error!(Message::CaseNotFound(id));
            return Ok(());
        }
    };

    let logs = TimeLogs::new()?.list_by_case(id)?;
    let total_hours: f64 = logs.iter().map(|log| log.hours()).sum();

    View::case_detail(&case, total_hours, &logs)?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut cases_db = Cases::new()?;

    let case = match cases_db.get_by_id(id)? {
        Some(case) => case,
        None => {
            msg_error!(Message::CaseNotFound(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingCase(case.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaseTitle.to_string())
        .default(case.title.clone())
        .interact_text()?;

    let client: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .default(case.client_name.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaseDescription.to_string())
        .default(case.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let statuses = [CaseStatus::Active, CaseStatus::Closed, CaseStatus::Pending];
    let current = statuses.iter().position(|status| *status == case.status).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaseStatus.to_string())
        .items(&statuses.iter().map(|status| status.as_str()).collect::<Vec<_>>())
        .default(current)
        .interact()?;

    // Attorney assignment is offered only when a roster exists
    let attorneys = Attorneys::new()?.list()?;
    let mut attorney_id = case.attorney_id;
    if !attorneys.is_empty() {
        let mut options: Vec<String> = vec!["Unassigned".to_string()];
        options.extend(attorneys.iter().map(|attorney| attorney.name.clone()));
        let current = case
            .attorney_id
            .and_then(|id| attorneys.iter().position(|attorney| attorney.id == Some(id)))
            .map(|position| position + 1)
            .unwrap_or(0);
        let assignment = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAssignAttorney.to_string())
            .items(&options)
            .default(current)
            .interact()?;
        attorney_id = if assignment == 0 { None } else { attorneys[assignment - 1].id };
    }

    let mut updated = Case::new(
        &title,
        &client,
        if description.is_empty() { None } else { Some(description) },
        statuses[selection],
    );
    updated.attorney_id = attorney_id;

    cases_db.update(id, &updated)?;
    msg_success!(Message::CaseUpdated(title));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut cases_db = Cases::new()?;

    let case = match cases_db.get_by_id(id)? {
        Some(case) => case,
        None => {
            msg_error!(Message::CaseNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(warning(Message::ConfirmDeleteCase(case.title.clone())))
        .default(false)
        .interact()?;

    if confirmed {
        cases_db.delete(id)?;
        msg_success!(Message::CaseDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create case", "List cases", "Show case", "Edit case", "Delete case"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectCaseAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_create(None, None, None, None, None),
        1 => handle_list(None, None, None, None),
        2 => match select_case()? {
            Some(id) => handle_show(id),
            None => Ok(()),
        },
        3 => match select_case()? {
            Some(id) => handle_edit(id),
            None => Ok(()),
        },
        4 => match select_case()? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
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
