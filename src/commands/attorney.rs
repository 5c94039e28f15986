//! Attorney roster command: create, list, edit, and delete attorneys.
//!
//! Email addresses are unique across the roster; the create and edit flows
//! check for collisions before writing so the user gets a clear message
//! instead of a constraint error.

use crate::{
    db::attorneys::{Attorney, Attorneys},
    libs::{
        messages::{warning, Message},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct AttorneyArgs {
    #[command(subcommand)]
    command: Option<AttorneyCommand>,
}

#[derive(Debug, Subcommand)]
enum AttorneyCommand {
    /// Add an attorney to the roster
    Create {
        /// Attorney name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address, unique across the roster
        #[arg(short, long)]
        email: Option<String>,
        /// Job title
        #[arg(short, long)]
        title: Option<String>,
    },
    /// List all attorneys
    List,
    /// Edit an attorney
    Edit {
        /// Attorney ID
        id: i64,
    },
    /// Delete an attorney
    Delete {
        /// Attorney ID
        id: i64,
    },
}

pub fn cmd(args: AttorneyArgs) -> Result<()> {
    match args.command {
        Some(AttorneyCommand::Create { name, email, title }) => handle_create(name, email, title),
        Some(AttorneyCommand::List) => handle_list(),
        Some(AttorneyCommand::Edit { id }) => handle_edit(id),
        Some(AttorneyCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_create(name: Option<String>, email: Option<String>, title: Option<String>) -> Result<()> {
    let name: String = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAttorneyName.to_string())
            .interact_text()?,
    };

    let email: String = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAttorneyEmail.to_string())
            .interact_text()?,
    };

    let title = match title {
        Some(title) => Some(title),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAttorneyTitle.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

    let mut attorneys_db = Attorneys::new()?;

    if attorneys_db.get_by_email(&email)?.is_some() {
        msg_error!(Message::AttorneyEmailExists(email));
        return Ok(());
    }

    let attorney = Attorney::new(&name, &email, title);
    attorneys_db.insert(&attorney)?;

    msg_success!(Message::AttorneyCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let attorneys = Attorneys::new()?.list()?;

    if attorneys.is_empty() {
        msg_info!(Message::NoAttorneysFound);
        return Ok(());
    }

    msg_print!(Message::AttorneyListHeader, true);
    View::attorneys(&attorneys)?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut attorneys_db = Attorneys::new()?;

    let attorney = match attorneys_db.get_by_id(id)? {
        Some(attorney) => attorney,
        None => {
            msg_error!(Message::AttorneyNotFoundWithId(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingAttorney(attorney.name.clone()), true);

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAttorneyName.to_string())
        .default(attorney.name.clone())
        .interact_text()?;

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAttorneyEmail.to_string())
        .default(attorney.email.clone())
        .interact_text()?;

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAttorneyTitle.to_string())
        .default(attorney.title.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let is_active = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAttorneyActive.to_string())
        .default(attorney.is_active)
        .interact()?;

    // A changed email must not collide with another attorney
    if email != attorney.email {
        if let Some(existing) = attorneys_db.get_by_email(&email)? {
            if existing.id != attorney.id {
                msg_error!(Message::AttorneyEmailExists(email));
                return Ok(());
            }
        }
    }

    let mut updated = Attorney::new(&name, &email, if title.is_empty() { None } else { Some(title) });
    updated.is_active = is_active;

    attorneys_db.update(id, &updated)?;
    msg_success!(Message::AttorneyUpdated(name));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut attorneys_db = Attorneys::new()?;

    let attorney = match attorneys_db.get_by_id(id)? {
        Some(attorney) => attorney,
        None => {
            msg_error!(Message::AttorneyNotFoundWithId(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(warning(Message::ConfirmDeleteAttorney(attorney.name.clone())))
        .default(false)
        .interact()?;

    if confirmed {
        attorneys_db.delete(id)?;
        msg_success!(Message::AttorneyDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Add attorney", "List attorneys", "Edit attorney", "Delete attorney"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectAttorneyAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_create(None, None, None),
        1 => handle_list(),
        2 => match select_attorney()? {
            Some(id) => handle_edit(id),
            None => Ok(()),
        },
        3 => match select_attorney()? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Lets the user pick an attorney by name and returns their id.
fn select_attorney() -> Result<Option<i64>> {
    let attorneys = Attorneys::new()?.list()?;
    if attorneys.is_empty() {
        msg_info!(Message::NoAttorneysFound);
        return Ok(None);
    }

    let names: Vec<String> = attorneys.iter().map(|attorney| attorney.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectAttorney.to_string())
        .items(&names)
        .interact()?;

    Ok(attorneys[selection].id)
}
