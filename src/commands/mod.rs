pub mod attorney;
pub mod case;
pub mod export;
pub mod init;
pub mod log;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage legal cases")]
    Case(case::CaseArgs),
    #[command(about = "Record and review billable time")]
    Log(log::LogArgs),
    #[command(about = "Manage the attorney roster")]
    Attorney(attorney::AttorneyArgs),
    #[command(about = "Prepare an on-screen time report")]
    Report(report::ReportArgs),
    #[command(about = "Export a time report to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Case(args) => case::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Attorney(args) => attorney::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
