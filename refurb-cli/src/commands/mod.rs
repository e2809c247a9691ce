//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod detail;
mod export;
mod history;
mod session;

use anyhow::Result;
use clap::Subcommand;
use detail::DetailCommands;

use crate::config::Config;
use crate::service::InventoryService;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive intake session
    Session,
    /// Manage detail choice lists
    Detail {
        #[command(subcommand)]
        command: DetailCommands,
    },
    /// List closed jobs from the job history
    History {
        /// Only show this job
        #[arg(long)]
        job: Option<String>,

        /// Only show jobs containing an asset with this serial number
        #[arg(long)]
        serial: Option<String>,

        /// Print every asset of each job
        #[arg(short, long)]
        details: bool,
    },
    /// List assets from the asset history
    Assets {
        /// Only show assets with this serial number
        #[arg(long)]
        serial: Option<String>,
    },
    /// Export the job history to a spreadsheet
    Export {
        /// Only export this job
        #[arg(long)]
        job: Option<String>,

        /// Base file name (defaults to the job id, or "job_history")
        #[arg(long)]
        name: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let mut service = InventoryService::from_config(config)?;

    match command {
        Commands::Session => session::run_session(&mut service),
        Commands::Detail { command } => detail::handle_detail_command(command, &mut service),
        Commands::History {
            job,
            serial,
            details,
        } => {
            history::list_jobs(&service, job.as_deref(), serial.as_deref(), details);
            Ok(())
        }
        Commands::Assets { serial } => {
            history::list_assets(&service, serial.as_deref());
            Ok(())
        }
        Commands::Export { job, name } => {
            export::export_history(&service, job.as_deref(), name.as_deref())
        }
    }
}
