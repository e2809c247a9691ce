//! Interactive intake session
//!
//! Reads one command per line, runs it against the service and keeps going
//! until `quit` or end of input. Lines are split shell-style, so values with
//! spaces can be quoted: `add --model "OptiPlex 7050" --serial 7XK2 --wiped`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use refurb_core::domain::NewAsset;
use refurb_core::pricing::PricingRule;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

use super::detail::{self, DetailCommands};
use super::history;
use crate::config::validate_pricing;
use crate::service::InventoryService;

/// One parsed shell line
#[derive(Parser)]
#[command(name = "refurb", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Session subcommands
#[derive(Subcommand)]
enum SessionCommand {
    /// Record a product in the open job
    Add {
        #[arg(long)]
        model: String,

        #[arg(long)]
        serial: String,

        /// Hard drive details
        #[arg(long, default_value = "")]
        drive: String,

        /// Cosmetic condition
        #[arg(long, default_value = "")]
        condition: String,

        #[arg(long)]
        desktop: bool,

        /// Hard drive has been wiped
        #[arg(long)]
        wiped: bool,
    },
    /// Close the open job and start the next one
    Close,
    /// Show the open job
    Status,
    /// Export the jobs closed in this session
    Export,
    /// Show or change the charges used when closing a job
    Pricing {
        #[arg(long, allow_negative_numbers = true)]
        desktop_charge: Option<Decimal>,

        #[arg(long, allow_negative_numbers = true)]
        wipe_charge: Option<Decimal>,
    },
    /// Manage detail choice lists
    Detail {
        #[command(subcommand)]
        command: DetailCommands,
    },
    /// List closed jobs from the job history
    History {
        #[arg(long)]
        job: Option<String>,

        #[arg(long)]
        serial: Option<String>,

        #[arg(short, long)]
        details: bool,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the shell keeps reading
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive session on stdin
pub fn run_session(service: &mut InventoryService) -> Result<()> {
    println!("{}", "Refurb intake session".bold());
    println!(
        "  Open job: {}   Pricing: {}",
        service.open_job().job_id().cyan(),
        service.pricing()
    );
    println!("  Type {} for commands.", "help".cyan());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", format!("{}>", service.open_job().job_id()).cyan());
        io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read input")?;

        match execute_line(service, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                tracing::warn!("Command failed: {:#}", e);
                println!("{} {:#}", "✗".red(), e);
            }
        }
    }

    let pending = service.open_job().products().len();
    if pending > 0 {
        println!(
            "{}",
            format!(
                "{} left open with {} product(s); they stay in the asset history but the job was not recorded.",
                service.open_job().job_id(),
                pending
            )
            .yellow()
        );
    }

    Ok(())
}

/// Parse and run a single shell line
fn execute_line(service: &mut InventoryService, line: &str) -> Result<Flow> {
    let tokens = shlex::split(line).context("Unbalanced quotes in input")?;
    if tokens.is_empty() {
        return Ok(Flow::Continue);
    }

    match SessionLine::try_parse_from(tokens) {
        Ok(parsed) => execute(service, parsed.command),
        Err(e) => {
            // Covers `help` and usage errors alike
            e.print().context("Failed to print usage")?;
            Ok(Flow::Continue)
        }
    }
}

fn execute(service: &mut InventoryService, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Add {
            model,
            serial,
            drive,
            condition,
            desktop,
            wiped,
        } => {
            let asset = service.add_product(NewAsset {
                model,
                serial_number: serial,
                hard_drive_details: drive,
                cosmetic_condition: condition,
                is_desktop: desktop,
                is_hard_drive_wiped: wiped,
            })?;
            println!(
                "{} {}, {}, UID: {}",
                "Added:".green(),
                asset.model,
                asset.serial_number,
                asset.id.cyan()
            );
        }
        SessionCommand::Close => {
            let report = service.close_open_job()?;
            println!(
                "{}",
                format!(
                    "Job {} closed with {} products.",
                    report.job_id, report.total_count
                )
                .green()
            );
            history::print_report_summary(&report);
        }
        SessionCommand::Status => print_status(service),
        SessionCommand::Export => {
            if service.inventory().is_empty() {
                println!("{}", "No jobs to export.".yellow());
            } else {
                let path = service.export_inventory()?;
                println!(
                    "{} {}",
                    "Exported to".green(),
                    path.display().to_string().cyan()
                );
            }
        }
        SessionCommand::Pricing {
            desktop_charge,
            wipe_charge,
        } => {
            let current = service.pricing();
            let updated = PricingRule::new(
                desktop_charge.unwrap_or(current.desktop_charge),
                wipe_charge.unwrap_or(current.wipe_charge),
            );
            if updated != current {
                validate_pricing(&updated)?;
                service.set_pricing(updated);
            }
            println!("{} {}", "Pricing:".bold(), service.pricing());
        }
        SessionCommand::Detail { command } => detail::handle_detail_command(command, service)?,
        SessionCommand::History {
            job,
            serial,
            details,
        } => history::list_jobs(service, job.as_deref(), serial.as_deref(), details),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn print_status(service: &InventoryService) {
    let job = service.open_job();
    let preview = job.generate_report(&service.pricing());

    println!("{}", format!("Open job {}", job.job_id()).bold());
    println!("  Products:       {}", preview.total_count);
    println!("  Wiped drives:   {}", preview.wiped_drives_count);
    println!("  Cost so far:    {}", preview.total_cost.to_string().green());
    println!("  Pricing:        {}", service.pricing());
    println!("  Closed jobs:    {}", service.inventory().len());

    for asset in job.products() {
        history::print_asset(asset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refurb_store::{DataStore, DocumentRepository, XlsxExporter};
    use std::path::Path;

    fn start(dir: &Path) -> InventoryService {
        InventoryService::start(
            DataStore::new(dir),
            XlsxExporter::new(dir),
            PricingRule::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_and_close_through_shell() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        let flow = execute_line(
            &mut service,
            r#"add --model "OptiPlex 7050" --serial 7XK2 --drive "1TB HDD" --desktop --wiped"#,
        )
        .unwrap();
        assert_eq!(flow, Flow::Continue);

        let asset = &service.open_job().products()[0];
        assert_eq!(asset.model, "OptiPlex 7050");
        assert_eq!(asset.hard_drive_details, "1TB HDD");
        assert!(asset.is_desktop && asset.is_hard_drive_wiped);

        execute_line(&mut service, "close").unwrap();
        let saved = DataStore::new(dir.path()).job_history.load().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].total_cost, Decimal::new(125, 1));
        assert_eq!(service.open_job().job_id(), "JOB-2");
    }

    #[test]
    fn test_pricing_command_updates_rule() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        execute_line(&mut service, "pricing --desktop-charge 8").unwrap();
        assert_eq!(
            service.pricing(),
            PricingRule::new(Decimal::new(8, 0), Decimal::new(75, 1))
        );

        assert!(execute_line(&mut service, "pricing --wipe-charge -1").is_err());
        assert_eq!(service.pricing().wipe_charge, Decimal::new(75, 1));
    }

    #[test]
    fn test_detail_command_in_shell() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        execute_line(&mut service, r#"detail add model "ThinkPad T480""#).unwrap();
        assert_eq!(service.details().model, ["ThinkPad T480"]);
    }

    #[test]
    fn test_invalid_asset_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        assert!(execute_line(&mut service, r#"add --model "" --serial SN1"#).is_err());
        assert!(service.open_job().products().is_empty());
    }

    #[test]
    fn test_quit_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        assert_eq!(execute_line(&mut service, "   ").unwrap(), Flow::Continue);
        assert_eq!(execute_line(&mut service, "quit").unwrap(), Flow::Quit);
        assert_eq!(execute_line(&mut service, "exit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_usage_errors_keep_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        assert_eq!(execute_line(&mut service, "frobnicate").unwrap(), Flow::Continue);
        assert_eq!(execute_line(&mut service, "add --model X").unwrap(), Flow::Continue);
        assert!(execute_line(&mut service, r#"add --model "unterminated"#).is_err());
    }

    #[test]
    fn test_export_in_shell() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = start(dir.path());

        // Nothing closed yet: no file written
        execute_line(&mut service, "export").unwrap();
        assert!(!dir.path().join("JOB-1_export_1.xlsx").exists());

        execute_line(&mut service, "add --model M --serial S").unwrap();
        execute_line(&mut service, "close").unwrap();
        execute_line(&mut service, "export").unwrap();
        assert!(dir.path().join("JOB-2_export_1.xlsx").exists());
    }
}
