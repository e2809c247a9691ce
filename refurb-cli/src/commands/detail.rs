//! Detail command handlers
//!
//! Adds to and lists the choice lists offered during intake.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use refurb_core::domain::DetailField;

use crate::service::InventoryService;

/// Detail subcommands
#[derive(Subcommand)]
pub enum DetailCommands {
    /// Add a value to a choice list
    Add {
        /// model, serial-number, hard-drive-details or cosmetic-condition
        field: DetailField,

        /// Value to append
        value: String,
    },
    /// Show choice lists
    List {
        /// Only show this list
        field: Option<DetailField>,
    },
}

/// Handle detail commands
pub fn handle_detail_command(command: DetailCommands, service: &mut InventoryService) -> Result<()> {
    match command {
        DetailCommands::Add { field, value } => {
            service.add_detail_option(field, &value)?;
            println!(
                "{} {} to {}",
                "✓ Added".green(),
                value.trim().cyan(),
                field.label()
            );
            Ok(())
        }
        DetailCommands::List { field } => {
            match field {
                Some(field) => print_options(service, field),
                None => DetailField::ALL
                    .into_iter()
                    .for_each(|field| print_options(service, field)),
            }
            Ok(())
        }
    }
}

fn print_options(service: &InventoryService, field: DetailField) {
    let options = service.details().options(field);

    println!("{}", field.label().bold());
    if options.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for option in options {
        println!("  {} {}", "▸".cyan(), option);
    }
}
