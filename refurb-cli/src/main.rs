//! Refurb CLI
//!
//! Command-line interface for refurbished-electronics intake: record assets
//! into jobs, close jobs into priced reports and export job history.

mod commands;
mod config;
mod service;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use refurb_core::pricing::PricingRule;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "refurb")]
#[command(about = "Refurbished electronics intake and job tracking", long_about = None)]
struct Cli {
    /// Directory holding the JSON documents
    #[arg(long, env = "REFURB_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Directory receiving spreadsheet exports
    #[arg(long, env = "REFURB_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Charge per desktop
    #[arg(long, env = "REFURB_DESKTOP_CHARGE", default_value = "5")]
    desktop_charge: Decimal,

    /// Charge per wiped hard drive
    #[arg(long, env = "REFURB_WIPE_CHARGE", default_value = "7.5")]
    wipe_charge: Decimal,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::new(cli.data_dir, cli.export_dir)
        .with_pricing(PricingRule::new(cli.desktop_charge, cli.wipe_charge));
    config.validate()?;

    handle_command(cli.command, &config)
}

/// Initialize logging
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Filter used when `RUST_LOG` is unset
///
/// `refurb` is the log target of this binary's own modules.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "refurb=info,refurb_store=info"
    } else {
        "refurb=warn,refurb_store=warn"
    }
}
