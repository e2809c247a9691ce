//! History command handlers
//!
//! Lists closed jobs and recorded assets, and holds the printers shared
//! with the session shell.

use colored::*;
use refurb_core::domain::{Asset, Report};

use crate::service::InventoryService;

/// List closed jobs, optionally filtered
pub fn list_jobs(
    service: &InventoryService,
    job_id: Option<&str>,
    serial_number: Option<&str>,
    details: bool,
) {
    let jobs = service.find_jobs(job_id, serial_number);

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} of {} job(s):",
            jobs.len(),
            service.job_history().len()
        )
        .bold()
    );
    println!();
    for report in jobs {
        if details {
            print_report_details(report);
        } else {
            print_report_summary(report);
        }
    }
}

/// List recorded assets, optionally filtered by serial number
pub fn list_assets(service: &InventoryService, serial_number: Option<&str>) {
    let assets = service.find_assets(serial_number);

    if assets.is_empty() {
        println!("{}", "No assets found.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} of {} asset(s):",
            assets.len(),
            service.asset_history().len()
        )
        .bold()
    );
    println!();
    for asset in assets {
        print_asset(asset);
    }
}

/// Print a one-line job summary
pub fn print_report_summary(report: &Report) {
    println!(
        "  {} {}  products: {}  wiped: {}  total: {}",
        "▸".cyan(),
        report.job_id.cyan(),
        report.total_count,
        report.wiped_drives_count,
        report.total_cost.to_string().green()
    );
}

/// Print a job with all of its assets
pub fn print_report_details(report: &Report) {
    println!("{}", format!("Job {}", report.job_id).bold());
    println!("  Products:     {}", report.total_count);
    println!("  Wiped drives: {}", report.wiped_drives_count);
    println!("  Total cost:   {}", report.total_cost.to_string().green());

    if !report.products.is_empty() {
        println!();
        for asset in &report.products {
            print_asset(asset);
        }
    }
    println!();
}

/// Print a single asset
pub fn print_asset(asset: &Asset) {
    println!(
        "  {} {}  {}  {}",
        "▸".cyan(),
        asset.id.cyan(),
        asset.model,
        asset.serial_number.dimmed()
    );

    let mut flags = Vec::new();
    if asset.is_desktop {
        flags.push("desktop");
    }
    if asset.is_hard_drive_wiped {
        flags.push("wiped");
    }

    if !asset.hard_drive_details.is_empty() {
        println!("    Drive:     {}", asset.hard_drive_details.dimmed());
    }
    if !asset.cosmetic_condition.is_empty() {
        println!("    Condition: {}", asset.cosmetic_condition.dimmed());
    }
    if !flags.is_empty() {
        println!("    Flags:     {}", flags.join(", "));
    }
}
