//! Export command handler

use anyhow::Result;
use colored::*;
use refurb_core::domain::Report;

use crate::service::InventoryService;

/// Base name used when exporting the whole history
const HISTORY_EXPORT_NAME: &str = "job_history";

/// Export persisted job history, optionally a single job
pub fn export_history(
    service: &InventoryService,
    job_id: Option<&str>,
    name: Option<&str>,
) -> Result<()> {
    let reports: Vec<Report> = service
        .find_jobs(job_id, None)
        .into_iter()
        .cloned()
        .collect();

    if reports.is_empty() {
        match job_id {
            Some(id) => println!("{}", format!("Job {} not found in history.", id).yellow()),
            None => println!("{}", "No jobs to export.".yellow()),
        }
        return Ok(());
    }

    let base_name = name.or(job_id).unwrap_or(HISTORY_EXPORT_NAME);
    let path = service.export(&reports, base_name)?;

    println!(
        "{} {}",
        "✓ Exported to".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
