//! Spreadsheet export of closed-job reports
//!
//! Reports are flattened to one row per asset and written to
//! `<base>_export_<n>.xlsx`, where `n` is the smallest number whose file does
//! not exist yet. Existing exports are never overwritten.
//!
//! The `Cost` column carries the owning job's total cost on every row, not a
//! per-asset cost. Existing spreadsheets built on these exports depend on
//! that layout.

use refurb_core::domain::{Asset, Report};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Result, StoreError};

/// Header row, in column order
pub const EXPORT_COLUMNS: [&str; 9] = [
    "Job ID",
    "Product ID",
    "Model",
    "Serial Number",
    "Hard Drive Details",
    "Cosmetic Condition",
    "Is Desktop",
    "Is Hard Drive Wiped",
    "Cost",
];

/// Extension of export files
pub const EXPORT_EXTENSION: &str = "xlsx";

/// One spreadsheet row
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow<'a> {
    pub job_id: &'a str,
    pub asset: &'a Asset,
    /// Total cost of the owning job
    pub cost: Decimal,
}

/// Flattens reports into one row per asset, preserving order
pub fn flatten(reports: &[Report]) -> Vec<ExportRow<'_>> {
    reports
        .iter()
        .flat_map(|report| {
            report.products.iter().map(move |asset| ExportRow {
                job_id: &report.job_id,
                asset,
                cost: report.total_cost,
            })
        })
        .collect()
}

/// File name for export number `n`
pub fn export_file_name(base_name: &str, n: u32) -> String {
    format!("{}_export_{}.{}", base_name, n, EXPORT_EXTENSION)
}

/// Writes reports to a tabular file and returns its path
pub trait ReportExporter {
    fn export(&self, reports: &[Report], base_name: &str) -> Result<PathBuf>;
}

/// Excel implementation of ReportExporter
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    output_dir: PathBuf,
}

impl XlsxExporter {
    /// Creates an exporter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Reserves the first free `<base>_export_<n>.xlsx`
    ///
    /// The file is created exclusively, so a name taken in the meantime by
    /// another writer is skipped rather than truncated.
    fn claim_file(&self, base_name: &str) -> Result<(PathBuf, File)> {
        let mut n = 1;
        loop {
            let path = self.output_dir.join(export_file_name(base_name, n));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(StoreError::export(path, e.to_string())),
            }
        }
    }
}

impl ReportExporter for XlsxExporter {
    fn export(&self, reports: &[Report], base_name: &str) -> Result<PathBuf> {
        validate_base_name(base_name).map_err(|message| {
            StoreError::export(self.output_dir.join(base_name), message)
        })?;

        let rows = flatten(reports);
        let costs = rows
            .iter()
            .map(|row| cell_cost(row.cost))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|message| StoreError::export(self.output_dir.join(base_name), message))?;
        let (path, file) = self.claim_file(base_name)?;

        if let Err(e) = write_workbook(&rows, &costs, file) {
            // Never leave a half-written export behind
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!("Failed to remove partial export {}: {}", path.display(), cleanup);
            }
            return Err(StoreError::export(path, e.to_string()));
        }

        info!("Exported {} row(s) to {}", rows.len(), path.display());
        Ok(path)
    }
}

fn validate_base_name(base_name: &str) -> std::result::Result<(), String> {
    if base_name.trim().is_empty() {
        return Err("export name cannot be empty".to_string());
    }

    if base_name.contains(['/', '\\']) || base_name == "." || base_name == ".." {
        return Err(format!("export name '{}' must not contain a path", base_name));
    }

    Ok(())
}

/// Converts a cost to the float a spreadsheet cell holds
fn cell_cost(cost: Decimal) -> std::result::Result<f64, String> {
    cost.to_f64()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("cost {} cannot be written as a number", cost))
}

fn write_workbook(
    rows: &[ExportRow<'_>],
    costs: &[f64],
    file: File,
) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Export")?;

    for (col, title) in EXPORT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, title.len().max(12) as f64)?;
    }

    for (i, (row, cost)) in rows.iter().zip(costs).enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, row.job_id)?;
        sheet.write_string(r, 1, &row.asset.id)?;
        sheet.write_string(r, 2, &row.asset.model)?;
        sheet.write_string(r, 3, &row.asset.serial_number)?;
        sheet.write_string(r, 4, &row.asset.hard_drive_details)?;
        sheet.write_string(r, 5, &row.asset.cosmetic_condition)?;
        sheet.write_boolean(r, 6, row.asset.is_desktop)?;
        sheet.write_boolean(r, 7, row.asset.is_hard_drive_wiped)?;
        sheet.write_number(r, 8, *cost)?;
    }

    workbook.save_to_writer(file)
}
