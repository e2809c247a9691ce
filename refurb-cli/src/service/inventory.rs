//! Inventory service
//!
//! Owns the state of one operator session: the open job, the reports closed
//! during this run, the loaded documents and the id allocators. Every
//! operation is synchronous and either completes or returns an error.

use refurb_core::domain::{Asset, DetailField, Details, Job, NewAsset, Report};
use refurb_core::ids::IdAllocator;
use refurb_core::pricing::PricingRule;
use refurb_core::CoreError;
use refurb_store::{DataStore, DocumentRepository, ReportExporter, StoreError, XlsxExporter};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;

/// Service error type
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Validation, state or id corruption failure
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence or export failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Export requested with no closed jobs to write
    #[error("No jobs to export")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Operator session over the persisted documents
pub struct InventoryService {
    store: DataStore,
    exporter: XlsxExporter,
    pricing: PricingRule,
    asset_ids: IdAllocator,
    job_ids: IdAllocator,
    details: Details,
    job_history: Vec<Report>,
    asset_history: Vec<Asset>,
    inventory: Vec<Report>,
    open_job: Job,
}

impl InventoryService {
    /// Starts a session from CLI configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::start(
            DataStore::new(&config.data_dir),
            XlsxExporter::new(&config.export_dir),
            config.pricing,
        )
    }

    /// Loads every document, reseeds the id allocators and opens a job
    ///
    /// Asset ids continue above every asset found in either history
    /// document; job ids continue above the job history.
    pub fn start(store: DataStore, exporter: XlsxExporter, pricing: PricingRule) -> Result<Self> {
        let details = store.details.load()?;
        let job_history = store.job_history.load()?;
        let asset_history = store.asset_history.load()?;

        let mut job_ids = IdAllocator::jobs();
        job_ids.reseed(job_history.iter().map(|r| r.job_id.as_str()))?;

        let mut asset_ids = IdAllocator::assets();
        asset_ids.reseed(
            asset_history
                .iter()
                .chain(job_history.iter().flat_map(|r| r.products.iter()))
                .map(|a| a.id.as_str()),
        )?;

        let open_job = Job::open(&mut job_ids)?;

        tracing::info!(
            "Loaded {} job(s) and {} asset(s) from {}; opened {}",
            job_history.len(),
            asset_history.len(),
            store.dir().display(),
            open_job.job_id()
        );

        Ok(Self {
            store,
            exporter,
            pricing,
            asset_ids,
            job_ids,
            details,
            job_history,
            asset_history,
            inventory: Vec::new(),
            open_job,
        })
    }

    pub fn pricing(&self) -> PricingRule {
        self.pricing
    }

    /// Replaces the charges used for subsequent closures
    pub fn set_pricing(&mut self, pricing: PricingRule) {
        tracing::info!("Pricing changed: {} -> {}", self.pricing, pricing);
        self.pricing = pricing;
    }

    pub fn open_job(&self) -> &Job {
        &self.open_job
    }

    /// Reports closed during this session
    pub fn inventory(&self) -> &[Report] {
        &self.inventory
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn job_history(&self) -> &[Report] {
        &self.job_history
    }

    pub fn asset_history(&self) -> &[Asset] {
        &self.asset_history
    }

    /// Validates operator input and assigns the next asset id
    pub fn create_asset(&mut self, fields: NewAsset) -> Result<Asset> {
        Ok(fields.create(&mut self.asset_ids)?)
    }

    /// Adds an asset to the open job and appends it to the asset history
    ///
    /// The history is saved before the open job changes, so a failed save
    /// leaves the session exactly as it was.
    pub fn add_to_open_job(&mut self, asset: Asset) -> Result<()> {
        let mut job = self.open_job.clone();
        job.add_product(asset.clone())?;

        let asset_id = asset.id.clone();
        let mut asset_history = self.asset_history.clone();
        asset_history.push(asset);
        self.store.asset_history.save(&asset_history)?;

        tracing::info!("Added {} to {}", asset_id, job.job_id());

        self.open_job = job;
        self.asset_history = asset_history;
        Ok(())
    }

    /// Creates an asset from operator input and adds it to the open job
    ///
    /// The id is only consumed once the asset has been recorded.
    pub fn add_product(&mut self, fields: NewAsset) -> Result<Asset> {
        let asset_ids = self.asset_ids.clone();
        let asset = self.create_asset(fields)?;
        if let Err(e) = self.add_to_open_job(asset.clone()) {
            self.asset_ids = asset_ids;
            return Err(e);
        }
        Ok(asset)
    }

    /// Closes the open job, records its report and opens the next job
    ///
    /// Nothing changes in memory until the job history has been saved.
    pub fn close_open_job(&mut self) -> Result<Report> {
        let mut closing = self.open_job.clone();
        let report = closing.close(&self.pricing)?;

        let mut job_ids = self.job_ids.clone();
        let next_job = Job::open(&mut job_ids)?;

        let mut job_history = self.job_history.clone();
        job_history.push(report.clone());
        self.store.job_history.save(&job_history)?;

        self.job_history = job_history;
        self.inventory.push(report.clone());
        self.job_ids = job_ids;
        self.open_job = next_job;

        tracing::info!(
            "Closed {} with {} product(s), total cost {}; opened {}",
            report.job_id,
            report.total_count,
            report.total_cost,
            self.open_job.job_id()
        );

        Ok(report)
    }

    /// Writes reports to the next free export file for `base_name`
    pub fn export(&self, reports: &[Report], base_name: &str) -> Result<PathBuf> {
        if reports.is_empty() {
            return Err(InventoryError::NothingToExport);
        }

        Ok(self.exporter.export(reports, base_name)?)
    }

    /// Exports the reports closed during this session
    ///
    /// Files are named after the currently open job.
    pub fn export_inventory(&self) -> Result<PathBuf> {
        self.export(&self.inventory, self.open_job.job_id())
    }

    /// Appends a value to a detail choice list and saves the list
    pub fn add_detail_option(&mut self, field: DetailField, value: &str) -> Result<()> {
        let mut details = self.details.clone();
        details.add_option(field, value)?;
        self.store.details.save(&details)?;
        self.details = details;

        tracing::info!("Added {} option '{}'", field, value.trim());
        Ok(())
    }

    /// Job history filtered by job id and/or a contained serial number
    pub fn find_jobs(&self, job_id: Option<&str>, serial_number: Option<&str>) -> Vec<&Report> {
        self.job_history
            .iter()
            .filter(|r| job_id.is_none_or(|id| r.job_id == id))
            .filter(|r| serial_number.is_none_or(|sn| r.contains_serial(sn)))
            .collect()
    }

    /// Asset history filtered by serial number
    pub fn find_assets(&self, serial_number: Option<&str>) -> Vec<&Asset> {
        self.asset_history
            .iter()
            .filter(|a| serial_number.is_none_or(|sn| a.serial_number == sn))
            .collect()
    }
}
