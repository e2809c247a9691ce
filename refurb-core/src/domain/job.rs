//! Job domain types

use crate::domain::{Asset, Report};
use crate::error::{CoreError, Result};
use crate::ids::IdAllocator;
use crate::pricing::PricingRule;

/// A batch of asset intake
///
/// A job accepts assets while open. Closing it is a one-way transition that
/// freezes the asset list and produces its [`Report`].
#[derive(Debug, Clone)]
pub struct Job {
    job_id: String,
    products: Vec<Asset>,
    state: JobState,
}

/// Job lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Accepting assets
    Open,

    /// Terminal; holds the report computed at closure
    Closed(Report),
}

impl Job {
    /// Opens a new job with the next id from `ids`
    pub fn open(ids: &mut IdAllocator) -> Result<Self> {
        Ok(Self::with_id(ids.next_id()?))
    }

    /// Opens a job with an explicit id
    pub fn with_id(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            products: Vec::new(),
            state: JobState::Open,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn products(&self) -> &[Asset] {
        &self.products
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, JobState::Open)
    }

    /// The closure report, if the job has been closed
    pub fn report(&self) -> Option<&Report> {
        match &self.state {
            JobState::Closed(report) => Some(report),
            JobState::Open => None,
        }
    }

    /// Appends an asset to an open job
    ///
    /// Fails with [`CoreError::InvalidState`] once the job is closed; the
    /// asset list is left untouched.
    pub fn add_product(&mut self, asset: Asset) -> Result<()> {
        if !self.is_open() {
            return Err(CoreError::InvalidState(format!(
                "Cannot add {} to job {}: job is closed",
                asset.id, self.job_id
            )));
        }

        self.products.push(asset);
        Ok(())
    }

    /// Report for the current asset list without changing state
    pub fn generate_report(&self, pricing: &PricingRule) -> Report {
        Report::generate(&self.job_id, &self.products, pricing)
    }

    /// Closes the job and returns its report
    ///
    /// Happens exactly once; closing an already closed job fails with
    /// [`CoreError::InvalidState`].
    pub fn close(&mut self, pricing: &PricingRule) -> Result<Report> {
        if let JobState::Closed(_) = self.state {
            return Err(CoreError::InvalidState(format!(
                "Job {} is already closed",
                self.job_id
            )));
        }

        let report = self.generate_report(pricing);
        self.state = JobState::Closed(report.clone());
        Ok(report)
    }
}
