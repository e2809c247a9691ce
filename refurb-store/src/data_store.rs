//! Data directory layout
//!
//! Groups the three persisted documents that live side by side in one
//! directory.

use refurb_core::domain::{Asset, Details, Report};
use std::path::{Path, PathBuf};

use crate::repository::JsonFileRepository;

/// File holding the detail choice lists
pub const DETAILS_FILE: &str = "details.json";

/// File holding every closed-job report
pub const JOB_HISTORY_FILE: &str = "job_history.json";

/// File holding every asset ever created
pub const ASSET_HISTORY_FILE: &str = "asset_history.json";

pub type DetailsRepository = JsonFileRepository<Details>;
pub type JobHistoryRepository = JsonFileRepository<Vec<Report>>;
pub type AssetHistoryRepository = JsonFileRepository<Vec<Asset>>;

/// Repositories for every document under a data directory
///
/// Documents are loaded and saved independently; nothing keeps them
/// consistent with each other.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
    pub details: DetailsRepository,
    pub job_history: JobHistoryRepository,
    pub asset_history: AssetHistoryRepository,
}

impl DataStore {
    /// Creates a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            details: JsonFileRepository::new(dir.join(DETAILS_FILE)),
            job_history: JsonFileRepository::new(dir.join(JOB_HISTORY_FILE)),
            asset_history: JsonFileRepository::new(dir.join(ASSET_HISTORY_FILE)),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DocumentRepository;
    use refurb_core::pricing::PricingRule;

    #[test]
    fn test_file_layout() {
        let store = DataStore::new("/var/lib/refurb");

        assert_eq!(store.dir(), Path::new("/var/lib/refurb"));
        assert_eq!(
            store.details.path(),
            Path::new("/var/lib/refurb/details.json")
        );
        assert_eq!(
            store.job_history.path(),
            Path::new("/var/lib/refurb/job_history.json")
        );
        assert_eq!(
            store.asset_history.path(),
            Path::new("/var/lib/refurb/asset_history.json")
        );
    }

    #[test]
    fn test_fresh_directory_loads_empty_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(dir.path());

        assert_eq!(store.details.load().unwrap(), Details::default());
        assert!(store.job_history.load().unwrap().is_empty());
        assert!(store.asset_history.load().unwrap().is_empty());
    }

    #[test]
    fn test_job_history_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(dir.path());

        let products = vec![Asset {
            id: "Asset-1".to_string(),
            model: "OptiPlex 3060".to_string(),
            serial_number: "7XK2".to_string(),
            hard_drive_details: "1TB HDD".to_string(),
            cosmetic_condition: "Grade B".to_string(),
            is_desktop: true,
            is_hard_drive_wiped: true,
        }];
        let history = vec![Report::generate("JOB-1", &products, &PricingRule::default())];

        store.job_history.save(&history).unwrap();
        assert_eq!(store.job_history.load().unwrap(), history);

        // Other documents are unaffected
        assert!(store.asset_history.load().unwrap().is_empty());
    }
}
