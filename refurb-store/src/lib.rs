//! Refurb Store
//!
//! Persistence and export for the refurb intake tool.
//!
//! # Documents
//!
//! Three JSON documents live side by side in a data directory:
//! - `details.json`: choice lists per asset attribute
//! - `job_history.json`: every closed-job report
//! - `asset_history.json`: every asset ever created
//!
//! Each is loaded and saved wholesale through a [`DocumentRepository`]. A
//! missing file loads as an empty document; a file that is not valid JSON or
//! does not match the record schema is a [`StoreError::Malformed`]. There is
//! no schema version: changing a record's shape breaks existing files.
//!
//! # Example
//!
//! ```no_run
//! use refurb_store::{DataStore, DocumentRepository, ReportExporter, XlsxExporter};
//!
//! let store = DataStore::new(".");
//! let history = store.job_history.load()?;
//!
//! let exporter = XlsxExporter::new(".");
//! let path = exporter.export(&history, "job_history")?;
//! println!("Exported to {}", path.display());
//! # Ok::<(), refurb_store::StoreError>(())
//! ```

mod data_store;
mod error;
mod export;
mod repository;

pub use data_store::{
    ASSET_HISTORY_FILE, AssetHistoryRepository, DETAILS_FILE, DataStore, DetailsRepository,
    JOB_HISTORY_FILE, JobHistoryRepository,
};
pub use error::{Result, StoreError};
pub use export::{
    EXPORT_COLUMNS, EXPORT_EXTENSION, ExportRow, ReportExporter, XlsxExporter, export_file_name,
    flatten,
};
pub use repository::{DocumentRepository, JsonFileRepository};
