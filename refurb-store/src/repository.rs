//! Document repositories
//!
//! Each persisted document (detail lists, job history, asset history) is a
//! single JSON file loaded and saved wholesale. There is no file locking and
//! no rename-on-write: two processes saving the same document will clobber
//! each other, and the last write wins.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StoreError};

/// Repository trait for a whole-document store
pub trait DocumentRepository: Send + Sync {
    /// Stored document type
    type Document;

    /// Loads the document
    ///
    /// Returns the empty default when nothing has been saved yet.
    fn load(&self) -> Result<Self::Document>;

    /// Replaces the stored document
    fn save(&self, document: &Self::Document) -> Result<()>;
}

/// JSON file implementation of DocumentRepository
#[derive(Debug, Clone)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _document: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    /// Creates a repository backed by the file at `path`
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> DocumentRepository for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    type Document = T;

    fn load(&self) -> Result<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, starting empty", self.path.display());
                return Ok(T::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document = serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded {}", self.path.display());
        Ok(document)
    }

    fn save(&self, document: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(document).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {}", self.path.display());
        Ok(())
    }
}
