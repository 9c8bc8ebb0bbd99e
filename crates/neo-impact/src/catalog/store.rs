//! Catalog persistence and the shared in-memory snapshot

use parking_lot::RwLock;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::CatalogDocument;

/// JSON catalog file with atomic replacement
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the persisted catalog
    pub fn load(&self) -> Result<CatalogDocument> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::data_unavailable(format!(
                "catalog file {} not found",
                self.path.display()
            )),
            _ => Error::data_unavailable(format!(
                "failed to read catalog file {}: {}",
                self.path.display(),
                e
            )),
        })?;

        let document: CatalogDocument = serde_json::from_str(&content).map_err(|e| {
            Error::data_unavailable(format!(
                "catalog file {} is not a valid catalog: {}",
                self.path.display(),
                e
            ))
        })?;
        document.validate()?;

        tracing::info!(
            "Loaded {} NEOs ({} hazardous) from {}",
            document.metadata.count,
            document.metadata.hazardous_count,
            self.path.display()
        );
        Ok(document)
    }

    /// Write the catalog to a sibling temp file, then rename it over the
    /// destination so readers never see a partial file
    pub fn save(&self, document: &CatalogDocument) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, document)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::info!(
            "Saved {} NEOs to {}",
            document.metadata.count,
            self.path.display()
        );
        Ok(())
    }
}

/// Shared handle to the current catalog snapshot
///
/// Readers clone the inner `Arc`; `replace` swaps the whole document.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Option<Arc<CatalogDocument>>>>,
}

impl CatalogHandle {
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(Arc::new(document)))),
        }
    }

    /// Handle with no snapshot loaded yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<Arc<CatalogDocument>> {
        self.current.read().clone()
    }

    /// Current snapshot or `DataUnavailable`
    pub fn require(&self) -> Result<Arc<CatalogDocument>> {
        self.snapshot()
            .ok_or_else(|| Error::data_unavailable("NEO catalog is not loaded"))
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Publish a new snapshot
    pub fn replace(&self, document: CatalogDocument) -> Arc<CatalogDocument> {
        let document = Arc::new(document);
        *self.current.write() = Some(document.clone());
        document
    }
}
