//! JSON file catalog source.
//!
//! Reads a `characters.json` file holding an array of
//! `{"name": ..., "attributes": {...}}` records.

use mindreader_application::ports::catalog_source::CatalogSource;
use mindreader_domain::{Catalog, CatalogLoadError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads the catalog from a JSON file on disk
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let location = self.path.display().to_string();
        debug!("Reading character catalog from {}", location);

        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogLoadError::Missing {
                location: location.clone(),
            },
            _ => CatalogLoadError::Unreadable {
                location: location.clone(),
                reason: e.to_string(),
            },
        })?;

        let catalog = Catalog::from_json_str(&content)?;
        info!(
            "Loaded {} characters with {} attributes from {}",
            catalog.len(),
            catalog.attribute_domain().len(),
            location
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
