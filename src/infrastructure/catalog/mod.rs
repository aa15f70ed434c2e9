//! Catalog loading.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::Catalog;

/// Catalog shipped with the binary.
pub const DEFAULT_CATALOG: &str = include_str!("default_catalog.toml");

/// Catalog file errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reads the reference data used by the browsing screens.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parses the embedded catalog.
    ///
    /// # Errors
    /// Returns error if the embedded file is malformed.
    pub fn embedded() -> Result<Catalog, CatalogError> {
        Ok(toml::from_str(DEFAULT_CATALOG)?)
    }

    /// Loads the catalog at `path`, writing the embedded one there first when
    /// the file does not exist. A malformed file falls back to the embedded
    /// catalog.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or written.
    pub fn load_or_install(path: &Path) -> Result<Catalog, CatalogError> {
        if !path.exists() {
            info!(path = ?path, "Catalog not found, installing default");
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CATALOG)?;
            return Self::embedded();
        }

        let content = std::fs::read_to_string(path)?;
        match toml::from_str::<Catalog>(&content) {
            Ok(catalog) => {
                debug!(
                    categories = catalog.categories.len(),
                    listings = catalog.listings.len(),
                    "Catalog loaded"
                );
                Ok(catalog)
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse catalog, using embedded default");
                Self::embedded()
            }
        }
    }
}
