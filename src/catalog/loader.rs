//! Catalog loader for reading the item file at startup
//!
//! The catalog is a single JSON document: an array of item objects.
//! It is read once at boot; a missing or malformed file is fatal, as is
//! a duplicate id (ids must be unique within the collection).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{CatalogError, CatalogResult};
use super::types::Item;

/// Reads the catalog file and validates collection invariants.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Creates a loader for the given catalog file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the full item collection.
    pub fn load(&self) -> CatalogResult<Vec<Item>> {
        let content = fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Self::check_unique_ids(&items)?;

        Ok(items)
    }

    /// Ids must be unique within the collection.
    fn check_unique_ids(items: &[Item]) -> CatalogResult<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }
        Ok(())
    }
}
