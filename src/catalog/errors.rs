//! Catalog load errors
//!
//! All load errors are fatal: a service without its catalog has nothing
//! to serve, so boot stops on the first one.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading the catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid JSON array of items
    #[error("catalog file {path} is not a valid item array: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two items share an identifier
    #[error("duplicate item id {id} in catalog file")]
    DuplicateId { id: u64 },
}
