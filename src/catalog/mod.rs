//! Catalog module for vitrine
//!
//! Owns the item record model and its load-once-at-startup lifecycle:
//! - types: the canonical item schema
//! - loader: reads the catalog JSON file and checks invariants
//! - store: the immutable in-memory collection handed to the query engine

mod errors;
mod loader;
mod store;
mod types;

pub use errors::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use store::CatalogStore;
pub use types::Item;
