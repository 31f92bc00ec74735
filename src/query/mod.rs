//! Catalog query engine
//!
//! The request-to-result pipeline: parameter normalization, sequential
//! filter application (logical AND), stable field sort, and page-slice
//! arithmetic. Every operation works on a per-request derived view of
//! the store; the loaded collection itself is never mutated.

mod engine;
mod filters;
mod params;

pub use engine::{CatalogEngine, Facet, PageSlice};
pub use filters::ItemFilters;
pub use params::{ListParams, PageDefaults, SortField, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};
