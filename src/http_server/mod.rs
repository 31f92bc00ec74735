//! HTTP server for the catalog API
//!
//! Axum-based read-only surface over the query engine: the catalog
//! listing, single-item lookup, featured items, distinct-value
//! listings, the type/category grouping, and a health endpoint.

mod config;
mod errors;
mod response;
mod routes;
mod server;

pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{HealthResponse, MessageBody, PageResponse};
pub use routes::{catalog_routes, AppState};
pub use server::HttpServer;
