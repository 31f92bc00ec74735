//! vitrine - a read-only catalog query service
//!
//! Loads a static product list from a JSON file at startup and serves
//! filter/sort/paginate queries over it via HTTP. The loaded collection
//! is immutable for the process lifetime; every request works on a
//! derived view.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod query;
