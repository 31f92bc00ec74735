//! CLI command implementations
//!
//! Boot sequence for `serve`: load config, load the catalog (fatal on
//! any violation), construct the store/engine/state explicitly, then
//! hand off to the async server. `check` runs the same load path and
//! prints a summary instead of serving.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::ServiceConfig;
use crate::http_server::{AppState, HttpServer};
use crate::observability::{Logger, MetricsRegistry};
use crate::query::{CatalogEngine, Facet, PageDefaults};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
    }
}

/// Load the catalog and enter the HTTP serving loop.
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port_override {
        config.http.port = port;
    }

    let store = load_store(&config)?;
    let state = build_state(store, &config);

    let server = HttpServer::new(config.http.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate the config and catalog file and print a summary.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store = load_store(&config)?;

    let engine = CatalogEngine::new(Arc::new(store));

    println!("catalog file: {}", config.data_file);
    println!("items:        {}", engine.store().len());
    println!("brands:       {}", engine.distinct(Facet::Brand).len());
    println!("designers:    {}", engine.distinct(Facet::Designer).len());
    println!("categories:   {}", engine.distinct(Facet::Category).len());
    println!("types:        {}", engine.distinct(Facet::Kind).len());
    println!("featured:     {}", engine.featured().len());

    Ok(())
}

fn load_store(config: &ServiceConfig) -> CliResult<CatalogStore> {
    let store = CatalogStore::from_file(&config.data_file)?;

    Logger::info(
        "CATALOG_LOADED",
        &[
            ("file", &config.data_file),
            ("items", &store.len().to_string()),
        ],
    );

    Ok(store)
}

fn build_state(store: CatalogStore, config: &ServiceConfig) -> AppState {
    let engine = Arc::new(CatalogEngine::new(Arc::new(store)));
    let metrics = Arc::new(MetricsRegistry::new());
    let page_defaults = PageDefaults {
        limit: config.page_size,
        max_limit: config.max_page_size,
    };

    AppState::new(engine, metrics, page_defaults)
}
