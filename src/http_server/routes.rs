//! Catalog API route handlers
//!
//! Every endpoint is a read: handlers pull from the shared engine and
//! build a response value. The only error any of them can return is a
//! not-found.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::Item;
use crate::observability::MetricsRegistry;
use crate::query::{CatalogEngine, Facet, ListParams, PageDefaults};

use super::errors::{ApiError, ApiResult};
use super::response::{HealthResponse, PageResponse};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CatalogEngine>,
    pub metrics: Arc<MetricsRegistry>,
    pub page_defaults: PageDefaults,
}

impl AppState {
    pub fn new(
        engine: Arc<CatalogEngine>,
        metrics: Arc<MetricsRegistry>,
        page_defaults: PageDefaults,
    ) -> Self {
        Self {
            engine,
            metrics,
            page_defaults,
        }
    }
}

/// All catalog API routes.
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/catalog/:id", get(get_item))
        // the misspelling is the literal path in the public API
        .route("/fetured", get(featured_items))
        .route("/brands", get(list_brands))
        .route("/designers", get(list_designers))
        .route("/categories", get(list_categories))
        .route("/types", get(list_types))
        .route("/categories_by_types", get(categories_by_types))
        .route("/health", get(health))
        .with_state(state)
}

/// GET /catalog - filtered, sorted, paginated listing
async fn list_catalog(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Json<PageResponse> {
    state.metrics.increment_list_queries();

    let params = ListParams::from_query(&raw, state.page_defaults);
    Json(PageResponse::from(state.engine.list(&params)))
}

/// GET /catalog/:id - single item lookup
async fn get_item(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Item>> {
    state.metrics.increment_item_lookups();

    match state.engine.get_by_id(id) {
        Some(item) => Ok(Json(item.clone())),
        None => {
            state.metrics.increment_lookup_misses();
            Err(ApiError::ProductNotFound)
        }
    }
}

/// GET /fetured - all items carrying the promotional flag
async fn featured_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    state.metrics.increment_facet_queries();

    let items = state.engine.featured();
    if items.is_empty() {
        return Err(ApiError::ItemsNotFound);
    }
    Ok(Json(items))
}

/// GET /brands - distinct brand values
async fn list_brands(State(state): State<AppState>) -> Json<Vec<String>> {
    state.metrics.increment_facet_queries();
    Json(state.engine.distinct(Facet::Brand))
}

/// GET /designers - distinct designer values
async fn list_designers(State(state): State<AppState>) -> Json<Vec<String>> {
    state.metrics.increment_facet_queries();
    Json(state.engine.distinct(Facet::Designer))
}

/// GET /categories - distinct lower-cased category values
async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    state.metrics.increment_facet_queries();
    Json(state.engine.distinct(Facet::Category))
}

/// GET /types - distinct type values
async fn list_types(State(state): State<AppState>) -> Json<Vec<String>> {
    state.metrics.increment_facet_queries();
    Json(state.engine.distinct(Facet::Kind))
}

/// GET /categories_by_types - categories grouped under their type
async fn categories_by_types(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, Vec<String>>>> {
    state.metrics.increment_facet_queries();

    let grouped = state.engine.categories_by_type();
    if grouped.is_empty() {
        return Err(ApiError::GroupingNotFound);
    }
    Ok(Json(grouped))
}

/// GET /health - liveness plus operational counters
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.engine.store().len(),
        metrics: state.metrics.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use serde_json::json;

    fn test_state(items: serde_json::Value) -> AppState {
        let items: Vec<Item> = serde_json::from_value(items).unwrap();
        let engine = Arc::new(CatalogEngine::new(Arc::new(CatalogStore::new(items))));
        AppState::new(engine, Arc::new(MetricsRegistry::new()), PageDefaults::default())
    }

    #[test]
    fn test_router_builds() {
        let state = test_state(json!([]));
        let _router = catalog_routes(state);
    }

    #[tokio::test]
    async fn test_lookup_miss_counts_and_errors() {
        let state = test_state(json!([{"id": 1, "title": "A", "price": 1.0}]));

        let result = get_item(State(state.clone()), Path(99)).await;
        assert!(matches!(result, Err(ApiError::ProductNotFound)));
        assert_eq!(state.metrics.snapshot().lookup_misses, 1);
    }

    #[tokio::test]
    async fn test_featured_empty_is_not_found() {
        let state = test_state(json!([{"id": 1, "title": "A", "price": 1.0}]));

        let result = featured_items(State(state)).await;
        assert!(matches!(result, Err(ApiError::ItemsNotFound)));
    }
}
