//! End-to-end API tests over the assembled router
//!
//! Each test drives the router directly with a one-shot request and
//! inspects the JSON payload, covering the full endpoint table.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vitrine::catalog::{CatalogStore, Item};
use vitrine::http_server::{AppState, HttpConfig, HttpServer};
use vitrine::observability::MetricsRegistry;
use vitrine::query::{CatalogEngine, PageDefaults};

fn router_for(items: Value) -> Router {
    let items: Vec<Item> = serde_json::from_value(items).unwrap();
    let engine = Arc::new(CatalogEngine::new(Arc::new(CatalogStore::new(items))));
    let state = AppState::new(
        engine,
        Arc::new(MetricsRegistry::new()),
        PageDefaults::default(),
    );
    HttpServer::new(HttpConfig::default(), state).router()
}

fn sample_router() -> Router {
    router_for(json!([
        {
            "id": 1, "title": "Wool Coat", "price": 180.0,
            "category": "Coats", "brand": "Acme", "designer": "Lee",
            "type": "Outerwear", "sizes": ["S", "M"], "trending_now": true
        },
        {
            "id": 2, "title": "Linen Shirt", "price": 60.0,
            "category": "coats", "brand": "Mode", "designer": "Kim",
            "type": "Outerwear", "fetured": true, "color": "red"
        },
        {
            "id": 3, "title": "Ankle Boots", "price": 120.0,
            "category": "Boots", "brand": "Acme",
            "type": "Shoes", "sizes": ["41", "42"]
        }
    ]))
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn catalog_default_listing() {
    let (status, body) = get(&sample_router(), "/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 9);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn catalog_title_sort_and_pagination() {
    let router = sample_router();

    let (_, body) = get(&router, "/catalog?sort_by=title&order=asc&limit=1&page=2").await;

    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 1);
    // Titles sort: Ankle Boots, Linen Shirt, Wool Coat
    assert_eq!(body["data"][0]["id"], 2);
}

#[tokio::test]
async fn catalog_filters_combine() {
    let router = sample_router();

    let (_, body) = get(&router, "/catalog?brand=acme&min_price=150").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 1);

    let (_, body) = get(&router, "/catalog?size=41,XL").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 3);
}

#[tokio::test]
async fn catalog_malformed_params_degrade() {
    let (status, body) = get(
        &sample_router(),
        "/catalog?sort_by=rating&order=sideways&page=abc&limit=-2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 9);
}

#[tokio::test]
async fn item_lookup_found_and_missing() {
    let router = sample_router();

    let (status, body) = get(&router, "/catalog/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Linen Shirt");
    // Fields outside the canonical schema are echoed back
    assert_eq!(body["color"], "red");

    let (status, body) = get(&router, "/catalog/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn featured_list_and_empty_case() {
    let router = sample_router();

    let (status, body) = get(&router, "/fetured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 2);

    let empty = router_for(json!([{"id": 1, "title": "X", "price": 1.0}]));
    let (status, body) = get(&empty, "/fetured").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Items not found");
}

#[tokio::test]
async fn distinct_value_listings() {
    let router = sample_router();

    let (_, brands) = get(&router, "/brands").await;
    assert_eq!(brands, json!(["Acme", "Mode"]));

    let (_, designers) = get(&router, "/designers").await;
    assert_eq!(designers, json!(["Lee", "Kim"]));

    let (_, categories) = get(&router, "/categories").await;
    assert_eq!(categories, json!(["coats", "boots"]));

    let (_, types) = get(&router, "/types").await;
    assert_eq!(types, json!(["Outerwear", "Shoes"]));
}

#[tokio::test]
async fn categories_grouped_by_type() {
    let (status, body) = get(&sample_router(), "/categories_by_types").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Outerwear"], json!(["coats"]));
    assert_eq!(body["Shoes"], json!(["boots"]));

    let empty = router_for(json!([]));
    let (status, body) = get(&empty, "/categories_by_types").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Types and categories not found");
}

#[tokio::test]
async fn health_reports_item_count() {
    let (status, body) = get(&sample_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["items"], 3);
    assert_eq!(body["metrics"]["list_queries"], 0);
}

#[tokio::test]
async fn permissive_cors_allows_any_origin() {
    let router = sample_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/catalog")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allow = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap();
    assert_eq!(allow, "*");
}
