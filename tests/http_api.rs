//! HTTP API tests for the price route.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use price_server::store::{InjectedFailure, MemoryPriceStore};

mod common;

#[tokio::test]
async fn seeded_price_returns_found_body() {
    let store = Arc::new(MemoryPriceStore::new().with_price(42, Some(9.99)));
    let addr = common::start_server(store).await;

    let resp = reqwest::get(format!("http://{addr}/price/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"product_id": 42, "price": 9.99}));
}

#[tokio::test]
async fn missing_row_returns_null_not_zero() {
    let store = Arc::new(MemoryPriceStore::new().with_price(42, Some(9.99)));
    let addr = common::start_server(store).await;

    let resp = reqwest::get(format!("http://{addr}/price/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn null_price_row_returns_null() {
    let store = Arc::new(MemoryPriceStore::new().with_price(7, None));
    let addr = common::start_server(store).await;

    let resp = reqwest::get(format!("http://{addr}/price/7")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), Value::Null);
}

#[tokio::test]
async fn unparsable_product_id_is_client_error() {
    let store = Arc::new(MemoryPriceStore::new().with_price(42, Some(9.99)));
    let addr = common::start_server(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/price/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Rejected before the store is touched.
    assert_eq!(store.connections_opened(), 0);
}

#[tokio::test]
async fn store_connection_failure_is_server_error() {
    let store = Arc::new(MemoryPriceStore::new().with_price(42, Some(9.99)));
    store.inject_failure(Some(InjectedFailure::Connection));
    let addr = common::start_server(store).await;

    let resp = reqwest::get(format!("http://{addr}/price/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn query_failure_is_server_error_then_recovers() {
    let store = Arc::new(MemoryPriceStore::new().with_price(42, Some(9.99)));
    let addr = common::start_server(store.clone()).await;

    store.inject_failure(Some(InjectedFailure::Query));
    let resp = reqwest::get(format!("http://{addr}/price/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    store.inject_failure(None);
    let resp = reqwest::get(format!("http://{addr}/price/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({"product_id": 42, "price": 9.99})
    );

    // The failed lookup released its connection like the others.
    assert_eq!(store.connections_opened(), store.connections_released());
}
