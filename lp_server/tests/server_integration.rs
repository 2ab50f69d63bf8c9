//! Integration tests for the HTTP adapter.
//!
//! Drives the router directly via `tower::ServiceExt::oneshot`, no socket
//! binding and no scheduler; the registry is seeded the same way the
//! server seeds it at startup.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use live_poker::TableRegistry;
use lp_server::api::{AppState, create_router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot` method

/// Router over a registry with 10 seeded simulated tables.
async fn create_test_app() -> (axum::Router, Arc<TableRegistry>) {
    let registry = Arc::new(TableRegistry::new());
    registry.seed_tables(10).await;
    let app = create_router(AppState {
        registry: registry.clone(),
    });
    (app, registry)
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_card_notation(value: &Value) {
    let s = value.as_str().expect("card should be a string");
    let mut chars = s.chars();
    let rank = chars.next().unwrap();
    let suit = chars.next().unwrap();
    assert!(chars.next().is_none(), "card {s:?} longer than 2 chars");
    assert!("23456789TJQKA".contains(rank), "bad rank in {s:?}");
    assert!("hsdc".contains(suit), "bad suit in {s:?}");
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tables"], 10);
}

#[tokio::test]
async fn test_list_tables_returns_id_and_name_only() {
    let (app, _) = create_test_app().await;

    let (status, body) = get(&app, "/api/tables").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["id"], i as i64);
        assert_eq!(item["name"], format!("Live {}", i + 1));
        assert!(item.get("capacity").is_none());
        assert!(item.get("holeCards").is_none());
    }
}

#[tokio::test]
async fn test_get_table_exposes_full_card_state() {
    let (app, _) = create_test_app().await;

    let (status, body) = get(&app, "/api/tables/0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 0);
    assert_eq!(body["name"], "Live 1");

    let capacity = body["capacity"].as_u64().unwrap();
    assert!((2..=7).contains(&capacity));

    let hole_cards = body["holeCards"].as_array().unwrap();
    assert_eq!(hole_cards.len(), capacity as usize);
    for seat in hole_cards {
        if !seat.is_null() {
            let hand = seat.as_array().unwrap();
            assert_eq!(hand.len(), 2);
            hand.iter().for_each(assert_card_notation);
        }
    }

    let board = body["communityCards"].as_array().unwrap();
    assert!(matches!(board.len(), 0 | 3 | 4 | 5));
    board.iter().for_each(assert_card_notation);
}

#[tokio::test]
async fn test_get_unknown_table_is_404() {
    let (app, _) = create_test_app().await;

    let (status, body) = get(&app, "/api/tables/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Table 9999 not found");
}

#[tokio::test]
async fn test_create_table_assigns_next_id() {
    let (app, _) = create_test_app().await;

    let (status, body) = post(
        &app,
        "/api/tables",
        json!({"name": "My Table", "capacity": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 10);
    assert_eq!(body["name"], "My Table");
    assert_eq!(body["capacity"], 4);
    assert_eq!(body["holeCards"], json!([null, null, null, null]));
    assert_eq!(body["communityCards"], json!([]));

    // Created table is readable and unchanged.
    let (status, fetched) = get(&app, "/api/tables/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_table_echoes_provided_cards() {
    let (app, _) = create_test_app().await;

    let (status, body) = post(
        &app,
        "/api/tables",
        json!({
            "name": "Replay",
            "capacity": 2,
            "holeCards": [["Ah", "Td"], null],
            "communityCards": ["2c", "3d", "4h"],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["holeCards"], json!([["Ah", "Td"], null]));
    assert_eq!(body["communityCards"], json!(["2c", "3d", "4h"]));
}

#[tokio::test]
async fn test_create_table_rejects_zero_capacity() {
    let (app, registry) = create_test_app().await;

    let (status, body) = post(&app, "/api/tables", json!({"name": "Bad", "capacity": 0})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Capacity"));
    assert_eq!(registry.table_count().await, 10);
}

#[tokio::test]
async fn test_created_tables_are_not_simulated() {
    let (app, registry) = create_test_app().await;

    post(&app, "/api/tables", json!({"name": "Static", "capacity": 3})).await;
    registry.advance_all_simulated().await;

    let (_, body) = get(&app, "/api/tables/10").await;
    assert_eq!(body["communityCards"], json!([]));
    assert_eq!(body["holeCards"], json!([null, null, null]));
}
