//! HTTP API for the simulated live tables.
//!
//! A thin adapter over the table registry: it maps the registry's
//! read/create operations to routes and status codes and owns no dealing
//! logic of its own. The scheduler mutates the same registry in the
//! background; the `RwLock` inside the registry serializes the two.
//!
//! # Endpoints
//!
//! ```text
//! GET  /health           - Server health status
//! GET  /api/tables       - List tables (id and name only)
//! GET  /api/tables/{id}  - Full table state
//! POST /api/tables       - Create a static (non-simulated) table
//! ```

pub mod tables;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
};
use live_poker::TableRegistry;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TableRegistry>,
}

/// Create the API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/tables",
            get(tables::list_tables).post(tables::create_table),
        )
        .route("/api/tables/{table_id}", get(tables::get_table))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring.
///
/// Always `200 OK`; reports the crate version and how many tables the
/// registry currently holds.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let table_count = state.registry.table_count().await;
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "tables": table_count,
    }))
}
