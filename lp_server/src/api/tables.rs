//! Table API handlers.
//!
//! Field names and card notation are the wire contract: camelCase keys,
//! cards as two-character strings (`"Ah"`, `"Tc"`), `holeCards` entries
//! either a two-string array or `null` for an empty seat.
//!
//! # Examples
//!
//! List all tables:
//! ```bash
//! curl http://localhost:3000/api/tables
//! ```
//!
//! Create a table:
//! ```bash
//! curl -X POST http://localhost:3000/api/tables \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "My Table", "capacity": 4}'
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use live_poker::{Card, CreateTableParams, HoleCards, RegistryError, Table, TableId};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct TableListItem {
    pub id: TableId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    pub name: String,
    pub capacity: usize,
    pub hole_cards: Option<Vec<Option<HoleCards>>>,
    pub community_cards: Option<Vec<Card>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_status(err: &RegistryError) -> StatusCode {
    match err {
        RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::InvalidCapacity(_) => StatusCode::BAD_REQUEST,
    }
}

/// List all tables.
///
/// Returns `200 OK` with the id and name of every table, in creation
/// order; capacity and cards are not exposed in the list view.
///
/// ```json
/// [{"id": 0, "name": "Live 1"}, {"id": 1, "name": "Live 2"}]
/// ```
pub async fn list_tables(State(state): State<AppState>) -> Json<Vec<TableListItem>> {
    let items = state
        .registry
        .list_tables()
        .await
        .into_iter()
        .map(|summary| TableListItem {
            id: summary.id,
            name: summary.name,
        })
        .collect();
    Json(items)
}

/// Get the full state of a specific table.
///
/// # Response
///
/// Returns `200 OK` with the table:
/// ```json
/// {
///   "id": 0,
///   "name": "Live 1",
///   "capacity": 4,
///   "holeCards": [["Ah", "Tc"], null, ["2s", "2d"], null],
///   "communityCards": ["Kd", "7h", "7c"]
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no table has that id
pub async fn get_table(
    State(state): State<AppState>,
    Path(table_id): Path<TableId>,
) -> Result<Json<Table>, (StatusCode, Json<ErrorResponse>)> {
    match state.registry.get_table(table_id).await {
        Ok(table) => Ok(Json(table)),
        Err(e) => Err((
            error_status(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// Create a static table.
///
/// The request carries already-validated parameters; `holeCards` and
/// `communityCards` are optional and default to an empty layout. Created
/// tables are never auto-advanced by the scheduler.
///
/// # Response
///
/// Returns `201 Created` with the stored table, echoing the newly
/// assigned id.
///
/// # Errors
///
/// - `400 Bad Request`: capacity is zero
pub async fn create_table(
    State(state): State<AppState>,
    Json(request): Json<CreateTableRequest>,
) -> Result<(StatusCode, Json<Table>), (StatusCode, Json<ErrorResponse>)> {
    let params = CreateTableParams {
        name: request.name,
        capacity: request.capacity,
        hole_cards: request.hole_cards,
        community_cards: request.community_cards,
    };
    match state.registry.create_table(params).await {
        Ok(table) => Ok((StatusCode::CREATED, Json(table))),
        Err(e) => Err((
            error_status(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
