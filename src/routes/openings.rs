//! Door and window routes. The two kinds share one record shape; each
//! handler pins the table its operation targets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::layout::doc::Opening;
use crate::routes::floorplan::{ErrorResponse, plan_error_response};
use crate::services::plan::{self, OpeningKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateOpeningBody {
    pub room_id: Uuid,
    pub position: String,
    pub width: f64,
}

async fn create(
    state: &AppState,
    kind: OpeningKind,
    body: CreateOpeningBody,
) -> Result<(StatusCode, Json<Opening>), ErrorResponse> {
    let opening = plan::create_opening(&state.pool, kind, body.room_id, &body.position, body.width)
        .await
        .map_err(plan_error_response)?;
    Ok((StatusCode::CREATED, Json(opening)))
}

async fn remove(state: &AppState, kind: OpeningKind, id: Uuid) -> Result<Json<serde_json::Value>, ErrorResponse> {
    plan::delete_opening(&state.pool, kind, id)
        .await
        .map_err(plan_error_response)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/doors` — attach a door to a room.
pub async fn create_door(
    State(state): State<AppState>,
    Json(body): Json<CreateOpeningBody>,
) -> Result<(StatusCode, Json<Opening>), ErrorResponse> {
    create(&state, OpeningKind::Door, body).await
}

/// `DELETE /api/doors/:id` — remove a door.
pub async fn delete_door(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    remove(&state, OpeningKind::Door, id).await
}

/// `POST /api/windows` — attach a window to a room.
pub async fn create_window(
    State(state): State<AppState>,
    Json(body): Json<CreateOpeningBody>,
) -> Result<(StatusCode, Json<Opening>), ErrorResponse> {
    create(&state, OpeningKind::Window, body).await
}

/// `DELETE /api/windows/:id` — remove a window.
pub async fn delete_window(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    remove(&state, OpeningKind::Window, id).await
}
