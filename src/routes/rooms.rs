//! Room CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::layout::consts::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use crate::layout::doc::Room;
use crate::routes::floorplan::{ErrorResponse, plan_error_response};
use crate::services::plan::{self, RoomPatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoomBody {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomBody {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Fill in creation defaults: an untitled room of default size at the
/// origin.
pub(crate) fn creation_args(body: CreateRoomBody) -> (String, f64, f64, f64, f64) {
    (
        body.name.unwrap_or_else(|| "Untitled Room".to_owned()),
        body.width.unwrap_or(DEFAULT_ROOM_WIDTH),
        body.height.unwrap_or(DEFAULT_ROOM_HEIGHT),
        body.x.unwrap_or(0.0),
        body.y.unwrap_or(0.0),
    )
}

pub(crate) fn patch_from_body(body: UpdateRoomBody) -> RoomPatch {
    RoomPatch { name: body.name, width: body.width, height: body.height, x: body.x, y: body.y }
}

/// `GET /api/rooms` — list all rooms.
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, ErrorResponse> {
    let rooms = plan::list_rooms(&state.pool)
        .await
        .map_err(plan_error_response)?;
    Ok(Json(rooms))
}

/// `POST /api/rooms` — create a room.
pub async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<CreateRoomBody>,
) -> Result<(StatusCode, Json<Room>), ErrorResponse> {
    let (name, width, height, x, y) = creation_args(body);
    let room = plan::create_room(&state.pool, &name, width, height, x, y)
        .await
        .map_err(plan_error_response)?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// `GET /api/rooms/:id` — fetch one room.
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Room>, ErrorResponse> {
    let room = plan::get_room(&state.pool, id)
        .await
        .map_err(plan_error_response)?;
    Ok(Json(room))
}

/// `PATCH /api/rooms/:id` — sparse update.
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoomBody>,
) -> Result<Json<Room>, ErrorResponse> {
    let room = plan::update_room(&state.pool, id, patch_from_body(body))
        .await
        .map_err(plan_error_response)?;
    Ok(Json(room))
}

/// `DELETE /api/rooms/:id` — delete a room and, via the schema cascade, its
/// openings.
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    plan::delete_room(&state.pool, id)
        .await
        .map_err(plan_error_response)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;
