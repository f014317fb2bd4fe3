//! Aggregate read endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::error;

use crate::layout::doc::FloorPlan;
use crate::services::plan::{self, PlanError};
use crate::state::AppState;

/// Error body served to clients: `{ "error": string }`. Storage failures
/// are masked behind a generic message; the detail goes to the log.
pub(crate) type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub(crate) fn plan_error_response(err: PlanError) -> ErrorResponse {
    let status = match err {
        PlanError::RoomNotFound(_) | PlanError::OpeningNotFound(_) => StatusCode::NOT_FOUND,
        PlanError::InvalidDimensions => StatusCode::BAD_REQUEST,
        PlanError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match &err {
        PlanError::Database(e) => {
            error!(error = %e, "plan query failed");
            "internal server error".to_owned()
        }
        other => other.to_string(),
    };
    (status, Json(serde_json::json!({ "error": message })))
}

/// `GET /api/floorplan` — the whole plan as one payload.
pub async fn get_floorplan(State(state): State<AppState>) -> Result<Json<FloorPlan>, ErrorResponse> {
    let plan = plan::fetch_floor_plan(&state.pool)
        .await
        .map_err(plan_error_response)?;
    Ok(Json(plan))
}

#[cfg(test)]
#[path = "floorplan_test.rs"]
mod tests;
