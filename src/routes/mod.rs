//! Router assembly.
//!
//! Binds the JSON API under `/api` with permissive CORS (the canvas host is
//! served from a different origin during development), request tracing, and
//! a static-file fallback for the built frontend.

pub mod floorplan;
pub mod openings;
pub mod rooms;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the directory the built frontend is served from.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend/dist"))
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_service = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/floorplan", get(floorplan::get_floorplan))
        .route("/api/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/api/rooms/{id}",
            get(rooms::get_room).patch(rooms::update_room).delete(rooms::delete_room),
        )
        .route("/api/doors", post(openings::create_door))
        .route("/api/doors/{id}", delete(openings::delete_door))
        .route("/api/windows", post(openings::create_window))
        .route("/api/windows/{id}", delete(openings::delete_window))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
        .fallback_service(static_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
