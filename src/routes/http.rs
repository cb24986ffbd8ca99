// GET handlers: version, api/dashboard

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/dashboard: latest derived snapshot; 503 until the first tick
/// has published one.
pub(super) async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.latest.read().ok().and_then(|cell| cell.clone());
    match snapshot {
        Some(s) => axum::Json(s).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "no snapshot yet").into_response(),
    }
}
