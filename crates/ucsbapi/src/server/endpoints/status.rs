use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// GET /health
/// Liveness probe, reachable without credentials
#[cfg_attr(test, axum_macros::debug_handler)]
pub async fn get_health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}
