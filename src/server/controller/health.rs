use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Liveness probe
///
/// Answers without touching the database.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
