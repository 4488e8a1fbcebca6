//! Liveness handler.

use axum::Json;

use crate::schema::health::HealthResponse;

/// Quick check that the server is accepting connections.
///
/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}
