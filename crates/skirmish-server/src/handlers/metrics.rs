//! Placeholder metrics handler.

use axum::Json;

use crate::schema::metrics::MetricsResponse;

/// Returns fixed placeholder numbers for a tiny dashboard.
///
/// `GET /metrics`
pub async fn metrics() -> Json<MetricsResponse> {
    Json(MetricsResponse::placeholder())
}
