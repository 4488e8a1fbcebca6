//! Dialogue handler.
//!
//! Returns a fixed stub line for now. The interface contract to preserve
//! when a real text-generation collaborator lands: the request carries the
//! full chat context, the response carries a single line plus a latency
//! measurement.

use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::schema::say::{parse_chat_request, ChatResponse};

/// Produces an NPC dialogue line for the posted chat context.
///
/// `POST /say`
pub async fn say(Json(body): Json<Value>) -> Result<Json<ChatResponse>, ApiError> {
    let req = parse_chat_request(&body).map_err(ApiError::ValidationFailed)?;

    tracing::debug!(turns = req.history.len(), "dialogue stub requested");

    Ok(Json(ChatResponse::stub()))
}
