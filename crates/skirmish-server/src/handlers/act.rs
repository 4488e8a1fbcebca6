//! Action handler: scripted NPC decision plus adaptive difficulty.

use axum::Json;
use serde_json::Value;

use skirmish_core::{difficulty, policy};

use crate::error::ApiError;
use crate::schema::act::{parse_act_request, ActionResponse};

/// Picks an NPC action and an aggression scalar for the posted observation.
///
/// `POST /act`
///
/// The body is shape-validated with field-level diagnostics; a malformed
/// observation is a 422, never a crash.
pub async fn act(Json(body): Json<Value>) -> Result<Json<ActionResponse>, ApiError> {
    let req = parse_act_request(&body).map_err(ApiError::ValidationFailed)?;

    let action = policy::choose_action(&req.obs);
    let aggression = difficulty::aggression(req.obs.player_score);

    Ok(Json(ActionResponse {
        action: action.code(),
        aggression,
    }))
}
