//! Seed handler: procedural-content entropy with scoped fallback.
//!
//! Entropy providers are tried in a fixed order: the quantum collaborator
//! first (when configured), then the local PRNG. The fallback is
//! unconditional over every collaborator failure mode, so this endpoint
//! never surfaces a server error.

use axum::extract::{Query, State};
use axum::Json;

use skirmish_core::entropy::{self, SeedWidth};

use crate::error::ApiError;
use crate::schema::seed::{SeedQuery, SeedResponse};
use crate::state::AppState;

/// Returns a random seed of the requested bit-width.
///
/// `GET /seed?bits=N` (default 64, valid 1..=64)
pub async fn seed(
    State(state): State<AppState>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<SeedResponse>, ApiError> {
    let width = query
        .bits
        .map(SeedWidth::new)
        .transpose()?
        .unwrap_or_default();

    if let Some(qrng) = &state.qrng {
        match qrng.sample(width).await {
            Ok(seed) => return Ok(Json(SeedResponse { seed })),
            Err(err) => {
                tracing::debug!("quantum collaborator unavailable, using local prng: {}", err);
            }
        }
    }

    Ok(Json(SeedResponse {
        seed: entropy::local_seed(width),
    }))
}
