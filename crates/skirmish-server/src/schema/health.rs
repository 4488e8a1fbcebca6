//! `/health` response type.

use serde::Serialize;

/// Liveness payload. Always `{ "ok": true }`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn alive() -> Self {
        HealthResponse { ok: true }
    }
}
