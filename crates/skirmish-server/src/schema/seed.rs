//! `/seed` query and response types.

use serde::{Deserialize, Serialize};

/// Query parameters for `/seed`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SeedQuery {
    /// Requested seed width in bits (default 64, valid 1..=64).
    #[serde(default)]
    pub bits: Option<u32>,
}

/// Response for `/seed`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeedResponse {
    /// A uniform random integer of the requested width.
    pub seed: u64,
}
