//! `/metrics` response type.
//!
//! Placeholder numbers for a tiny dashboard; nothing is computed from
//! request history (there is none to compute from).

use serde::Serialize;

/// Fixed placeholder metrics payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsResponse {
    pub reward_mean: f64,
    pub ttk: f64,
    pub winrate: f64,
}

impl MetricsResponse {
    pub fn placeholder() -> Self {
        MetricsResponse {
            reward_mean: 0.73,
            ttk: 1.42,
            winrate: 0.58,
        }
    }
}
