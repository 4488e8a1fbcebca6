//! Shared application state.
//!
//! This service is stateless by contract: no request leaves anything behind
//! for the next one. [`AppState`] therefore carries only the optional
//! quantum collaborator client (which owns a reused `reqwest::Client`);
//! handlers that need nothing external take no state at all.

use crate::config::ServerConfig;
use crate::qrng::QrngClient;

/// Shared state for the HTTP server, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Quantum collaborator client, when one is configured.
    pub qrng: Option<QrngClient>,
}

impl AppState {
    /// Builds state from the startup configuration.
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            qrng: config.qrng.as_ref().map(QrngClient::new),
        }
    }

    /// State with no collaborator configured (for testing the local-only
    /// seed path).
    pub fn without_collaborator() -> Self {
        AppState { qrng: None }
    }
}
