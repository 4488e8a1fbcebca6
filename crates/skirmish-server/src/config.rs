//! Server configuration from environment variables.
//!
//! - `SKIRMISH_PORT`: listen port (default "8000")
//! - `SKIRMISH_QRNG_URL`: base URL of the quantum-simulation collaborator;
//!   unset means the collaborator is unavailable and `/seed` always uses the
//!   local generator
//! - `SKIRMISH_QRNG_TIMEOUT_MS`: collaborator request timeout (default 2000)

use std::time::Duration;

/// Startup configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port.
    pub port: String,
    /// Optional quantum collaborator settings.
    pub qrng: Option<QrngConfig>,
}

/// Settings for the optional quantum-simulation collaborator.
#[derive(Debug, Clone)]
pub struct QrngConfig {
    /// Base URL of the collaborator service.
    pub url: String,
    /// Per-request timeout; a timed-out call is just another failure that
    /// falls back to the local generator.
    pub timeout: Duration,
}

impl ServerConfig {
    /// Reads configuration from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("SKIRMISH_PORT").unwrap_or_else(|_| "8000".to_string());

        let qrng = std::env::var("SKIRMISH_QRNG_URL").ok().map(|url| {
            let timeout_ms = std::env::var("SKIRMISH_QRNG_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(2000);
            QrngConfig {
                url,
                timeout: Duration::from_millis(timeout_ms),
            }
        });

        ServerConfig { port, qrng }
    }

    /// The socket address to bind.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
