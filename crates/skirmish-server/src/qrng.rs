//! Quantum-simulation collaborator client for `/seed`.
//!
//! The collaborator is an external service that holds a fixed 6-qubit
//! register: each shot places every qubit in uniform superposition, measures
//! once, and yields one 6-character bitstring. Wire contract:
//!
//! `POST {url}/sample` with `{ "qubits": 6, "shots": N }` ->
//! `{ "bitstrings": ["101011", ...] }` (exactly N entries of register width).
//!
//! To honor an arbitrary requested seed width, [`QrngClient::sample`] asks
//! for enough shots to cover the width, concatenates the measured bits
//! MSB-first, and truncates. Every failure mode -- connect error, timeout,
//! non-2xx status, malformed payload -- maps into [`QrngError`]; the seed
//! handler treats all of them as "collaborator unavailable" and falls back
//! to the local PRNG.

use serde::Deserialize;
use serde_json::json;

use skirmish_core::entropy::SeedWidth;

use crate::config::QrngConfig;

/// Qubits measured per shot. Fixed by the collaborator's register, not by
/// the requested seed width.
pub const REGISTER_WIDTH: u32 = 6;

/// Failure modes of the collaborator path. None of these reach the caller
/// of `/seed`.
#[derive(Debug, thiserror::Error)]
pub enum QrngError {
    /// Transport-level failure, including timeouts.
    #[error("collaborator request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Collaborator answered with a non-success status.
    #[error("collaborator returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the wire contract.
    #[error("collaborator payload malformed: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Deserialize)]
struct SamplePayload {
    bitstrings: Vec<String>,
}

/// Client for the quantum-simulation collaborator.
#[derive(Debug, Clone)]
pub struct QrngClient {
    http: reqwest::Client,
    url: String,
    timeout: std::time::Duration,
}

impl QrngClient {
    pub fn new(config: &QrngConfig) -> Self {
        QrngClient {
            http: reqwest::Client::new(),
            url: config.url.clone(),
            timeout: config.timeout,
        }
    }

    /// Draws a seed of the requested width from the collaborator.
    pub async fn sample(&self, width: SeedWidth) -> Result<u64, QrngError> {
        let shots = width.bits().div_ceil(REGISTER_WIDTH);
        let endpoint = format!("{}/sample", self.url.trim_end_matches('/'));

        let response = self
            .http
            .post(&endpoint)
            .json(&json!({ "qubits": REGISTER_WIDTH, "shots": shots }))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QrngError::Status(status));
        }

        let payload: SamplePayload = response.json().await?;
        assemble_seed(&payload.bitstrings, shots, width)
    }
}

/// Concatenates measured bitstrings MSB-first and truncates to the requested
/// width.
fn assemble_seed(bitstrings: &[String], shots: u32, width: SeedWidth) -> Result<u64, QrngError> {
    if bitstrings.len() != shots as usize {
        return Err(QrngError::MalformedPayload(format!(
            "expected {} bitstrings, got {}",
            shots,
            bitstrings.len()
        )));
    }

    let mut bits = String::with_capacity((shots * REGISTER_WIDTH) as usize);
    for s in bitstrings {
        if s.len() != REGISTER_WIDTH as usize || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(QrngError::MalformedPayload(format!(
                "bad bitstring {:?}",
                s
            )));
        }
        bits.push_str(s);
    }

    let truncated = &bits[..width.bits() as usize];
    u64::from_str_radix(truncated, 2)
        .map_err(|err| QrngError::MalformedPayload(err.to_string()))
}
