//! Field-level validation diagnostics.
//!
//! Shape validation reports every offending field in one response rather
//! than stopping at the first, so the client can fix a malformed payload in
//! a single round trip.

use serde::Serialize;

/// A single field-level problem in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path to the offending field (e.g., "obs.px", "history[2]").
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}
