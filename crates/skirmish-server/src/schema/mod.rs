//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for a specific
//! endpoint, plus the manual shape validation that produces field-level
//! diagnostics. Types use serde derives for JSON serialization.

pub mod act;
pub mod diagnostics;
pub mod health;
pub mod metrics;
pub mod say;
pub mod seed;
