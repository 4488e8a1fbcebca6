//! HTTP handler modules for the skirmish API.
//!
//! Each sub-module implements thin handlers that validate requests, delegate
//! to `skirmish-core`, and return JSON responses. No game logic lives in
//! handlers.

pub mod act;
pub mod health;
pub mod metrics;
pub mod say;
pub mod seed;
