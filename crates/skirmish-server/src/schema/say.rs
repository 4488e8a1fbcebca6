//! `/say` request/response types and shape validation.
//!
//! Only the shape of the chat context is validated; the contents (turn text,
//! lore, world entries) pass through untouched. The response is a fixed stub
//! until a real text-generation collaborator is wired in.

use serde::Serialize;
use serde_json::{Map, Value};

use super::diagnostics::FieldError;

/// Line returned for every well-formed `/say` request.
pub const STUB_LINE: &str = "Stay sharp. Adjusting tactics.";
/// Latency reported alongside the stub line.
pub const STUB_LATENCY_MS: i64 = 30;

/// Validated `/say` request: the full chat context for one NPC line.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Prior chat turns, order-significant.
    pub history: Vec<String>,
    /// Static lore blob.
    pub lore: String,
    /// Arbitrary world state, keyed by string.
    pub world: Map<String, Value>,
}

/// Response for `/say`: a single line plus a latency measurement.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub text: String,
    pub latency_ms: i64,
}

impl ChatResponse {
    /// The fixed placeholder reply.
    pub fn stub() -> Self {
        ChatResponse {
            text: STUB_LINE.to_string(),
            latency_ms: STUB_LATENCY_MS,
        }
    }
}

/// Validates the `/say` body shape.
///
/// `history` must be an array of strings (element problems are reported as
/// `history[i]`), `lore` a string, `world` an object. All problems are
/// collected before returning.
pub fn parse_chat_request(body: &Value) -> Result<ChatRequest, Vec<FieldError>> {
    let Some(root) = body.as_object() else {
        return Err(vec![FieldError::new("body", "expected a JSON object")]);
    };

    let mut errors = Vec::new();

    let history = match root.get("history") {
        None => {
            errors.push(FieldError::new("history", "missing field"));
            Vec::new()
        }
        Some(Value::Array(items)) => {
            let mut turns = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) => turns.push(s.to_string()),
                    None => errors.push(FieldError::new(
                        format!("history[{}]", i),
                        "expected a string",
                    )),
                }
            }
            turns
        }
        Some(_) => {
            errors.push(FieldError::new("history", "expected an array of strings"));
            Vec::new()
        }
    };

    let lore = match root.get("lore") {
        None => {
            errors.push(FieldError::new("lore", "missing field"));
            String::new()
        }
        Some(value) => match value.as_str() {
            Some(s) => s.to_string(),
            None => {
                errors.push(FieldError::new("lore", "expected a string"));
                String::new()
            }
        },
    };

    let world = match root.get("world") {
        None => {
            errors.push(FieldError::new("world", "missing field"));
            Map::new()
        }
        Some(value) => match value.as_object() {
            Some(map) => map.clone(),
            None => {
                errors.push(FieldError::new("world", "expected a JSON object"));
                Map::new()
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ChatRequest {
        history,
        lore,
        world,
    })
}
