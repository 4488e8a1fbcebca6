//! `/act` request/response types and shape validation.
//!
//! The request body is validated manually from a `serde_json::Value` so that
//! every missing or mistyped field is reported at once with its dotted path,
//! instead of the first serde error only.

use serde::Serialize;
use serde_json::Value;

use skirmish_core::Observation;

use super::diagnostics::FieldError;

/// Integer fields of an observation, in wire order.
const OBS_FIELDS: [&str; 6] = ["px", "py", "ex", "ey", "step", "player_score"];

/// Validated `/act` request.
#[derive(Debug, Clone, Copy)]
pub struct ActRequest {
    pub obs: Observation,
}

/// Response for `/act`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionResponse {
    /// Movement code: 0 up, 1 down, 2 left, 3 right.
    pub action: u8,
    /// Difficulty scalar in [0.2, 0.8].
    pub aggression: f64,
}

/// Validates the `/act` body shape and extracts the observation.
///
/// Collects one [`FieldError`] per problem; an `Ok` return means every field
/// was present and integer-typed.
pub fn parse_act_request(body: &Value) -> Result<ActRequest, Vec<FieldError>> {
    let Some(root) = body.as_object() else {
        return Err(vec![FieldError::new("body", "expected a JSON object")]);
    };

    let Some(obs_value) = root.get("obs") else {
        return Err(vec![FieldError::new("obs", "missing field")]);
    };
    let Some(obs) = obs_value.as_object() else {
        return Err(vec![FieldError::new("obs", "expected a JSON object")]);
    };

    let mut errors = Vec::new();
    let mut values = [0i64; OBS_FIELDS.len()];
    for (slot, name) in values.iter_mut().zip(OBS_FIELDS) {
        match obs.get(name) {
            None => errors.push(FieldError::new(format!("obs.{}", name), "missing field")),
            Some(value) => match value.as_i64() {
                Some(n) => *slot = n,
                None => errors.push(FieldError::new(
                    format!("obs.{}", name),
                    "expected an integer",
                )),
            },
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [px, py, ex, ey, step, player_score] = values;
    Ok(ActRequest {
        obs: Observation {
            player_x: px,
            player_y: py,
            enemy_x: ex,
            enemy_y: ey,
            step,
            player_score,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_body() {
        let body = json!({
            "obs": {"px": 1, "py": -2, "ex": 3, "ey": 4, "step": 5, "player_score": 100}
        });
        let req = parse_act_request(&body).unwrap();
        assert_eq!(req.obs.player_x, 1);
        assert_eq!(req.obs.player_y, -2);
        assert_eq!(req.obs.player_score, 100);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = json!({
            "obs": {"px": 0, "py": 0, "ex": 0, "ey": 0, "step": 0,
                    "player_score": 0, "extra": "ok"}
        });
        assert!(parse_act_request(&body).is_ok());
    }

    #[test]
    fn reports_missing_obs() {
        let errors = parse_act_request(&json!({})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("obs", "missing field")]);
    }

    #[test]
    fn reports_non_object_obs() {
        let errors = parse_act_request(&json!({"obs": 3})).unwrap_err();
        assert_eq!(errors[0].field, "obs");
    }

    #[test]
    fn reports_every_bad_field_at_once() {
        let body = json!({
            "obs": {"px": "zero", "py": 0, "ex": 1.5, "ey": 0, "step": 0}
        });
        let errors = parse_act_request(&body).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["obs.px", "obs.ex", "obs.player_score"]);
        assert_eq!(errors[0].message, "expected an integer");
        assert_eq!(errors[2].message, "missing field");
    }

    #[test]
    fn rejects_float_coordinates() {
        let body = json!({
            "obs": {"px": 0.25, "py": 0, "ex": 0, "ey": 0, "step": 0, "player_score": 0}
        });
        let errors = parse_act_request(&body).unwrap_err();
        assert_eq!(errors[0].field, "obs.px");
    }
}
