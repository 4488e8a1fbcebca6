//! Per-request world snapshot and the NPC action vocabulary.
//!
//! Wire field names (`px`, `py`, ...) match what the game client sends;
//! struct fields use full names for readability. Action codes are a fixed
//! contract with the client and must never be renumbered.

use serde::{Deserialize, Serialize};

/// Snapshot of the world state sent by the game client on every `/act` call.
///
/// All fields are plain integers with no invariants: negative coordinates
/// and scores are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Player x position.
    #[serde(rename = "px")]
    pub player_x: i64,
    /// Player y position.
    #[serde(rename = "py")]
    pub player_y: i64,
    /// Enemy (NPC) x position.
    #[serde(rename = "ex")]
    pub enemy_x: i64,
    /// Enemy (NPC) y position.
    #[serde(rename = "ey")]
    pub enemy_y: i64,
    /// Frame counter.
    pub step: i64,
    /// Rough skill proxy used by the difficulty curve.
    pub player_score: i64,
}

/// Movement command returned to the game client.
///
/// Coordinates are Unity-style: +y is up. The numeric codes are part of the
/// wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move toward increasing y (code 0).
    Up,
    /// Move toward decreasing y (code 1).
    Down,
    /// Move toward decreasing x (code 2).
    Left,
    /// Move toward increasing x (code 3).
    Right,
}

impl Action {
    /// The wire code sent to the client.
    pub fn code(self) -> u8 {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_wire_names() {
        let obs = Observation {
            player_x: 1,
            player_y: 2,
            enemy_x: 3,
            enemy_y: 4,
            step: 5,
            player_score: 6,
        };
        let json = serde_json::to_value(obs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "px": 1, "py": 2, "ex": 3, "ey": 4,
                "step": 5, "player_score": 6
            })
        );
    }

    #[test]
    fn observation_serde_roundtrip() {
        let obs = Observation {
            player_x: -7,
            player_y: 0,
            enemy_x: 42,
            enemy_y: -1,
            step: 1000,
            player_score: -50,
        };
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }

    #[test]
    fn action_codes_are_fixed() {
        assert_eq!(Action::Up.code(), 0);
        assert_eq!(Action::Down.code(), 1);
        assert_eq!(Action::Left.code(), 2);
        assert_eq!(Action::Right.code(), 3);
    }
}
