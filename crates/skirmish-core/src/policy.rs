//! Scripted NPC chase policy.
//!
//! The NPC closes distance along the axis with the larger separation. On a
//! tie the vertical branch wins; that tie-break is a fixed part of the
//! contract, not a tunable.

use crate::observation::{Action, Observation};

/// Picks the movement command that closes distance to the player.
///
/// `dx`/`dy` are player-minus-enemy deltas in Unity coordinates (+y is up).
/// When `|dx| > |dy|` the NPC moves horizontally (right if the player is at
/// larger x, else left); otherwise vertically (up if the player is at larger
/// y, else down). Ties between `|dx|` and `|dy|` take the vertical branch.
///
/// Saturating arithmetic keeps the comparison total for every pair of `i64`
/// inputs; there are no error cases.
pub fn choose_action(obs: &Observation) -> Action {
    let dx = obs.player_x.saturating_sub(obs.enemy_x);
    let dy = obs.player_y.saturating_sub(obs.enemy_y);

    if dx.unsigned_abs() > dy.unsigned_abs() {
        if dx > 0 {
            Action::Right
        } else {
            Action::Left
        }
    } else if dy > 0 {
        Action::Up
    } else {
        Action::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn obs(px: i64, py: i64, ex: i64, ey: i64) -> Observation {
        Observation {
            player_x: px,
            player_y: py,
            enemy_x: ex,
            enemy_y: ey,
            step: 1,
            player_score: 100,
        }
    }

    #[test]
    fn chases_right_when_player_far_right() {
        assert_eq!(choose_action(&obs(10, 0, 0, 0)), Action::Right);
        assert_eq!(choose_action(&obs(3, 2, 0, 0)), Action::Right);
    }

    #[test]
    fn chases_left_when_player_far_left() {
        assert_eq!(choose_action(&obs(0, 0, 5, 0)), Action::Left);
        assert_eq!(choose_action(&obs(-4, 1, 3, 0)), Action::Left);
    }

    #[test]
    fn chases_up_when_player_above() {
        assert_eq!(choose_action(&obs(0, 5, 0, 0)), Action::Up);
        assert_eq!(choose_action(&obs(1, 8, 0, 0)), Action::Up);
    }

    #[test]
    fn chases_down_when_player_below() {
        assert_eq!(choose_action(&obs(0, 0, 0, 9)), Action::Down);
        assert_eq!(choose_action(&obs(2, -6, 0, 0)), Action::Down);
    }

    #[test]
    fn tie_prefers_vertical() {
        // |dx| == |dy| must take the vertical branch.
        assert_eq!(choose_action(&obs(4, 4, 0, 0)), Action::Up);
        assert_eq!(choose_action(&obs(4, -4, 0, 0)), Action::Down);
        assert_eq!(choose_action(&obs(-4, 4, 0, 0)), Action::Up);
        assert_eq!(choose_action(&obs(-4, -4, 0, 0)), Action::Down);
    }

    #[test]
    fn coincident_positions_move_down() {
        // dx == dy == 0: tie branch, and dy is not > 0, so Down.
        assert_eq!(choose_action(&obs(0, 0, 0, 0)), Action::Down);
        assert_eq!(choose_action(&obs(7, 7, 7, 7)), Action::Down);
    }

    #[test]
    fn extreme_coordinates_do_not_panic() {
        choose_action(&obs(i64::MAX, i64::MIN, i64::MIN, i64::MAX));
        choose_action(&obs(i64::MIN, i64::MIN, i64::MAX, i64::MAX));
    }

    proptest! {
        /// Horizontal dominance always yields a horizontal action in the
        /// direction of the player.
        #[test]
        fn horizontal_dominance(px in -1000i64..1000, py in -1000i64..1000,
                                ex in -1000i64..1000, ey in -1000i64..1000) {
            let dx = px - ex;
            let dy = py - ey;
            prop_assume!(dx.abs() > dy.abs());
            let action = choose_action(&obs(px, py, ex, ey));
            if dx > 0 {
                prop_assert_eq!(action, Action::Right);
            } else {
                prop_assert_eq!(action, Action::Left);
            }
        }

        /// Vertical dominance (including ties) always yields a vertical
        /// action in the direction of the player.
        #[test]
        fn vertical_dominance(px in -1000i64..1000, py in -1000i64..1000,
                              ex in -1000i64..1000, ey in -1000i64..1000) {
            let dx = px - ex;
            let dy = py - ey;
            prop_assume!(dy.abs() >= dx.abs());
            let action = choose_action(&obs(px, py, ex, ey));
            if dy > 0 {
                prop_assert_eq!(action, Action::Up);
            } else {
                prop_assert_eq!(action, Action::Down);
            }
        }
    }
}
