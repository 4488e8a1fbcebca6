//! Adaptive difficulty curve.
//!
//! Maps the client-reported player score to an aggression scalar in
//! [0.2, 0.8]. The slope is deliberately steep (0.006 per point) so the
//! effect is visible in short play sessions: 100 -> 0.5, 150 -> 0.8,
//! 50 -> 0.2.

/// Aggression floor.
pub const MIN_AGGRESSION: f64 = 0.2;
/// Aggression ceiling.
pub const MAX_AGGRESSION: f64 = 0.8;

/// Maps a player score to an aggression scalar.
///
/// `0.5 + 0.006 * (score - 100)`, clamped to [0.2, 0.8]. Monotonic
/// non-decreasing in the score; flat at the clamp boundaries (score <= 50
/// and score >= 150).
pub fn aggression(player_score: i64) -> f64 {
    let val = 0.5 + 0.006 * player_score.saturating_sub(100) as f64;
    val.clamp(MIN_AGGRESSION, MAX_AGGRESSION)
}
