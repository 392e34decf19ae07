//! Desk Dash - a side-scrolling desk-object dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `highscores`: In-memory session leaderboard
//!
//! Rendering and input capture live outside this crate: a renderer reads
//! `&GameState` each frame, the input layer feeds a single jump command
//! into `TickInput`.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Board height the base tuning values were authored for; the run scale
    /// factor is `board_height / REFERENCE_BOARD_HEIGHT`.
    pub const REFERENCE_BOARD_HEIGHT: f32 = 480.0;

    /// Warm-up duration after a session starts (no obstacles yet)
    pub const WARMUP_DURATION_MS: f32 = 3000.0;

    /// Player defaults (unscaled)
    pub const PLAYER_BASE_WIDTH: f32 = 60.0;
    pub const PLAYER_BASE_HEIGHT: f32 = 30.0;
    /// Horizontal player anchor as a fraction of board width
    pub const PLAYER_X_FRACTION: f32 = 0.2;

    /// Rotation limits (degrees): jump snaps to the minimum, gravity drags
    /// the nose down one degree per tick up to the maximum
    pub const ROTATION_MIN: f32 = -20.0;
    pub const ROTATION_MAX: f32 = 45.0;
    pub const ROTATION_STEP: f32 = 1.0;

    /// Collision hull vertices sit at this fraction of the player's
    /// half-extents, tighter than the rendered sprite
    pub const HULL_SHRINK: f32 = 0.45;

    /// Base physics tuning, scaled once per run by the board scale factor
    pub const BASE_GRAVITY: f32 = 0.5;
    pub const BASE_JUMP_IMPULSE: f32 = -9.0;
    pub const BASE_OBSTACLE_SPEED: f32 = 6.0;
    pub const BASE_SPAWN_INTERVAL_MS: f32 = 1500.0;

    /// Gentle upward nudge applied when warm-up ends
    pub const WARMUP_NUDGE_VELOCITY: f32 = -3.0;
    pub const WARMUP_NUDGE_ROTATION: f32 = -10.0;

    /// Difficulty progression
    pub const SPEED_INCREASE_THRESHOLD: u32 = 3;
    pub const SPEED_INCREASE_FACTOR: f32 = 1.05;
    pub const SPAWN_RATE_DECREASE_FACTOR: f32 = 0.92;
    /// Score beyond which difficulty stops growing
    pub const MAX_DIFFICULTY_SCORE: u32 = 60;

    /// Obstacles spawn with this many of their own heights of margin from
    /// the top and bottom edges
    pub const SPAWN_MARGIN_FACTOR: f32 = 1.2;

    /// Powerup spawn gate
    pub const POWERUP_MIN_OBSTACLE_GAP: u32 = 5;
    pub const POWERUP_CHANCE: f64 = 0.2;
    pub const POWERUP_MIN_SCORE: u32 = 5;
    /// Effect lifetime once collected
    pub const POWERUP_DURATION_MS: f32 = 8000.0;
    /// Powerup box size (unscaled)
    pub const POWERUP_BASE_SIZE: f32 = 40.0;
}

/// Rotate `p` around `origin` by `radians` (standard 2D rotation matrix)
#[inline]
pub fn rotate_around(p: Vec2, origin: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    let d = p - origin;
    origin + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_around_quarter_turn() {
        let p = rotate_around(
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            std::f32::consts::FRAC_PI_2,
        );
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_around_offset_origin() {
        let p = rotate_around(
            Vec2::new(3.0, 2.0),
            Vec2::new(2.0, 2.0),
            std::f32::consts::PI,
        );
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }
}
