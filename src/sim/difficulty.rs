//! Score-driven difficulty scaling
//!
//! A pure mapping from cumulative score to the current tick's physics and
//! spawn-cadence values. The driver recomputes it every tick; it is the
//! single source of truth, never cached.

use crate::consts::*;

/// Per-run physics base values, scaled once by the board scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSettings {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f32,
}

impl BaseSettings {
    /// Scale the authored tuning to the measured board. Gravity, jump
    /// impulse and scroll speed all keep their proportions on any board
    /// height; the spawn interval is wall-clock and stays unscaled.
    pub fn scaled(board_height: f32) -> Self {
        let k = board_height / REFERENCE_BOARD_HEIGHT;
        Self {
            gravity: BASE_GRAVITY * k,
            jump_impulse: BASE_JUMP_IMPULSE * k,
            obstacle_speed: BASE_OBSTACLE_SPEED * k,
            spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
        }
    }
}

/// The settings in force for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f32,
}

/// Difficulty tier: one step per SPEED_INCREASE_THRESHOLD points, frozen
/// past the score cap
#[inline]
pub fn tier_for_score(score: u32) -> u32 {
    score.min(MAX_DIFFICULTY_SCORE) / SPEED_INCREASE_THRESHOLD
}

/// Map cumulative score to the current settings.
///
/// Obstacle speed grows by SPEED_INCREASE_FACTOR per tier; the spawn
/// interval shrinks by SPAWN_RATE_DECREASE_FACTOR at half that cadence.
/// Gravity and jump impulse never vary with score.
pub fn compute_settings(base: &BaseSettings, score: u32) -> Difficulty {
    let tiers = tier_for_score(score);
    let speed_mult = SPEED_INCREASE_FACTOR.powi(tiers as i32);
    let spawn_mult = SPAWN_RATE_DECREASE_FACTOR.powi((tiers / 2) as i32);
    Difficulty {
        gravity: base.gravity,
        jump_impulse: base.jump_impulse,
        obstacle_speed: base.obstacle_speed * speed_mult,
        spawn_interval_ms: base.spawn_interval_ms * spawn_mult,
    }
}
