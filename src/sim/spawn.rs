//! Obstacle and powerup lifecycle
//!
//! Spawning at randomized lawful positions, per-tick horizontal advance,
//! pass-event scoring and off-screen eviction. All randomness goes through
//! the session RNG so a seed reproduces the same spawn sequence.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind, Powerup, PowerupKind};
use crate::consts::*;

/// Vertical placement with a margin of SPAWN_MARGIN_FACTOR entity heights
/// from both board edges. Falls back to centered when the board is too
/// small to honor the margin.
fn lawful_y(state: &mut GameState, height: f32) -> f32 {
    let min = height * SPAWN_MARGIN_FACTOR;
    let max = state.board.y - height * SPAWN_MARGIN_FACTOR;
    if max <= min {
        (state.board.y - height) * 0.5
    } else {
        state.rng.random_range(min..=max)
    }
}

/// Spawn one obstacle just off the right edge, then evaluate the powerup
/// gate (powerups only ever enter alongside an obstacle spawn).
pub fn spawn_obstacle(state: &mut GameState) {
    if !(state.board.x > 0.0 && state.board.y > 0.0) {
        return;
    }

    let kind = ObstacleKind::sample(&mut state.rng);
    let size = kind.base_size() * state.scale;
    let y = lawful_y(state, size.y);
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(state.board.x + size.x, y),
        size,
        passed: false,
    });
    log::debug!("spawned obstacle #{id} ({kind:?}) at y {y:.1}");

    state.obstacles_since_powerup += 1;
    maybe_spawn_powerup(state);
}

/// Powerup gate: enough obstacles since the last one, a minimum score, and
/// a probability draw. All three must hold.
fn maybe_spawn_powerup(state: &mut GameState) {
    if state.obstacles_since_powerup < POWERUP_MIN_OBSTACLE_GAP
        || state.score < POWERUP_MIN_SCORE
    {
        return;
    }
    if !state.rng.random_bool(POWERUP_CHANCE) {
        return;
    }

    let kind = PowerupKind::sample(&mut state.rng);
    let size = Vec2::splat(POWERUP_BASE_SIZE) * state.scale;
    let y = lawful_y(state, size.y);
    let id = state.next_entity_id();
    state.powerups.push(Powerup {
        id,
        kind,
        pos: Vec2::new(state.board.x + size.x, y),
        size,
        collected: false,
    });
    log::debug!("spawned powerup #{id} ({kind:?})");
    state.obstacles_since_powerup = 0;
}

/// Advance every obstacle by `speed`, credit pass events, evict off-screen
/// obstacles. Returns the score gained this tick.
///
/// An obstacle is credited on the single tick its trailing edge first
/// crosses the player's leading edge; the `passed` latch makes the credit
/// at-most-once per identity no matter how often this runs. Every obstacle
/// qualifying in the same tick is credited independently.
pub fn advance_obstacles(state: &mut GameState, speed: f32) -> u32 {
    let player_x = state.player.pos.x;
    let per_pass = if state.double_score_active() { 2 } else { 1 };

    let mut gained = 0;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
        if !obstacle.passed && obstacle.trailing_edge() < player_x {
            obstacle.passed = true;
            gained += per_pass;
        }
    }
    state.obstacles.retain(|o| o.trailing_edge() > 0.0);
    gained
}

/// Advance powerups at obstacle speed; uncollected ones scroll off and die
pub fn advance_powerups(state: &mut GameState, speed: f32) {
    for powerup in &mut state.powerups {
        powerup.pos.x -= speed;
    }
    state.powerups.retain(|p| p.trailing_edge() > 0.0);
}
