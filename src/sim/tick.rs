//! Per-frame simulation tick
//!
//! The driver state machine: Idle until the board is measured, a fixed
//! warm-up with no obstacles, active play, and a terminal game-over that
//! only accepts a restart. One call per frame callback; spawn cadence,
//! warm-up expiry and powerup lifetime are countdowns decremented here, and
//! a run reset reinitializes every one of them.

use super::collision::{Hull, check_collision, check_powerup_collision};
use super::difficulty::compute_settings;
use super::spawn::{advance_obstacles, advance_powerups, spawn_obstacle};
use super::state::{ActiveEffect, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump command from the input layer; after a run ends the same input
    /// restarts the session
    pub jump: bool,
}

/// Advance the game state by one tick. `dt_ms` is the wall-clock time this
/// tick represents; physics itself is per-tick, only the timers consume it.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    match state.phase {
        GamePhase::Idle => {
            // Waiting for a board measurement; inputs have nothing to act on
        }
        GamePhase::WarmUp => tick_warmup(state, dt_ms),
        GamePhase::Active => tick_active(state, input, dt_ms),
        GamePhase::GameOver => {
            if input.jump {
                state.begin_run();
            }
        }
    }
}

fn tick_warmup(state: &mut GameState, dt_ms: f32) {
    state.time_ticks += 1;

    // Level pose, no gravity; jump inputs are ignored until play begins
    state.player.hold_level();

    state.warmup_remaining_ms -= dt_ms;
    if state.warmup_remaining_ms > 0.0 {
        return;
    }

    // One-shot upward nudge visually marks the start of spawning
    state.player.velocity = WARMUP_NUDGE_VELOCITY * state.scale;
    state.player.rotation = WARMUP_NUDGE_ROTATION;
    state.phase = GamePhase::Active;
    log::info!("warm-up over, play begins");

    // First obstacle immediately; the recurring countdown re-arms from the
    // difficulty calculator at every firing
    spawn_obstacle(state);
    state.spawn_cooldown_ms = compute_settings(&state.base, state.score).spawn_interval_ms;
}

fn tick_active(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.time_ticks += 1;

    // Single source of truth for this tick's physics and cadence
    let settings = compute_settings(&state.base, state.score);

    if input.jump {
        state.player.apply_jump(settings.jump_impulse);
    }
    if state.player.integrate(settings.gravity, state.board.y) {
        state.end_run();
        return;
    }

    // Spawning completes before advance/resolve so the collision checks
    // below always see a list consistent with the player position
    state.spawn_cooldown_ms -= dt_ms;
    while state.spawn_cooldown_ms <= 0.0 {
        spawn_obstacle(state);
        state.spawn_cooldown_ms +=
            compute_settings(&state.base, state.score).spawn_interval_ms;
    }

    let gained = advance_obstacles(state, settings.obstacle_speed);
    state.score += gained;
    advance_powerups(state, settings.obstacle_speed);

    // One hull per tick, shared by every obstacle and powerup check
    let hull = Hull::of_player(&state.player);

    if !state.invincible()
        && state
            .obstacles
            .iter()
            .any(|o| !o.passed && check_collision(&state.player, &hull, o))
    {
        state.end_run();
        return;
    }

    let mut collected = None;
    for powerup in &mut state.powerups {
        if !powerup.collected && check_powerup_collision(&hull, powerup) {
            powerup.collected = true;
            collected = Some(powerup.kind);
        }
    }
    if let Some(kind) = collected {
        state.effect = Some(ActiveEffect {
            kind,
            remaining_ms: POWERUP_DURATION_MS,
        });
        log::info!("powerup collected: {kind:?}");
    }
    state.powerups.retain(|p| !p.collected);

    if let Some(effect) = &mut state.effect {
        effect.remaining_ms -= dt_ms;
    }
    if state.effect.is_some_and(|e| e.remaining_ms <= 0.0) {
        log::debug!("powerup effect expired");
        state.effect = None;
    }
}
