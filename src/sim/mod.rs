//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, driven by the embedder's frame callback
//! - Seeded RNG only
//! - Stable iteration order (by entity ID / spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hull, check_collision, check_powerup_collision};
pub use difficulty::{BaseSettings, Difficulty, compute_settings, tier_for_score};
pub use geometry::{
    Rect, Segment, point_in_rect, segment_circle_intersect, segment_rect_intersect,
    segments_intersect,
};
pub use spawn::{advance_obstacles, advance_powerups, spawn_obstacle};
pub use state::{
    ActiveEffect, GamePhase, GameState, Obstacle, ObstacleKind, Player, Powerup, PowerupKind,
};
pub use tick::{TickInput, tick};
