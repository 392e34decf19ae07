//! Game state and core simulation types
//!
//! Everything the driver mutates per tick lives in one owned `GameState`;
//! score and entity-identity bookkeeping are plain fields updated
//! synchronously inside the tick, so reads within a tick always observe the
//! latest write.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::difficulty::{BaseSettings, tier_for_score};
use super::geometry::Rect;
use crate::HighScores;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a first valid board-size measurement
    Idle,
    /// Fixed grace period: physics runs, no obstacles spawn
    WarmUp,
    /// Normal play: spawning, scoring and collision checks all live
    Active,
    /// Run ended; only a jump input (restart) is accepted
    GameOver,
}

/// The player sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner; x is fixed for the whole run
    pub pos: Vec2,
    /// Sprite size, scaled once at run start
    pub size: Vec2,
    /// Nose angle in degrees, clamped to [ROTATION_MIN, ROTATION_MAX]
    pub rotation: f32,
    /// Vertical velocity, positive is downward
    pub velocity: f32,
}

impl Player {
    /// Place the player at the run's initial position for the given board
    pub fn spawn(board: Vec2, scale: f32) -> Self {
        let size = Vec2::new(PLAYER_BASE_WIDTH, PLAYER_BASE_HEIGHT) * scale;
        Self {
            pos: Vec2::new(board.x * PLAYER_X_FRACTION, (board.y - size.y) * 0.5),
            size,
            rotation: 0.0,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Full (unrotated) sprite bounding box
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Discrete upward impulse from a jump input
    pub fn apply_jump(&mut self, jump_impulse: f32) {
        self.velocity = jump_impulse;
        self.rotation = ROTATION_MIN;
    }

    /// One Euler step under gravity. Returns `true` when the candidate
    /// position leaves the board; in that case nothing is committed and the
    /// last valid position survives for the final rendered frame.
    pub fn integrate(&mut self, gravity: f32, board_height: f32) -> bool {
        let velocity = self.velocity + gravity;
        let y = self.pos.y + velocity;
        if y < 0.0 || y > board_height - self.size.y {
            return true;
        }
        self.velocity = velocity;
        self.pos.y = y;
        self.rotation = (self.rotation + ROTATION_STEP).min(ROTATION_MAX);
        false
    }

    /// Warm-up pose: level nose, no motion
    pub fn hold_level(&mut self) {
        self.rotation = 0.0;
    }
}

/// Obstacle shape kinds; each maps to its own compound hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Ball,
    Plant,
    Mug,
    Monitor,
    Crate,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Ball,
        ObstacleKind::Plant,
        ObstacleKind::Mug,
        ObstacleKind::Monitor,
        ObstacleKind::Crate,
    ];

    /// Unscaled sprite dimensions per kind
    pub fn base_size(&self) -> Vec2 {
        match self {
            ObstacleKind::Ball => Vec2::new(60.0, 60.0),
            ObstacleKind::Plant => Vec2::new(64.0, 84.0),
            ObstacleKind::Mug => Vec2::new(70.0, 60.0),
            ObstacleKind::Monitor => Vec2::new(80.0, 72.0),
            ObstacleKind::Crate => Vec2::new(56.0, 56.0),
        }
    }

    /// Uniform random kind
    pub fn sample(rng: &mut Pcg32) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&ObstacleKind::Crate)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Unique, monotonically increasing; scored against at most once
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner; x decreases every tick, y is fixed at spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Latched on the tick the trailing edge crosses the player
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Powerup types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    DoubleScore,
    Invincibility,
}

impl PowerupKind {
    pub fn sample(rng: &mut Pcg32) -> Self {
        *[PowerupKind::DoubleScore, PowerupKind::Invincibility]
            .choose(rng)
            .unwrap_or(&PowerupKind::DoubleScore)
    }
}

/// A collectible powerup, scrolling like an obstacle
#[derive(Debug, Clone, Copy)]
pub struct Powerup {
    pub id: u32,
    pub kind: PowerupKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Flips true at most once, on the pickup tick
    pub collected: bool,
}

impl Powerup {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Collection radius (circular, regardless of sprite)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x * 0.5
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A collected powerup effect counting down to expiry
#[derive(Debug, Clone, Copy)]
pub struct ActiveEffect {
    pub kind: PowerupKind,
    pub remaining_ms: f32,
}

/// Complete session state, exclusively owned by the driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn randomness; all draws go through here
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Board dimensions, zero until the first valid measurement
    pub board: Vec2,
    /// One-time scale factor, `board.y / REFERENCE_BOARD_HEIGHT`
    pub scale: f32,
    /// Physics base values for the current run (already board-scaled)
    pub base: BaseSettings,
    pub player: Player,
    /// Live obstacles in spawn order, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Live powerups in spawn order
    pub powerups: Vec<Powerup>,
    /// Cumulative score for the current run
    pub score: u32,
    /// Currently active powerup effect, if any
    pub effect: Option<ActiveEffect>,
    /// Obstacles spawned since the last powerup (spawn gate input)
    pub obstacles_since_powerup: u32,
    /// Warm-up countdown; meaningful only during WarmUp
    pub warmup_remaining_ms: f32,
    /// Countdown to the next obstacle spawn; re-armed from the difficulty
    /// calculator at every firing
    pub spawn_cooldown_ms: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Session leaderboard, survives restarts
    pub high_scores: HighScores,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session; stays Idle until a valid board size arrives
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            board: Vec2::ZERO,
            scale: 1.0,
            base: BaseSettings::scaled(REFERENCE_BOARD_HEIGHT),
            player: Player::spawn(Vec2::ZERO, 1.0),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            score: 0,
            effect: None,
            obstacles_since_powerup: 0,
            warmup_remaining_ms: 0.0,
            spawn_cooldown_ms: 0.0,
            time_ticks: 0,
            high_scores: HighScores::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID; never reused, even across restarts
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Difficulty tier for the current score
    pub fn tier(&self) -> u32 {
        tier_for_score(self.score)
    }

    pub fn double_score_active(&self) -> bool {
        matches!(
            self.effect,
            Some(ActiveEffect {
                kind: PowerupKind::DoubleScore,
                ..
            })
        )
    }

    pub fn invincible(&self) -> bool {
        matches!(
            self.effect,
            Some(ActiveEffect {
                kind: PowerupKind::Invincibility,
                ..
            })
        )
    }

    /// Board-size measurement from the embedder. Degenerate sizes are
    /// ignored (the driver stays in its current phase). A valid size starts
    /// the first run, or resets a run in progress to the new scale.
    pub fn set_board_size(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("ignoring degenerate board size {width}x{height}");
            return;
        }
        self.board = Vec2::new(width, height);
        self.scale = height / REFERENCE_BOARD_HEIGHT;
        self.base = BaseSettings::scaled(height);
        self.begin_run();
    }

    /// Reset all per-run state and enter warm-up. The leaderboard, RNG
    /// stream and entity-id counter survive restarts.
    pub fn begin_run(&mut self) {
        self.player = Player::spawn(self.board, self.scale);
        self.obstacles.clear();
        self.powerups.clear();
        self.score = 0;
        self.effect = None;
        self.obstacles_since_powerup = 0;
        self.warmup_remaining_ms = WARMUP_DURATION_MS;
        self.spawn_cooldown_ms = 0.0;
        self.phase = GamePhase::WarmUp;
        log::info!("run started: board {}x{}, scale {:.3}", self.board.x, self.board.y, self.scale);
    }

    /// Terminal transition: freeze the run and record the score
    pub fn end_run(&mut self) {
        let tier = self.tier();
        self.phase = GamePhase::GameOver;
        let rank = self.high_scores.add_score(self.score, tier);
        log::info!(
            "game over: score {} (tier {}, rank {:?})",
            self.score,
            tier,
            rank
        );
    }

    /// Best score recorded this session
    pub fn best_score(&self) -> Option<u32> {
        self.high_scores.top_score()
    }
}
