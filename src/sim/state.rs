//! Session state and core simulation types
//!
//! One `SessionState` is created per gameplay session and owned exclusively
//! by the session loop; nothing here is shared or global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Difficulty;

/// Difficulty-derived parameters, fixed for the lifetime of a session.
///
/// Coin fall speed and paddle stats mutate monotonically during play; the
/// values here are the starting points and the caps.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub difficulty: Difficulty,
    /// Whether audio intents are emitted at all
    pub sound_on: bool,
    pub base_coin_speed: f32,
    pub max_coin_speed: f32,
    pub coin_speed_increment: f32,
    /// Spawn chance is 1 in `spawn_denominator` per tick
    pub spawn_denominator: u32,
    pub paddle_max_width: f32,
    pub paddle_max_speed: f32,
    pub paddle_width_increment: f32,
    pub paddle_speed_increment: f32,
}

impl SessionParams {
    pub fn for_difficulty(difficulty: Difficulty, sound_on: bool) -> Self {
        let (base_coin_speed, max_coin_speed, spawn_denominator) = match difficulty {
            Difficulty::Easy => (4.0, 8.0, 20),
            Difficulty::Hard => (6.0, 12.0, 12),
        };
        Self {
            difficulty,
            sound_on,
            base_coin_speed,
            max_coin_speed,
            coin_speed_increment: 0.5,
            spawn_denominator,
            paddle_max_width: 80.0,
            paddle_max_speed: 12.0,
            paddle_width_increment: 5.0,
            paddle_speed_increment: 0.5,
        }
    }
}

/// Why the paddle is currently flashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// Milestone growth (every 10th point)
    Growth,
    /// Persisted high score beaten this session
    NewBest,
}

/// Transient paddle flash, cleared once `until_tick` is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub until_tick: u64,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge, kept within `[0, SCREEN_WIDTH - width]`
    pub x: f32,
    /// Top edge, fixed near the bottom of the playfield
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick
    pub speed: f32,
    /// Active flash, if any
    pub highlight: Option<Highlight>,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
            y: SCREEN_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            highlight: None,
        }
    }
}

impl Paddle {
    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Move horizontally by `dx`, clamped to the playfield. Never wraps.
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, SCREEN_WIDTH - self.width);
    }
}

/// A falling coin.
///
/// Coins carry no speed of their own; every live coin falls at the session's
/// current `coin_speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
}

impl Coin {
    pub fn at_top(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            radius: COIN_RADIUS,
        }
    }
}

/// Complete state for one gameplay session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub params: SessionParams,
    pub paddle: Paddle,
    /// Live coins in spawn order; two coins may share a position
    pub coins: Vec<Coin>,
    /// Shared fall speed for every live coin; rises with milestones
    pub coin_speed: f32,
    pub score: u32,
    /// Persisted high score at session start
    pub baseline: u32,
    /// Live high score; starts at `baseline` and never decreases
    pub high_score: u32,
    /// Milestones already consumed, so each crossing applies exactly once
    pub(super) milestones_applied: u32,
    /// Simulated tick counter (paused ticks do not count)
    pub time_ticks: u64,
    /// Session RNG; same seed, same session
    pub rng: Pcg32,
}

impl SessionState {
    /// Start a fresh session.
    ///
    /// Paddle stats always reset to base values; growth never carries over
    /// between sessions.
    pub fn new(params: SessionParams, baseline: u32, seed: u64) -> Self {
        let coin_speed = params.base_coin_speed;
        Self {
            params,
            paddle: Paddle::default(),
            coins: Vec::new(),
            coin_speed,
            score: 0,
            baseline,
            high_score: baseline,
            milestones_applied: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
