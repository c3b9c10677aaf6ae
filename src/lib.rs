//! Falling Coins - catch coins with a paddle that grows as you score
//!
//! Core modules:
//! - `sim`: deterministic simulation (paddle, coins, scoring, progression)
//! - `scene`: drawable scene description projected from sim state
//! - `settings`: persisted difficulty/sound/high-score record
//! - `audio`: fire-and-forget sound effect playback
//! - `menu`: modal menu loops (main, pause, settings, credits)
//! - `render`: draws a `Scene` into the window

pub mod audio;
pub mod menu;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed playfield/window size
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Nominal tick rate; the loop may run slower, never faster
    pub const TICK_RATE: u32 = 60;
    /// Seconds per tick at the nominal rate
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Paddle base stats (reset every session)
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle and the bottom of the playfield
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Coin size
    pub const COIN_RADIUS: f32 = 10.0;

    /// Ticks a paddle highlight stays lit after a milestone or a new best
    pub const HIGHLIGHT_TICKS: u64 = 30;

    /// Score interval between progression milestones
    pub const MILESTONE_INTERVAL: u32 = 10;
}
