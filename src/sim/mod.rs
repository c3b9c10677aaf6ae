//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Coin, Highlight, HighlightKind, Paddle, SessionParams, SessionState};
pub use tick::{SessionEvent, TickInput, TickOutput, tick};
