//! Drawable scene description
//!
//! The render phase is a pure projection of session state: the sim produces
//! a [`Scene`], the frontend draws it. Nothing here feeds back into the
//! simulation.

use crate::sim::{HighlightKind, SessionState};

/// RGBA color, 0.0-1.0 per channel
pub type Color = [f32; 4];

pub const BACKGROUND_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
pub const PADDLE_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Gold, the one true coin color
pub const COIN_COLOR: Color = [1.0, 0.875, 0.0, 1.0];
pub const TEXT_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Milestone growth flash
pub const GROWTH_COLOR: Color = [0.3, 1.0, 0.3, 1.0];
/// New-best flash, distinct from the growth one
pub const NEW_BEST_COLOR: Color = [1.0, 0.875, 0.0, 1.0];

/// Paddle as drawn: a rect, its current color, and an optional label shown
/// above it while a highlight is active
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub label: Option<&'static str>,
}

/// Coin as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub paddle: PaddleSprite,
    pub coins: Vec<CoinSprite>,
    pub score_text: String,
    pub high_score_text: String,
}

/// Project session state into a drawable scene
pub fn project(state: &SessionState) -> Scene {
    let (color, label) = match state.paddle.highlight.map(|h| h.kind) {
        Some(HighlightKind::Growth) => (GROWTH_COLOR, Some("WIDER!")),
        Some(HighlightKind::NewBest) => (NEW_BEST_COLOR, Some("NEW BEST!")),
        None => (PADDLE_COLOR, None),
    };

    Scene {
        paddle: PaddleSprite {
            x: state.paddle.x,
            y: state.paddle.y,
            width: state.paddle.width,
            height: state.paddle.height,
            color,
            label,
        },
        coins: state
            .coins
            .iter()
            .map(|coin| CoinSprite {
                x: coin.pos.x,
                y: coin.pos.y,
                radius: coin.radius,
                color: COIN_COLOR,
            })
            .collect(),
        score_text: format!("Score: {}", state.score),
        high_score_text: format!("High Score: {}", state.high_score),
    }
}
