//! Scene renderer
//!
//! Thin layer between a [`Scene`] and the window. Consumes the scene
//! description, produces draw calls, feeds nothing back into the simulation.

use macroquad::prelude::{
    Color, clear_background, draw_circle, draw_rectangle, draw_text, measure_text,
};

use crate::consts::SCREEN_WIDTH;
use crate::scene::{self, Scene};

fn color(c: scene::Color) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Draw one frame
pub fn draw(scene: &Scene) {
    clear_background(color(scene::BACKGROUND_COLOR));

    let paddle = &scene.paddle;
    draw_rectangle(
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
        color(paddle.color),
    );
    if let Some(label) = paddle.label {
        let dims = measure_text(label, None, 16, 1.0);
        draw_text(
            label,
            paddle.x + (paddle.width - dims.width) / 2.0,
            paddle.y - 8.0,
            16.0,
            color(paddle.color),
        );
    }

    for coin in &scene.coins {
        draw_circle(coin.x, coin.y, coin.radius, color(coin.color));
    }

    draw_text(&scene.score_text, 10.0, 24.0, 24.0, color(scene::TEXT_COLOR));
    let dims = measure_text(&scene.high_score_text, None, 24, 1.0);
    draw_text(
        &scene.high_score_text,
        SCREEN_WIDTH - dims.width - 10.0,
        24.0,
        24.0,
        color(scene::TEXT_COLOR),
    );
}
