//! Modal menus
//!
//! Each menu owns the screen until it returns an action; the session loop is
//! fully suspended while a menu runs. Menus draw directly, they are not part
//! of the simulation scene.

use std::path::Path;

use macroquad::prelude::*;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::{SETTINGS_FILE, Settings};

/// Main menu outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    StartGame,
    Settings,
    Credits,
    Quit,
}

/// Pause menu outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    MainMenu,
    Quit,
}

/// How a sub-menu (settings, credits) was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Back,
    /// The window close button was pressed while the menu was up
    Quit,
}

pub async fn main_menu(settings: &Settings) -> MainMenuAction {
    let items = ["Start Game", "Settings", "Credits", "Quit"];
    let mut selected = 0usize;

    loop {
        if is_quit_requested() {
            return MainMenuAction::Quit;
        }
        move_selection(&mut selected, items.len());
        if is_key_pressed(KeyCode::Enter) {
            return match selected {
                0 => MainMenuAction::StartGame,
                1 => MainMenuAction::Settings,
                2 => MainMenuAction::Credits,
                _ => MainMenuAction::Quit,
            };
        }

        clear_background(BLACK);
        draw_centered("Falling Coins", 90.0, 48.0, GOLD);
        draw_items(&items, selected, 170.0);
        draw_centered(
            &format!("High Score: {}", settings.high_score),
            SCREEN_HEIGHT - 70.0,
            22.0,
            GRAY,
        );
        draw_centered(
            "Arrows: navigate  Enter: select",
            SCREEN_HEIGHT - 40.0,
            18.0,
            DARKGRAY,
        );
        next_frame().await;
    }
}

pub async fn pause_menu() -> PauseAction {
    let items = ["Resume", "Main Menu", "Quit"];
    let mut selected = 0usize;

    loop {
        if is_quit_requested() {
            return PauseAction::Quit;
        }
        move_selection(&mut selected, items.len());
        if is_key_pressed(KeyCode::Escape) {
            return PauseAction::Resume;
        }
        if is_key_pressed(KeyCode::Enter) {
            return match selected {
                0 => PauseAction::Resume,
                1 => PauseAction::MainMenu,
                _ => PauseAction::Quit,
            };
        }

        clear_background(BLACK);
        draw_centered("Paused", 110.0, 40.0, WHITE);
        draw_items(&items, selected, 180.0);
        next_frame().await;
    }
}

/// Settings menu: toggles are persisted in full on every change
pub async fn settings_menu(settings: &mut Settings) -> MenuExit {
    let mut selected = 0usize;
    const COUNT: usize = 3;

    loop {
        if is_quit_requested() {
            return MenuExit::Quit;
        }
        move_selection(&mut selected, COUNT);

        let toggle = is_key_pressed(KeyCode::Left)
            || is_key_pressed(KeyCode::Right)
            || (is_key_pressed(KeyCode::Enter) && selected < 2);
        if toggle {
            let changed = match selected {
                0 => {
                    settings.difficulty = settings.difficulty.toggled();
                    true
                }
                1 => {
                    settings.sound_on = !settings.sound_on;
                    true
                }
                _ => false,
            };
            // Every mutation rewrites the whole file
            if changed {
                if let Err(e) = settings.save(Path::new(SETTINGS_FILE)) {
                    log::warn!("could not persist settings: {e}");
                }
            }
        }
        if is_key_pressed(KeyCode::Escape) || (is_key_pressed(KeyCode::Enter) && selected == 2) {
            return MenuExit::Back;
        }

        let items = [
            format!("Difficulty: {}", settings.difficulty.as_str()),
            format!("Sound: {}", if settings.sound_on { "On" } else { "Off" }),
            "Back".to_string(),
        ];
        clear_background(BLACK);
        draw_centered("Settings", 110.0, 40.0, WHITE);
        for (i, text) in items.iter().enumerate() {
            draw_item(text, 180.0 + i as f32 * 36.0, i == selected);
        }
        draw_centered(
            "Left/Right: change  Esc: back",
            SCREEN_HEIGHT - 40.0,
            18.0,
            DARKGRAY,
        );
        next_frame().await;
    }
}

pub async fn credits_menu() -> MenuExit {
    loop {
        if is_quit_requested() {
            return MenuExit::Quit;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Escape) {
            return MenuExit::Back;
        }

        clear_background(BLACK);
        draw_centered("Credits", 110.0, 40.0, WHITE);
        draw_centered("Falling Coins", 180.0, 24.0, GOLD);
        draw_centered("A tiny catch-the-coins arcade game", 212.0, 20.0, LIGHTGRAY);
        draw_centered("Enter or Esc to go back", SCREEN_HEIGHT - 40.0, 18.0, DARKGRAY);
        next_frame().await;
    }
}

fn move_selection(selected: &mut usize, count: usize) {
    if is_key_pressed(KeyCode::Up) {
        *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
    }
    if is_key_pressed(KeyCode::Down) {
        *selected = (*selected + 1) % count;
    }
}

fn draw_items(items: &[&str], selected: usize, top: f32) {
    for (i, text) in items.iter().enumerate() {
        draw_item(text, top + i as f32 * 36.0, i == selected);
    }
}

fn draw_item(text: &str, y: f32, selected: bool) {
    let (size, color) = if selected { (28.0, WHITE) } else { (24.0, LIGHTGRAY) };
    draw_centered(text, y, size, color);
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y, size, color);
}
