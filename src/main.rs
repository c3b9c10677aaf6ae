//! Falling Coins entry point
//!
//! Owns the window, the menu dispatch, and the fixed-rate session loop.
//! Settings are persisted on every exit path, including the window close
//! button (intercepted via `prevent_quit`).

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use falling_coins::audio::{AudioManager, SoundEffect};
use falling_coins::consts::*;
use falling_coins::menu::{self, MainMenuAction, MenuExit, PauseAction};
use falling_coins::render;
use falling_coins::scene;
use falling_coins::settings::{SETTINGS_FILE, Settings};
use falling_coins::sim::{SessionEvent, SessionParams, SessionState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Coins".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionExit {
    ToMenu,
    Quit,
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::try_init();
    prevent_quit();

    let mut settings = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("cannot load settings: {e}");
            std::process::exit(1);
        }
    };

    let audio = AudioManager::load().await;

    loop {
        match menu::main_menu(&settings).await {
            MainMenuAction::StartGame => {
                let exit = run_session(&mut settings, &audio).await;
                persist(&settings);
                if exit == SessionExit::Quit {
                    return;
                }
            }
            MainMenuAction::Settings => {
                if menu::settings_menu(&mut settings).await == MenuExit::Quit {
                    persist(&settings);
                    return;
                }
            }
            MainMenuAction::Credits => {
                if menu::credits_menu().await == MenuExit::Quit {
                    persist(&settings);
                    return;
                }
            }
            MainMenuAction::Quit => {
                persist(&settings);
                return;
            }
        }
    }
}

/// Run one gameplay session until the player leaves or quits.
///
/// Ticks are capped at the nominal rate: at most one simulation step per
/// elapsed tick interval, and no catch-up when frames run slow.
async fn run_session(settings: &mut Settings, audio: &AudioManager) -> SessionExit {
    let params = SessionParams::for_difficulty(settings.difficulty, settings.sound_on);
    let mut session = SessionState::new(params, settings.high_score, session_seed());
    log::info!(
        "session started: {:?} difficulty, baseline {}",
        settings.difficulty,
        settings.high_score
    );

    let mut tick_accum = 0.0f32;
    let mut pause_requested = false;

    loop {
        if is_quit_requested() {
            return end_session(settings, &session, SessionExit::Quit);
        }

        // Key presses only last one frame, so latch pause until the next tick
        pause_requested |= is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::P);

        tick_accum += get_frame_time();
        if tick_accum >= TICK_DT {
            tick_accum = 0.0;

            let input = TickInput {
                left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
                right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
                pause: pause_requested,
            };
            pause_requested = false;

            let out = tick(&mut session, &input);

            for &event in &out.events {
                audio.play(match event {
                    SessionEvent::CoinCaught => SoundEffect::CoinCaught,
                    SessionEvent::NewHighScore => SoundEffect::HighScore,
                });
            }

            if out.paused {
                match menu::pause_menu().await {
                    PauseAction::Resume => tick_accum = 0.0,
                    PauseAction::MainMenu => {
                        return end_session(settings, &session, SessionExit::ToMenu);
                    }
                    PauseAction::Quit => {
                        return end_session(settings, &session, SessionExit::Quit);
                    }
                }
            }
        }

        render::draw(&scene::project(&session));
        next_frame().await;
    }
}

/// Fold the session's high score back into the settings record
fn end_session(settings: &mut Settings, session: &SessionState, exit: SessionExit) -> SessionExit {
    settings.high_score = session.high_score;
    log::info!(
        "session over: score {}, high score {}",
        session.score,
        session.high_score
    );
    exit
}

fn persist(settings: &Settings) {
    if let Err(e) = settings.save(Path::new(SETTINGS_FILE)) {
        log::warn!("could not persist settings: {e}");
    }
}

fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
