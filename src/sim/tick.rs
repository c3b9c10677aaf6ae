//! Per-tick session advance
//!
//! One call to [`tick`] runs the full pipeline for a single fixed step:
//! input, spawn, advance, collision, progression, high score, cleanup.
//! Rendering is not part of the tick; the frontend projects state into a
//! scene whenever it wants a frame.

use rand::Rng;

use super::state::{Coin, Highlight, HighlightKind, SessionState};
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key currently held
    pub left: bool,
    /// Right movement key currently held
    pub right: bool,
    /// Pause was pressed since the last tick
    pub pause: bool,
}

/// Audio-worthy things that happened during a tick.
///
/// Only emitted when the session was started with sound on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A coin landed on the paddle
    CoinCaught,
    /// The persisted high score was beaten for the first time this session
    NewHighScore,
}

/// What a single tick produced
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    pub events: Vec<SessionEvent>,
    /// The loop should hand control to the pause menu. A tick that sets this
    /// performs no simulation, so resuming never double-moves the paddle.
    pub paused: bool,
}

/// Advance the session by one fixed tick
pub fn tick(state: &mut SessionState, input: &TickInput) -> TickOutput {
    let mut out = TickOutput::default();

    if input.pause {
        out.paused = true;
        return out;
    }

    state.time_ticks += 1;

    move_paddle(state, input);
    spawn_coin(state);
    advance_coins(state);
    catch_coins(state, &mut out);
    apply_progression(state);
    track_high_score(state, &mut out);
    drop_missed_coins(state);

    out
}

/// Input phase: left is processed before right; both clamp, never wrap
fn move_paddle(state: &mut SessionState, input: &TickInput) {
    let speed = state.paddle.speed;
    if input.left {
        state.paddle.shift(-speed);
    }
    if input.right {
        state.paddle.shift(speed);
    }
}

/// Spawn phase: one uniform draw per tick; the sentinel value 1 spawns a
/// single coin at a margin-clamped random x along the top edge.
fn spawn_coin(state: &mut SessionState) {
    let denom = state.params.spawn_denominator;
    if state.rng.random_range(1..=denom) != 1 {
        return;
    }
    let x = state
        .rng
        .random_range(COIN_RADIUS..=SCREEN_WIDTH - COIN_RADIUS);
    state.coins.push(Coin::at_top(x));
}

/// Advance phase: every live coin falls by the shared session speed.
/// Expired paddle highlights are checked and cleared here too.
fn advance_coins(state: &mut SessionState) {
    for coin in &mut state.coins {
        coin.pos.y += state.coin_speed;
    }
    if let Some(highlight) = state.paddle.highlight {
        if state.time_ticks >= highlight.until_tick {
            state.paddle.highlight = None;
        }
    }
}

/// Collision phase: a coin is caught when its bottom edge passes the paddle
/// top while its center is strictly between the paddle edges. Caught coins
/// are removed on the spot, so each scores at most once.
fn catch_coins(state: &mut SessionState, out: &mut TickOutput) {
    let (left, right, top) = (state.paddle.x, state.paddle.right(), state.paddle.y);

    let mut caught = 0u32;
    state.coins.retain(|coin| {
        let hit = top < coin.pos.y + coin.radius && left < coin.pos.x && coin.pos.x < right;
        if hit {
            caught += 1;
        }
        !hit
    });

    state.score += caught;
    if state.params.sound_on {
        for _ in 0..caught {
            out.events.push(SessionEvent::CoinCaught);
        }
    }
}

/// Progression phase: each newly crossed multiple-of-10 milestone widens and
/// quickens the paddle and raises the coin fall speed, as long as the paddle
/// is still below its maximum width. A milestone is consumed exactly once.
fn apply_progression(state: &mut SessionState) {
    let reached = state.score / MILESTONE_INTERVAL;
    while state.milestones_applied < reached {
        state.milestones_applied += 1;
        if state.paddle.width >= state.params.paddle_max_width {
            continue;
        }

        let params = &state.params;
        state.paddle.width =
            (state.paddle.width + params.paddle_width_increment).min(params.paddle_max_width);
        state.paddle.speed =
            (state.paddle.speed + params.paddle_speed_increment).min(params.paddle_max_speed);
        state.coin_speed = (state.coin_speed + params.coin_speed_increment).min(params.max_coin_speed);

        // Growing in place may push the right edge off screen
        state.paddle.x = state.paddle.x.min(SCREEN_WIDTH - state.paddle.width);

        state.paddle.highlight = Some(Highlight {
            kind: HighlightKind::Growth,
            until_tick: state.time_ticks + HIGHLIGHT_TICKS,
        });
    }
}

/// High-score phase: the live high score tracks the current score once the
/// session baseline is exceeded. The new-best cue fires on the exact tick the
/// baseline is first beaten, and only when there was a baseline to beat.
fn track_high_score(state: &mut SessionState, out: &mut TickOutput) {
    if state.score <= state.baseline {
        return;
    }
    state.high_score = state.score;

    if state.params.sound_on && state.baseline > 0 && state.score == state.baseline + 1 {
        out.events.push(SessionEvent::NewHighScore);
        state.paddle.highlight = Some(Highlight {
            kind: HighlightKind::NewBest,
            until_tick: state.time_ticks + HIGHLIGHT_TICKS,
        });
    }
}

/// Cleanup phase: coins that reached the bottom edge are gone
fn drop_missed_coins(state: &mut SessionState) {
    state.coins.retain(|coin| coin.pos.y < SCREEN_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use crate::sim::SessionParams;

    fn session(baseline: u32) -> SessionState {
        let params = SessionParams::for_difficulty(Difficulty::Easy, true);
        SessionState::new(params, baseline, 12345)
    }

    /// A coin placed so the very next tick lands it on the paddle center
    fn coin_over_paddle(state: &SessionState) -> Coin {
        let x = state.paddle.x + state.paddle.width / 2.0;
        let y = state.paddle.y - state.coin_speed;
        let mut coin = Coin::at_top(x);
        coin.pos.y = y;
        coin
    }

    #[test]
    fn test_paddle_clamps_at_edges() {
        let mut state = session(0);

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut state, &left);
            assert!(state.paddle.x >= 0.0);
        }
        assert_eq!(state.paddle.x, 0.0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &right);
        }
        assert_eq!(state.paddle.x, SCREEN_WIDTH - state.paddle.width);
    }

    #[test]
    fn test_pause_tick_performs_no_simulation() {
        let mut state = session(0);
        state.coins.push(Coin::at_top(100.0));
        let before = state.clone();

        let input = TickInput {
            left: true,
            pause: true,
            ..Default::default()
        };
        let out = tick(&mut state, &input);

        assert!(out.paused);
        assert!(out.events.is_empty());
        assert_eq!(state.time_ticks, before.time_ticks);
        assert_eq!(state.paddle.x, before.paddle.x);
        assert_eq!(state.coins, before.coins);
        assert_eq!(state.score, before.score);
    }

    #[test]
    fn test_sentinel_spawns_exactly_one_coin_per_tick() {
        let mut state = session(0);
        state.params.spawn_denominator = 1;

        for expected in 1..=5 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.coins.len(), expected);
        }
        for coin in &state.coins {
            assert!(coin.pos.x >= COIN_RADIUS);
            assert!(coin.pos.x <= SCREEN_WIDTH - COIN_RADIUS);
        }
    }

    #[test]
    fn test_missed_coin_falls_out_after_height_over_speed_ticks() {
        let mut state = session(0);
        state.params.spawn_denominator = 1;
        // Make the paddle impossible to hit so nothing is ever caught
        state.paddle.width = 0.0;

        let ticks = (SCREEN_HEIGHT / state.coin_speed) as usize;
        for _ in 0..ticks - 1 {
            tick(&mut state, &TickInput::default());
        }
        // First coin is one step from the bottom
        assert_eq!(state.coins[0].pos.y, SCREEN_HEIGHT - state.coin_speed);
        assert_eq!(state.coins.len(), ticks - 1);

        tick(&mut state, &TickInput::default());
        // It fell out; one new coin spawned, so the count holds steady
        assert_eq!(state.coins.len(), ticks - 1);
        assert_eq!(state.score, 0);
        for coin in &state.coins {
            assert!(coin.pos.y < SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_catch_scores_and_emits_event() {
        let mut state = session(0);
        let coin = coin_over_paddle(&state);
        state.coins.push(coin);

        let out = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(out.events, vec![SessionEvent::CoinCaught]);
        assert!(!state.coins.contains(&coin));
    }

    #[test]
    fn test_coin_outside_paddle_edges_is_not_caught() {
        let mut state = session(0);
        // Exactly on the left edge: the test is strict, so no catch
        let mut coin = coin_over_paddle(&state);
        coin.pos.x = state.paddle.x;
        state.coins.push(coin);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_milestone_grows_paddle_and_speeds_up_coins() {
        let mut state = session(0);
        state.score = 9;
        state.milestones_applied = 0;
        state.coins.push(coin_over_paddle(&state));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 10);
        assert_eq!(state.paddle.width, 45.0);
        assert_eq!(state.paddle.speed, 7.5);
        assert_eq!(state.coin_speed, 4.5);
        assert_eq!(
            state.paddle.highlight.map(|h| h.kind),
            Some(HighlightKind::Growth)
        );
    }

    #[test]
    fn test_progression_applies_once_per_milestone() {
        let mut state = session(0);
        state.score = 9;
        state.coins.push(coin_over_paddle(&state));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.paddle.width, 45.0);

        // Same score on later ticks: no further growth
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        assert_eq!(state.paddle.width, 45.0);
        assert_eq!(state.coin_speed, 4.5);
    }

    #[test]
    fn test_milestone_skipped_once_paddle_is_at_max_width() {
        let mut state = session(0);
        state.paddle.width = state.params.paddle_max_width;
        let speed_before = state.paddle.speed;
        let coin_speed_before = state.coin_speed;
        state.score = 9;
        state.coins.push(coin_over_paddle(&state));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 10);
        assert_eq!(state.paddle.width, state.params.paddle_max_width);
        assert_eq!(state.paddle.speed, speed_before);
        assert_eq!(state.coin_speed, coin_speed_before);
        assert!(state.paddle.highlight.is_none());
    }

    #[test]
    fn test_growth_keeps_paddle_inside_playfield() {
        let mut state = session(0);
        state.paddle.x = SCREEN_WIDTH - state.paddle.width;
        state.score = 9;
        state.coins.push(coin_over_paddle(&state));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.paddle.width, 45.0);
        assert!(state.paddle.x <= SCREEN_WIDTH - state.paddle.width);
    }

    #[test]
    fn test_new_best_cue_fires_exactly_once() {
        let mut state = session(5);
        state.score = 5;

        state.coins.push(coin_over_paddle(&state));
        let out = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 6);
        assert_eq!(state.high_score, 6);
        assert_eq!(
            out.events
                .iter()
                .filter(|e| **e == SessionEvent::NewHighScore)
                .count(),
            1
        );
        assert_eq!(
            state.paddle.highlight.map(|h| h.kind),
            Some(HighlightKind::NewBest)
        );

        // Climbing further updates the high score but never re-fires the cue
        state.coins.push(coin_over_paddle(&state));
        let out = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 7);
        assert_eq!(state.high_score, 7);
        assert!(!out.events.contains(&SessionEvent::NewHighScore));
    }

    #[test]
    fn test_no_cue_on_very_first_session() {
        let mut state = session(0);
        state.coins.push(coin_over_paddle(&state));

        let out = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert!(!out.events.contains(&SessionEvent::NewHighScore));
        assert!(state.paddle.highlight.is_none());
    }

    #[test]
    fn test_sound_off_suppresses_events_and_cue() {
        let params = SessionParams::for_difficulty(Difficulty::Easy, false);
        let mut state = SessionState::new(params, 5, 12345);
        state.score = 5;
        state.coins.push(coin_over_paddle(&state));

        let out = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 6);
        assert_eq!(state.high_score, 6);
        assert!(out.events.is_empty());
        assert!(state.paddle.highlight.is_none());
    }

    #[test]
    fn test_highlight_expires_after_its_window() {
        let mut state = session(0);
        state.score = 9;
        state.coins.push(coin_over_paddle(&state));
        tick(&mut state, &TickInput::default());
        assert!(state.paddle.highlight.is_some());

        for _ in 0..HIGHLIGHT_TICKS {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.paddle.highlight.is_none());
    }

    #[test]
    fn test_determinism() {
        let params = SessionParams::for_difficulty(Difficulty::Hard, true);
        let mut a = SessionState::new(params.clone(), 3, 99999);
        let mut b = SessionState::new(params, 3, 99999);

        for i in 0..200 {
            let input = TickInput {
                left: i % 3 == 0,
                right: i % 5 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.paddle.x, b.paddle.x);
        assert_eq!(a.coins, b.coins);
    }
}
