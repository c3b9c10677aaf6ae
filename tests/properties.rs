//! Property-based invariant tests for the session loop
//!
//! These quantify over random seeds and input sequences; the scenario-level
//! tests live next to the simulation code.

use proptest::prelude::*;

use falling_coins::consts::*;
use falling_coins::settings::Difficulty;
use falling_coins::sim::{SessionEvent, SessionParams, SessionState, TickInput, tick};

fn session(seed: u64, difficulty: Difficulty) -> SessionState {
    SessionState::new(SessionParams::for_difficulty(difficulty, true), 0, seed)
}

proptest! {
    #[test]
    fn paddle_never_leaves_the_playfield(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(any::<(bool, bool)>(), 1..300),
    ) {
        let mut state = session(seed, Difficulty::Easy);
        for (left, right) in inputs {
            tick(&mut state, &TickInput { left, right, pause: false });
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= SCREEN_WIDTH - state.paddle.width);
        }
    }

    #[test]
    fn score_is_monotone_and_counts_catches(
        seed in any::<u64>(),
        ticks in 1usize..400,
    ) {
        let mut state = session(seed, Difficulty::Hard);
        let mut previous = state.score;
        for _ in 0..ticks {
            let out = tick(&mut state, &TickInput::default());
            let caught = out
                .events
                .iter()
                .filter(|e| **e == SessionEvent::CoinCaught)
                .count() as u32;
            prop_assert_eq!(state.score, previous + caught);
            prop_assert!(state.score >= previous);
            previous = state.score;
        }
    }

    #[test]
    fn coins_only_fall_and_never_linger_below_the_floor(
        seed in any::<u64>(),
        ticks in 1usize..400,
    ) {
        let mut state = session(seed, Difficulty::Easy);
        for _ in 0..ticks {
            // Surviving coins keep their order and descend by exactly the
            // pre-tick speed, so they form a subsequence of this projection
            let speed = state.coin_speed;
            let expected: Vec<(u32, u32)> = state
                .coins
                .iter()
                .map(|c| (c.pos.x.to_bits(), (c.pos.y + speed).to_bits()))
                .collect();

            tick(&mut state, &TickInput::default());

            let mut remaining = expected.iter();
            for coin in &state.coins {
                prop_assert!(coin.pos.y < SCREEN_HEIGHT);
                let key = (coin.pos.x.to_bits(), coin.pos.y.to_bits());
                if !remaining.any(|e| *e == key) {
                    // Not a survivor, so it must be this tick's fresh spawn
                    prop_assert_eq!(coin.pos.y, speed);
                }
            }
        }
    }

    #[test]
    fn high_score_never_decreases_and_tracks_the_lead(
        seed in any::<u64>(),
        baseline in 0u32..50,
        ticks in 1usize..400,
    ) {
        let params = SessionParams::for_difficulty(Difficulty::Hard, true);
        let mut state = SessionState::new(params, baseline, seed);
        for _ in 0..ticks {
            let previous = state.high_score;
            tick(&mut state, &TickInput { right: true, ..Default::default() });
            prop_assert!(state.high_score >= previous);
            prop_assert!(state.high_score >= state.baseline);
            if state.score > state.baseline {
                prop_assert_eq!(state.high_score, state.score);
            }
        }
    }

    #[test]
    fn session_parameters_stay_within_their_caps(
        seed in any::<u64>(),
        ticks in 1usize..600,
    ) {
        // Alternate the paddle under a heavy spawn rate to rack up milestones
        let mut state = session(seed, Difficulty::Hard);
        state.params.spawn_denominator = 1;
        for i in 0..ticks {
            let input = TickInput {
                left: i % 40 < 20,
                right: i % 40 >= 20,
                pause: false,
            };
            tick(&mut state, &input);
            prop_assert!(state.paddle.width <= state.params.paddle_max_width);
            prop_assert!(state.paddle.speed <= state.params.paddle_max_speed);
            prop_assert!(state.coin_speed <= state.params.max_coin_speed);
        }
    }
}
