//! Fixed timestep simulation tick
//!
//! Scrolls the platform field down, keeps the player riding its platform and
//! maintains the field while the climb is running.

use super::input::jump_to_next_platform;
use super::platforms;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Advance the game by one fixed timestep. No-op outside of `Playing`.
pub fn tick(state: &mut GameState, dt: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let rows = state.scroll.advance(state.scroll_speed, dt);
    if rows > 0 {
        for platform in &mut state.platforms {
            platform.y = platform.y.saturating_add(rows);
        }
        log::trace!("Scrolled {} rows (remainder {:.3})", rows, state.scroll.remainder());
    }

    let Some(current) = state.platforms.get(state.player.platform) else {
        return;
    };
    let complete = current.complete;
    state.player.stand_on(current);

    if state.player.y >= state.height - DEATH_MARGIN {
        state.phase = GamePhase::GameOver;
        let stats = state.stats();
        log::info!(
            "Game over: score {}, {} words, {:.1} wpm",
            stats.score,
            stats.words_typed,
            stats.wpm
        );
        return;
    }

    // A jump deferred by a completion with nothing above
    if complete {
        jump_to_next_platform(state);
    }

    platforms::generate_more(&mut state.platforms, &mut state.words, state.width);
    state.player.platform = platforms::prune(&mut state.platforms, state.height, state.player.platform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{InputEvent, process_input};
    use crate::sim::state::Platform;
    use crate::sim::words::WordCatalog;
    use proptest::prelude::*;

    fn playing_state(scroll_speed: f64) -> GameState {
        let mut state = GameState::new(WordCatalog::new(4242), scroll_speed);
        state.width = 80;
        state.height = 24;
        process_input(&mut state, InputEvent::Space);
        state
    }

    #[test]
    fn test_tick_only_while_playing() {
        let mut state = playing_state(60.0);
        let y = state.platforms[0].y;

        state.phase = GamePhase::Paused;
        tick(&mut state, SIM_DT);
        assert_eq!(state.platforms[0].y, y);

        state.phase = GamePhase::Playing;
        tick(&mut state, SIM_DT);
        assert_eq!(state.platforms[0].y, y + 1);
    }

    #[test]
    fn test_slow_scroll_accumulates() {
        // 6 rows/s = a tenth of a row per tick
        let mut state = playing_state(6.0);
        let y = state.platforms[0].y;
        for _ in 0..9 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.platforms[0].y, y);
        tick(&mut state, SIM_DT);
        tick(&mut state, SIM_DT);
        assert_eq!(state.platforms[0].y, y + 1);
    }

    #[test]
    fn test_player_follows_platform() {
        let mut state = playing_state(120.0);
        tick(&mut state, SIM_DT);
        let platform = &state.platforms[state.player.platform];
        assert_eq!(state.player.y, platform.y - 1);
        assert_eq!(state.player.x, platform.center_x());
    }

    #[test]
    fn test_tick_generates_more_platforms() {
        let mut state = playing_state(DEFAULT_SCROLL_SPEED);
        let before = state.platforms.len();
        tick(&mut state, SIM_DT);
        assert!(state.platforms.len() > before);
        assert!(platforms::highest_y(&state.platforms).unwrap() <= GENERATE_CEILING);
    }

    #[test]
    fn test_falling_off_bottom_ends_game() {
        let mut state = playing_state(60.0);
        state.platforms[0].y = state.height - DEATH_MARGIN + 1;
        let len = state.platforms.len();

        tick(&mut state, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Tick stops early: no generation that frame
        assert_eq!(state.platforms.len(), len);

        let y = state.platforms[0].y;
        tick(&mut state, SIM_DT);
        assert_eq!(state.platforms[0].y, y);
    }

    #[test]
    fn test_deferred_jump_retried() {
        let mut state = playing_state(DEFAULT_SCROLL_SPEED);
        state.platforms = vec![Platform::new(10, 10, 20, "ab".into())];
        state.player.platform = 0;
        process_input(&mut state, InputEvent::Type('a'));
        process_input(&mut state, InputEvent::Type('b'));
        assert_eq!(state.player.platform, 0);

        tick(&mut state, SIM_DT);
        assert_ne!(state.player.platform, 0);
        assert!(state.platforms[state.player.platform].y < state.platforms[0].y);
    }

    #[test]
    fn test_player_index_valid_while_climbing() {
        let mut state = playing_state(30.0);
        for _ in 0..600 {
            if let Some(word) = state.current_platform().map(|p| p.remaining().to_string()) {
                if let Some(ch) = word.chars().next() {
                    process_input(&mut state, InputEvent::Type(ch));
                }
            }
            tick(&mut state, SIM_DT);
            assert!(state.player.platform < state.platforms.len());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.words_typed > 0);
    }

    #[test]
    fn test_huge_scroll_speed_ends_game_without_overflow() {
        let mut state = playing_state(1e12);
        tick(&mut state, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.platforms.iter().all(|p| p.y > state.height));

        let mut acc = crate::sim::state::ScrollAccumulator::default();
        assert_eq!(acc.advance(f64::MAX, 1.0), i32::MAX);
    }

    proptest! {
        #[test]
        fn prop_scroll_is_lossless(speed in 0.01f64..500.0, ticks in 1usize..2000) {
            let mut acc = crate::sim::state::ScrollAccumulator::default();
            let moved: i64 = (0..ticks).map(|_| i64::from(acc.advance(speed, SIM_DT))).sum();
            let expected = speed * ticks as f64 / 60.0;
            prop_assert!((moved as f64 - expected).abs() <= 1.0, "moved {} expected {}", moved, expected);
        }
    }
}
