//! Input events and the phase state machine
//!
//! Raw key codes are translated into `InputEvent` once at the boundary; the
//! handlers below never see magic numbers.

use super::platforms;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Escape key code
pub const KEY_ESC: u32 = 27;
/// Backspace key codes (BS and DEL)
pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_DELETE: u32 = 127;

/// Logical input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character
    Type(char),
    Backspace,
    Escape,
    Space,
    /// Unconditional exit request (e.g. Ctrl-C in the shell)
    Quit,
}

impl InputEvent {
    /// Translate a raw key code. Returns `None` for unprintable codes.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            KEY_ESC => Some(Self::Escape),
            KEY_BACKSPACE | KEY_DELETE => Some(Self::Backspace),
            _ => match char::from_u32(code)? {
                ' ' => Some(Self::Space),
                ch if !ch.is_control() => Some(Self::Type(ch)),
                _ => None,
            },
        }
    }

    /// `q`/`Q`, which quits outside of active play
    fn is_quit_letter(self) -> bool {
        matches!(self, Self::Type('q' | 'Q'))
    }
}

/// Apply one input event to the game
pub fn process_input(state: &mut GameState, event: InputEvent) {
    if event == InputEvent::Quit {
        log::info!("Quit requested");
        state.should_exit = true;
        return;
    }

    match state.phase {
        GamePhase::Menu => menu_input(state, event),
        GamePhase::Playing => playing_input(state, event),
        GamePhase::Paused => paused_input(state, event),
        GamePhase::GameOver => game_over_input(state, event),
    }
}

fn set_phase(state: &mut GameState, phase: GamePhase) {
    if state.phase != phase {
        log::info!("Phase {:?} -> {:?}", state.phase, phase);
        state.phase = phase;
    }
}

fn start_session(state: &mut GameState) {
    set_phase(state, GamePhase::Playing);
    state.reset();
}

fn menu_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Space => start_session(state),
        InputEvent::Escape => state.should_exit = true,
        e if e.is_quit_letter() => state.should_exit = true,
        InputEvent::Type(ch @ '1'..='3') => {
            if let Some(level) = ch.to_digit(10) {
                state.words.set_difficulty(level as u8);
            }
        }
        _ => {}
    }
}

fn playing_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Escape => set_phase(state, GamePhase::Paused),
        InputEvent::Backspace => handle_backspace(state),
        InputEvent::Type(ch) if ch.is_ascii_alphanumeric() => handle_typing(state, ch),
        _ => {}
    }
}

fn paused_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Escape => set_phase(state, GamePhase::Playing),
        e if e.is_quit_letter() => state.should_exit = true,
        _ => {}
    }
}

fn game_over_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Space => start_session(state),
        e if e.is_quit_letter() => state.should_exit = true,
        _ => {}
    }
}

/// Append `ch` to the current platform's typed buffer if it is the next letter
fn handle_typing(state: &mut GameState, ch: char) {
    let index = state.player.platform;
    let Some(platform) = state.platforms.get(index) else {
        return;
    };
    if platform.complete || !state.words.is_valid_next_char(&platform.word, &platform.typed, ch) {
        return;
    }

    let platform = &mut state.platforms[index];
    platform.typed.push(ch);
    state.chars_typed += 1;

    if state.words.is_complete(&platform.word, &platform.typed) {
        complete_word(state, index);
    }
}

/// Drop the last typed letter of the current platform
fn handle_backspace(state: &mut GameState) {
    if let Some(platform) = state.current_platform_mut() {
        if !platform.complete {
            platform.typed.pop();
        }
    }
}

/// Score the word on `index` and jump to the next platform up
fn complete_word(state: &mut GameState, index: usize) {
    let platform = &mut state.platforms[index];
    platform.complete = true;
    let letters = platform.word.chars().count() as u64;
    state.words_typed += 1;

    let mut points = letters * POINTS_PER_LETTER;
    let elapsed = state.elapsed_at(std::time::Instant::now()).as_secs_f64();
    if elapsed > 0.0 {
        let bonus = (MAX_SPEED_BONUS - elapsed / f64::from(state.words_typed)).max(0.0);
        points += bonus as u64;
    }
    state.score += points;

    log::debug!(
        "Completed '{}' for {} points (score {}, words {})",
        state.platforms[index].word,
        points,
        state.score,
        state.words_typed
    );

    jump_to_next_platform(state);
}

/// Move the player to the nearest incomplete platform above.
///
/// With no candidate, more platforms are generated and the jump is left for a
/// later tick. Returns true if the player moved.
pub fn jump_to_next_platform(state: &mut GameState) -> bool {
    match platforms::next_platform_above(&state.platforms, state.player.platform) {
        Some(next) => {
            state.player.platform = next;
            state.player.stand_on(&state.platforms[next]);
            true
        }
        None => {
            platforms::generate_more(&mut state.platforms, &mut state.words, state.width);
            false
        }
    }
}
