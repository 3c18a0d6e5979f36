//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the engine owns; everything the state
//! machine, the tick and the renderer touch lives here.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::platforms;
use super::words::WordCatalog;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen
    #[default]
    Menu,
    /// Active climb, simulation ticking
    Playing,
    /// Climb frozen, overlay shown
    Paused,
    /// Player fell off the bottom of the screen
    GameOver,
}

/// A ledge carrying one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub word: String,
    /// Correct letters typed so far (always a case-insensitive prefix of `word`)
    pub typed: String,
    pub complete: bool,
}

impl Platform {
    pub fn new(x: i32, y: i32, width: i32, word: String) -> Self {
        Self {
            x,
            y,
            width,
            word,
            typed: String::new(),
            complete: false,
        }
    }

    /// Column the player stands on
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Letters of `word` not yet typed
    pub fn remaining(&self) -> &str {
        let typed_len = self.typed.chars().count();
        match self.word.char_indices().nth(typed_len) {
            Some((idx, _)) => &self.word[idx..],
            None => "",
        }
    }
}

/// The climber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Index into `GameState::platforms`
    pub platform: usize,
}

impl Player {
    /// Stand centered on `platform`, one row above it
    pub fn stand_on(&mut self, platform: &Platform) {
        self.x = platform.center_x();
        self.y = platform.y - 1;
    }
}

/// Sub-row scroll distance carried between ticks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollAccumulator {
    remainder: f64,
}

impl ScrollAccumulator {
    /// Accumulate `speed * dt` and return the whole rows to move this tick.
    /// The fractional part stays in the accumulator.
    pub fn advance(&mut self, speed: f64, dt: f64) -> i32 {
        self.remainder += speed * dt;
        if self.remainder >= 1.0 {
            let rows = self.remainder.trunc();
            self.remainder -= rows;
            rows.min(f64::from(i32::MAX)) as i32
        } else {
            0
        }
    }

    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    pub fn clear(&mut self) {
        self.remainder = 0.0;
    }
}

/// Session statistics, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub score: u64,
    pub wpm: f64,
    pub cpm: f64,
    pub words_typed: u32,
    pub chars_typed: u32,
    pub elapsed: Duration,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub width: i32,
    pub height: i32,
    pub player: Player,
    /// Platforms in generation order
    pub platforms: Vec<Platform>,
    pub score: u64,
    /// Session start
    pub started_at: Instant,
    pub words_typed: u32,
    pub chars_typed: u32,
    /// Scroll speed in rows per second
    pub scroll_speed: f64,
    pub scroll: ScrollAccumulator,
    pub should_exit: bool,
    pub words: WordCatalog,
}

impl GameState {
    /// Create a game in the menu with the given catalog
    pub fn new(words: WordCatalog, scroll_speed: f64) -> Self {
        Self {
            phase: GamePhase::Menu,
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
            player: Player::default(),
            platforms: Vec::new(),
            score: 0,
            started_at: Instant::now(),
            words_typed: 0,
            chars_typed: 0,
            scroll_speed,
            scroll: ScrollAccumulator::default(),
            should_exit: false,
            words,
        }
    }

    /// Start a fresh session: score, clock, platforms and player
    pub fn reset(&mut self) {
        self.score = 0;
        self.words_typed = 0;
        self.chars_typed = 0;
        self.started_at = Instant::now();
        self.scroll.clear();

        self.platforms = platforms::generate_initial(&mut self.words, self.width, self.height);
        self.player = Player::default();
        if let Some(start) = self.platforms.first() {
            self.player.stand_on(start);
        }

        log::info!(
            "Session reset: {}x{}, {} platforms, difficulty {}",
            self.width,
            self.height,
            self.platforms.len(),
            self.words.difficulty()
        );
    }

    /// Platform the player currently rides
    pub fn current_platform(&self) -> Option<&Platform> {
        self.platforms.get(self.player.platform)
    }

    pub fn current_platform_mut(&mut self) -> Option<&mut Platform> {
        self.platforms.get_mut(self.player.platform)
    }

    /// Rows available to the play grid (screen minus HUD)
    pub fn play_rows(&self) -> i32 {
        (self.height - HUD_ROWS).max(0)
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Statistics as of `now`
    pub fn stats_at(&self, now: Instant) -> Stats {
        let elapsed = self.elapsed_at(now);
        let minutes = elapsed.as_secs_f64() / 60.0;

        let (wpm, cpm) = if minutes > 0.0 {
            (
                f64::from(self.words_typed) / minutes,
                f64::from(self.chars_typed) / minutes,
            )
        } else {
            (0.0, 0.0)
        };

        Stats {
            score: self.score,
            wpm,
            cpm,
            words_typed: self.words_typed,
            chars_typed: self.chars_typed,
            elapsed,
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats_at(Instant::now())
    }
}

/// Format a duration as `m:ss`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
