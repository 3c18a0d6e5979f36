//! Text-grid rendering module
//!
//! Turns a `GameState` into one frame of text with ANSI cursor and color
//! sequences. Rendering only reads the state.

pub mod ansi;
pub mod grid;

use std::fmt::Write as _;
use std::time::Instant;

pub use grid::{Cell, Grid};

use crate::consts::HUD_ROWS;
use crate::sim::{GamePhase, GameState, Platform, Stats, difficulty_label, format_elapsed};

const TITLE: &str = "ASCII TYPING PLATFORMER";
const PLATFORM_CHAR: char = '=';
const PLAYER_CHAR: char = '@';

/// Text renderer for a fixed screen size
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: i32,
    height: i32,
}

impl TextRenderer {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn update_dimensions(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Render the frame for the current phase
    pub fn render(&self, state: &GameState) -> String {
        self.render_at(state, Instant::now())
    }

    /// Render with an explicit clock reading (elapsed time and rates)
    pub fn render_at(&self, state: &GameState, now: Instant) -> String {
        match state.phase {
            GamePhase::Menu => self.render_menu(state),
            GamePhase::Playing => self.render_gameplay(state, now),
            GamePhase::Paused => self.render_paused(state, now),
            GamePhase::GameOver => self.render_game_over(state, now),
        }
    }

    fn render_menu(&self, state: &GameState) -> String {
        let mut out = String::from(ansi::CLEAR_HOME);
        let (cx, cy) = (self.width / 2, self.height / 2);

        self.write_centered(&mut out, cx, cy - 3, TITLE, &[ansi::BOLD, ansi::CYAN]);
        for (i, option) in ["Press SPACE to Start", "Press Q to Quit"].iter().enumerate() {
            self.write_centered(&mut out, cx, cy + i as i32, option, &[ansi::WHITE]);
        }

        let difficulty = format!(
            "Difficulty: {} (press 1-3 to change)",
            difficulty_label(state.words.difficulty())
        );
        self.write_centered(&mut out, cx, cy + 3, &difficulty, &[ansi::MAGENTA]);
        out
    }

    fn render_gameplay(&self, state: &GameState, now: Instant) -> String {
        let mut out = String::from(ansi::CLEAR_HOME);

        let mut grid = Grid::new(self.width, self.height - HUD_ROWS);
        for (i, platform) in state.platforms.iter().enumerate() {
            draw_platform(&mut grid, platform, i == state.player.platform);
        }
        grid.put(state.player.x, state.player.y, PLAYER_CHAR, Some(ansi::BOLD_YELLOW));
        grid.write_to(&mut out);

        self.write_hud(&mut out, state, &state.stats_at(now));
        out
    }

    fn render_paused(&self, state: &GameState, now: Instant) -> String {
        let mut out = self.render_gameplay(state, now);
        let (cx, cy) = (self.width / 2, self.height / 2);

        self.write_centered(&mut out, cx, cy - 1, "PAUSED", &[ansi::BOLD, ansi::YELLOW]);
        self.write_centered(
            &mut out,
            cx,
            cy + 1,
            "Press ESC to resume, Q to quit",
            &[ansi::WHITE],
        );
        out
    }

    fn render_game_over(&self, state: &GameState, now: Instant) -> String {
        let mut out = String::from(ansi::CLEAR_HOME);
        let (cx, cy) = (self.width / 2, self.height / 2);

        self.write_centered(&mut out, cx, cy - 4, "GAME OVER", &[ansi::BOLD, ansi::RED]);

        for (i, line) in stats_lines(&state.stats_at(now)).iter().enumerate() {
            self.write_centered(&mut out, cx, cy - 1 + i as i32, line, &[ansi::WHITE]);
        }

        self.write_centered(
            &mut out,
            cx,
            cy + 6,
            "Press SPACE to play again, Q to quit",
            &[ansi::GREEN],
        );
        out
    }

    /// Border, score/time, rates, current word
    fn write_hud(&self, out: &mut String, state: &GameState, stats: &Stats) {
        let width = self.width.max(0) as usize;

        // The last live row sits under the border: draw the player over it
        let border_row = self.height - HUD_ROWS;
        let player_x = state.player.x;
        let border = if state.player.y == border_row && (0..self.width).contains(&player_x) {
            let x = player_x as usize;
            format!(
                "{}{}{}{}{}{}{}",
                ansi::CYAN,
                "=".repeat(x),
                ansi::BOLD_YELLOW,
                PLAYER_CHAR,
                ansi::RESET,
                ansi::CYAN,
                "=".repeat(width - x - 1)
            )
        } else {
            format!("{}{}", ansi::CYAN, "=".repeat(width))
        };
        let line1 = format!(
            "Score: {} | Time: {}",
            stats.score,
            format_elapsed(stats.elapsed)
        );
        let line2 = format!(
            "WPM: {:.1} | CPM: {:.1} | Words: {}",
            stats.wpm, stats.cpm, stats.words_typed
        );
        let line3 = current_word_line(state.current_platform());

        let _ = write!(
            out,
            "{}{}\n{}\n{}\n{}",
            border,
            ansi::RESET,
            fit(&line1, width),
            fit(&line2, width),
            fit(&line3, width)
        );
    }

    /// Write `text` at (`x`, `y`); rows outside the screen are skipped
    fn write_at(&self, out: &mut String, x: i32, y: i32, text: &str, styles: &[&str]) {
        if y < 0 || y >= self.height {
            return;
        }
        out.push_str(&ansi::move_to(x.max(0), y));
        for style in styles {
            out.push_str(style);
        }
        out.push_str(text);
        out.push_str(ansi::RESET);
    }

    fn write_centered(&self, out: &mut String, cx: i32, y: i32, text: &str, styles: &[&str]) {
        let len = ansi::visible_len(text) as i32;
        self.write_at(out, cx - len / 2, y, text, styles);
    }
}

/// Ledge plus its word one row below
fn draw_platform(grid: &mut Grid, platform: &Platform, is_current: bool) {
    let y = platform.y;
    if y < 0 || y >= grid.height() {
        return;
    }

    let color = if is_current { ansi::CYAN } else { ansi::BLUE };
    grid.hline(platform.x, y, platform.width, PLATFORM_CHAR, Some(color));

    if platform.complete || y + 1 >= grid.height() {
        return;
    }

    let remaining = platform.remaining();
    let label_len = if platform.typed.is_empty() {
        platform.word.chars().count() as i32
    } else {
        (platform.typed.chars().count() + 2 + remaining.chars().count()) as i32
    };

    let mut x = platform.center_x() - label_len / 2;
    if !platform.typed.is_empty() {
        let typed = format!("[{}]", platform.typed);
        grid.put_str(x, y + 1, &typed, Some(ansi::GREEN));
        x += typed.chars().count() as i32;
    }
    grid.put_str(x, y + 1, remaining, Some(ansi::WHITE));
}

fn current_word_line(platform: Option<&Platform>) -> String {
    match platform {
        None => "Word: (none)".to_string(),
        Some(p) if p.complete => format!("Word: {} (Complete!)", p.word),
        Some(p) => format!(
            "Word: {}{}{}{}{}{}",
            ansi::GREEN,
            p.typed,
            ansi::RESET,
            ansi::WHITE,
            p.remaining(),
            ansi::RESET
        ),
    }
}

/// The five end-of-game statistics lines
pub fn stats_lines(stats: &Stats) -> [String; 5] {
    [
        format!("Score: {}", stats.score),
        format!("WPM: {:.1}", stats.wpm),
        format!("CPM: {:.1}", stats.cpm),
        format!("Words: {}", stats.words_typed),
        format!("Time: {}", format_elapsed(stats.elapsed)),
    ]
}

/// Pad to `width` visible columns; plain text is also truncated
fn fit(text: &str, width: usize) -> String {
    let visible = ansi::visible_len(text);
    if visible >= width {
        if visible == text.chars().count() {
            return text.chars().take(width).collect();
        }
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - visible))
}
