//! Engine facade
//!
//! The contract a terminal shell drives: start, resize, feed input, render,
//! poll for quit. Calls are single-threaded; the shell serializes them.

use crate::consts::SIM_DT;
use crate::renderer::TextRenderer;
use crate::settings::Settings;
use crate::sim::{self, GamePhase, GameState, InputEvent, Stats, WordCatalog};

/// Placeholder frame before `start`
pub const UNINITIALIZED_FRAME: &str = "Renderer not initialized";

/// Operations a shell needs from a game
pub trait Engine {
    /// (Re)initialize dimensions, renderer and session
    fn start(&mut self, width: i32, height: i32);
    /// Live resize without resetting progress
    fn update_dimensions(&mut self, width: i32, height: i32);
    fn process_input(&mut self, event: InputEvent);
    /// Advance the simulation (while playing) and return the frame
    fn render(&mut self) -> String;
    fn should_quit(&self) -> bool;

    /// Translate a raw key code and apply it; unknown codes are ignored
    fn process_key(&mut self, code: u32) {
        if let Some(event) = InputEvent::from_code(code) {
            self.process_input(event);
        }
    }
}

/// The typing platformer
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    renderer: Option<TextRenderer>,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut words = WordCatalog::new(seed);
        words.set_difficulty(settings.difficulty);
        log::info!(
            "New game: seed {}, scroll speed {:.2} rows/s, difficulty {}",
            seed,
            settings.scroll_speed,
            words.difficulty()
        );
        Self::with_catalog(words, settings.scroll_speed)
    }

    /// Game over an explicit catalog
    pub fn with_catalog(words: WordCatalog, scroll_speed: f64) -> Self {
        Self {
            state: GameState::new(words, scroll_speed),
            renderer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn stats(&self) -> Stats {
        self.state.stats()
    }
}

impl Engine for Game {
    fn start(&mut self, width: i32, height: i32) {
        self.state.width = width;
        self.state.height = height;
        self.renderer = Some(TextRenderer::new(width, height));
        self.state.reset();
    }

    fn update_dimensions(&mut self, width: i32, height: i32) {
        log::debug!("Resize to {}x{}", width, height);
        self.state.width = width;
        self.state.height = height;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.update_dimensions(width, height);
        }
    }

    fn process_input(&mut self, event: InputEvent) {
        sim::process_input(&mut self.state, event);
    }

    fn render(&mut self) -> String {
        sim::tick(&mut self.state, SIM_DT);
        match &self.renderer {
            Some(renderer) => renderer.render(&self.state),
            None => UNINITIALIZED_FRAME.to_string(),
        }
    }

    fn should_quit(&self) -> bool {
        self.state.should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Platform;

    fn game() -> Game {
        let settings = Settings {
            seed: Some(12345),
            ..Settings::default()
        };
        Game::new(&settings)
    }

    #[test]
    fn test_new_game_in_menu() {
        let game = game();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(!game.should_quit());
    }

    #[test]
    fn test_render_before_start() {
        let mut game = game();
        assert_eq!(game.render(), UNINITIALIZED_FRAME);
    }

    #[test]
    fn test_start_seeds_platforms() {
        let mut game = game();
        game.start(80, 24);
        let state = game.state();
        assert_eq!((state.width, state.height), (80, 24));
        assert!(!state.platforms.is_empty());
        assert!(state.player.platform < state.platforms.len());
        assert!(game.render().contains("ASCII TYPING PLATFORMER"));
    }

    #[test]
    fn test_raw_key_codes() {
        let mut game = game();
        game.start(80, 24);

        game.process_key(' ' as u32);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().words_typed, 0);

        game.process_key('q' as u32);
        assert!(!game.should_quit());

        game.process_key(27);
        assert_eq!(game.phase(), GamePhase::Paused);
        game.process_key('q' as u32);
        assert!(game.should_quit());
    }

    #[test]
    fn test_backspace_codes() {
        let mut game = game();
        game.start(80, 24);
        game.process_key(' ' as u32);
        let index = game.state().player.platform;
        game.state_mut().platforms[index].typed = "ab".into();

        game.process_key(8);
        assert_eq!(game.state().platforms[index].typed, "a");
        game.process_key(127);
        assert_eq!(game.state().platforms[index].typed, "");
        game.process_key(127);
        assert_eq!(game.state().platforms[index].typed, "");
    }

    #[test]
    fn test_resize_keeps_progress() {
        let mut game = game();
        game.start(80, 24);
        game.process_input(InputEvent::Space);
        game.state_mut().score = 250;
        let platforms = game.state().platforms.len();

        game.update_dimensions(100, 30);
        assert_eq!(game.state().score, 250);
        assert_eq!(game.state().platforms.len(), platforms);
        assert_eq!(game.state().width, 100);

        let frame = game.render();
        let hud_border = format!("{}{}", crate::renderer::ansi::CYAN, "=".repeat(100));
        assert!(frame.contains(&hud_border));
    }

    #[test]
    fn test_render_ticks_only_while_playing() {
        let mut game = Game::with_catalog(WordCatalog::new(5), 60.0);
        game.start(80, 24);
        let y = game.state().platforms[0].y;
        game.render();
        assert_eq!(game.state().platforms[0].y, y);

        game.process_input(InputEvent::Space);
        let y = game.state().platforms[0].y;
        game.render();
        assert_eq!(game.state().platforms[0].y, y + 1);
    }

    #[test]
    fn test_full_word_via_engine() {
        let mut game = game();
        game.start(80, 24);
        game.process_input(InputEvent::Space);
        game.state_mut().platforms[0] = Platform::new(30, 10, 20, "cat".into());

        for ch in "CaT".chars() {
            game.process_key(ch as u32);
        }
        let state = game.state();
        assert!(state.platforms[0].complete);
        assert_eq!(state.words_typed, 1);
        assert_eq!(state.chars_typed, 3);
        assert!(state.score >= 30);
        assert!(state.platforms[state.player.platform].y < 10);
    }

    #[test]
    fn test_game_over_frame() {
        let mut game = Game::with_catalog(WordCatalog::new(5), 60.0);
        game.start(80, 24);
        game.process_input(InputEvent::Space);
        game.state_mut().platforms[0].y = 23;

        let frame = game.render();
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(frame.contains("GAME OVER"));

        game.process_input(InputEvent::Space);
        assert_eq!(game.phase(), GamePhase::Playing);
    }
}
