//! Call-logging engine
//!
//! Stands in for the game when exercising a shell: every engine call is
//! recorded and the most recent ones are shown on screen. `q` quits.

use std::collections::VecDeque;
use std::time::Instant;

use crate::game::Engine;
use crate::sim::InputEvent;

const TITLE: &str = "=== DUMMY GAME - Method Call Logger ===";
const INSTRUCTIONS: &str = "Press 'q' to quit, any other key to test process_input";
/// Messages kept in the log
pub const MAX_MESSAGES: usize = 10;
/// Frame returned before `start`
pub const NO_DIMENSIONS_FRAME: &str = "DummyGame: No dimensions set";

#[derive(Debug, Clone)]
pub struct DummyEngine {
    width: i32,
    height: i32,
    quit: bool,
    messages: VecDeque<String>,
    created_at: Instant,
}

impl Default for DummyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyEngine {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            quit: false,
            messages: VecDeque::with_capacity(MAX_MESSAGES + 1),
            created_at: Instant::now(),
        }
    }

    /// Logged calls, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    fn record(&mut self, message: String) {
        log::debug!("{}", message);
        let secs = self.created_at.elapsed().as_secs_f64();
        self.messages.push_back(format!("[+{secs:7.2}s] {message}"));
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }
    }
}

fn describe(event: InputEvent) -> String {
    match event {
        InputEvent::Type(ch) if ch.is_ascii_graphic() => format!("'{ch}'"),
        InputEvent::Type(ch) => format!("(code:{})", u32::from(ch)),
        InputEvent::Space => "SPACE".into(),
        InputEvent::Escape => "ESC".into(),
        InputEvent::Backspace => "BACKSPACE".into(),
        InputEvent::Quit => "QUIT".into(),
    }
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

impl Engine for DummyEngine {
    fn start(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.quit = false;
        self.record(format!("start called with width={width}, height={height}"));
    }

    fn update_dimensions(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.record(format!(
            "update_dimensions called with width={width}, height={height}"
        ));
    }

    fn process_input(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::Type('q' | 'Q') | InputEvent::Quit) {
            self.quit = true;
            self.record("process_input called with key='q' - quit requested".into());
            return;
        }
        self.record(format!("process_input called with key={}", describe(event)));
    }

    fn render(&mut self) -> String {
        if self.width <= 0 || self.height <= 0 {
            return NO_DIMENSIONS_FRAME.to_string();
        }
        let width = self.width as usize;

        let mut lines = vec![
            centered(TITLE, width),
            centered(INSTRUCTIONS, width),
            "-".repeat(width),
        ];

        // Title, instructions, separator and status take four rows
        let room = (self.height - 4).max(1) as usize;
        for message in self.messages.iter().rev().take(room) {
            if message.chars().count() > width {
                let cut: String = message.chars().take(width.saturating_sub(3)).collect();
                lines.push(format!("{cut}..."));
            } else {
                lines.push(message.clone());
            }
        }
        while lines.len() < (self.height - 1).max(0) as usize {
            lines.push(String::new());
        }

        lines.push(format!(
            "Dimensions: {}x{} | Messages: {}/{}",
            self.width,
            self.height,
            self.messages.len(),
            MAX_MESSAGES
        ));
        lines.join("\n")
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
