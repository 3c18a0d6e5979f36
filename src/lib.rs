//! Type Climber - a terminal typing platformer
//!
//! Core modules:
//! - `sim`: Game simulation (words, platforms, input state machine, fixed-step scroll)
//! - `renderer`: Text-grid rendering with ANSI cursor/color sequences
//! - `game`: Engine facade consumed by terminal shells
//! - `dummy`: Call-logging engine for exercising a shell without the game
//! - `settings`: JSON configuration
//! - `logging`: File-backed debug logger

pub mod dummy;
pub mod game;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use dummy::DummyEngine;
pub use game::{Engine, Game};
pub use settings::Settings;
pub use sim::InputEvent;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 FPS)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Default scroll speed in rows per second
    pub const DEFAULT_SCROLL_SPEED: f64 = 0.5;
    /// Fastest scroll a settings file may request
    pub const MAX_SCROLL_SPEED: f64 = 120.0;

    /// Rows reserved at the bottom of the screen for the HUD
    pub const HUD_ROWS: i32 = 4;
    /// Player is lost once it reaches `height - DEATH_MARGIN`
    pub const DEATH_MARGIN: i32 = 3;

    /// Platforms further than this below the screen are pruned
    pub const PRUNE_MARGIN: i32 = 100;
    /// More platforms are generated while the highest one sits below this row
    pub const GENERATE_CEILING: i32 = -200;

    /// Platforms seeded above the start platform
    pub const INITIAL_CLIMB_PLATFORMS: usize = 14;
    /// Platforms appended per on-demand generation
    pub const GENERATED_BATCH: usize = 8;
    /// Width of the start platform
    pub const START_PLATFORM_WIDTH: i32 = 20;

    /// Base points per completed letter
    pub const POINTS_PER_LETTER: u64 = 10;
    /// Ceiling of the per-word speed bonus
    pub const MAX_SPEED_BONUS: f64 = 100.0;

    /// Smallest surface the layout is designed for
    pub const MIN_WIDTH: i32 = 80;
    pub const MIN_HEIGHT: i32 = 24;
}
