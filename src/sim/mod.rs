//! Game simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (the caller renders at a steady rate)
//! - Seeded word RNG only
//! - No terminal or platform dependencies

pub mod input;
pub mod platforms;
pub mod state;
pub mod tick;
pub mod words;

pub use input::{InputEvent, jump_to_next_platform, process_input};
pub use platforms::{generate_initial, generate_more, next_platform_above, prune};
pub use state::{GamePhase, GameState, Platform, Player, ScrollAccumulator, Stats, format_elapsed};
pub use tick::tick;
pub use words::{WordCatalog, difficulty_label, length_band};
