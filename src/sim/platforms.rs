//! Platform field generation and pruning
//!
//! Platforms are seeded with a runway above the start ledge, extended
//! just-in-time while the climb is running, and dropped once they scroll far
//! below the screen.

use super::state::Platform;
use super::words::WordCatalog;
use crate::consts::*;

/// Widths cycled through by the initial runway
const RUNWAY_WIDTHS: [i32; 3] = [15, 25, 35];
/// Widths cycled through by on-demand batches
const BATCH_WIDTHS: [i32; 4] = [10, 15, 20, 25];

/// Left edge of horizontal band `band` out of `bands`, kept inside the screen
fn band_x(screen_width: i32, band: usize, bands: usize, platform_width: i32) -> i32 {
    let band_width = (screen_width / bands as i32).max(1);
    let x = band as i32 * band_width + (band_width - platform_width) / 2;
    x.clamp(0, (screen_width - platform_width).max(0))
}

/// Seed the start platform plus a runway of platforms above it
pub fn generate_initial(words: &mut WordCatalog, width: i32, height: i32) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(INITIAL_CLIMB_PLATFORMS + 1);

    let start_y = height / 4;
    platforms.push(Platform::new(
        width / 2 - START_PLATFORM_WIDTH / 2,
        start_y,
        START_PLATFORM_WIDTH,
        words.random_word(),
    ));

    let mut y = start_y;
    for i in 1..=INITIAL_CLIMB_PLATFORMS {
        // Spacing walks 11, 12, 10, 11, ...
        y -= 10 + (i % 3) as i32;
        let platform_width = RUNWAY_WIDTHS[i % RUNWAY_WIDTHS.len()];
        platforms.push(Platform::new(
            band_x(width, i % 4, 4, platform_width),
            y,
            platform_width,
            words.random_word(),
        ));
    }

    log::debug!(
        "Generated initial field: {} platforms, top at y={}",
        platforms.len(),
        y
    );
    platforms
}

/// Row of the highest platform (smallest y)
pub fn highest_y(platforms: &[Platform]) -> Option<i32> {
    platforms.iter().map(|p| p.y).min()
}

/// Append a batch above the highest platform if it is not far enough up yet.
/// Returns the number of platforms added.
pub fn generate_more(platforms: &mut Vec<Platform>, words: &mut WordCatalog, width: i32) -> usize {
    let Some(highest) = highest_y(platforms) else {
        return 0;
    };
    if highest <= GENERATE_CEILING {
        return 0;
    }

    platforms.reserve(GENERATED_BATCH);
    for i in 0..GENERATED_BATCH {
        let platform_width = BATCH_WIDTHS[i % BATCH_WIDTHS.len()];
        platforms.push(Platform::new(
            band_x(width, i % 5, 5, platform_width),
            highest - (60 + i as i32 * 45),
            platform_width,
            words.random_word(),
        ));
    }

    log::debug!(
        "Generated {} platforms above y={} (total {})",
        GENERATED_BATCH,
        highest,
        platforms.len()
    );
    GENERATED_BATCH
}

/// Drop platforms more than `PRUNE_MARGIN` rows below the screen.
///
/// The platform at `player_index` always survives. Returns the player's index
/// into the surviving platforms, or 0 if it was not among them.
pub fn prune(platforms: &mut Vec<Platform>, height: i32, player_index: usize) -> usize {
    let threshold = height + PRUNE_MARGIN;
    let before = platforms.len();

    let mut new_index = None;
    let mut kept = 0;
    let mut idx = 0;
    platforms.retain(|p| {
        let keep = p.y <= threshold || idx == player_index;
        if keep {
            if idx == player_index {
                new_index = Some(kept);
            }
            kept += 1;
        }
        idx += 1;
        keep
    });

    if platforms.len() < before {
        log::debug!("Pruned {} platforms ({} left)", before - platforms.len(), platforms.len());
    }

    new_index.unwrap_or_else(|| {
        if before > 0 {
            log::warn!("Player platform {} missing after prune, falling back to 0", player_index);
        }
        0
    })
}

/// Nearest incomplete platform strictly above `from` (largest y below it)
pub fn next_platform_above(platforms: &[Platform], from: usize) -> Option<usize> {
    let current_y = platforms.get(from)?.y;
    platforms
        .iter()
        .enumerate()
        .filter(|(_, p)| p.y < current_y && !p.complete)
        .fold(None, |best: Option<(usize, i32)>, (i, p)| match best {
            Some((_, best_y)) if best_y >= p.y => best,
            _ => Some((i, p.y)),
        })
        .map(|(i, _)| i)
}
