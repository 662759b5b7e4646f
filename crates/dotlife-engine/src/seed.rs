//! The built-in pattern shown when no usable fragment is available.

use dotlife_core::{Grid, LifeState, RuleSet};

/// Seed grid width in cells (6 glyphs per row).
pub const SEED_WIDTH: usize = 12;

/// Seed grid height in cells (3 glyph rows).
pub const SEED_HEIGHT: usize = 12;

/// A glider in the top-left corner, heading south-east: `⠠⠵`.
pub const SEED_GLIDER: [(usize, usize); 5] = [(2, 0), (3, 1), (1, 2), (2, 2), (3, 2)];

/// A glider on a 12x12 torus under the default rules.
///
/// Encodes as `⠠⠵⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀` and returns to its starting cells
/// every 48 generations.
pub fn seed_state() -> LifeState {
    let grid = Grid::with_live_cells(SEED_WIDTH, SEED_HEIGHT, SEED_GLIDER)
        .expect("seed glider fits the seed grid");
    LifeState::new(grid, RuleSet::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_encoding() {
        assert_eq!(seed_state().encode(), "⠠⠵⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀");
    }

    #[test]
    fn seed_glider_returns_after_crossing_torus() {
        let seed = seed_state();
        let mut state = seed.clone();
        for generation in 1..=48 {
            state = state.step();
            assert_eq!(state.grid.population(), 5, "generation {generation}");
            if generation < 48 {
                assert_ne!(state, seed, "early repeat at generation {generation}");
            }
        }
        assert_eq!(state, seed);
    }
}
