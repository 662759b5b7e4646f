//! Deterministic random soups.
//!
//! Uses a seeded ChaCha8 RNG so that identical seeds produce identical
//! grids across runs and platforms.

use dotlife_core::Grid;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `width x height` grid where each cell is alive with probability
/// `density` (clamped to `[0, 1]`).
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn random_soup(width: usize, height: usize, density: f64, seed: u64) -> Grid {
    let density = density.clamp(0.0, 1.0);
    let threshold = (density * (f64::from(u32::MAX) + 1.0)) as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let live: Vec<(usize, usize)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|_| u64::from(rng.next_u32()) < threshold)
        .collect();
    Grid::with_live_cells(width, height, live).expect("soup dimensions must be non-zero")
}
