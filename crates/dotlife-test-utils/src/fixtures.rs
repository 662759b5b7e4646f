//! Canonical Life patterns on small tori.
//!
//! - [`block`]: 2x2 still life.
//! - [`blinker`]: period-2 oscillator, horizontal phase.
//! - [`glider`]: period-4 spaceship heading south-east.
//!
//! Every fixture is placed away from the edges so that wrap-around does
//! not interfere with its evolution on the given grid size.

use dotlife_core::Grid;

/// Build a grid from a pattern offset by `(ox, oy)`.
///
/// # Panics
///
/// Panics if any shifted cell falls outside the grid.
pub fn place(
    width: usize,
    height: usize,
    pattern: &[(usize, usize)],
    ox: usize,
    oy: usize,
) -> Grid {
    Grid::with_live_cells(width, height, pattern.iter().map(|&(x, y)| (x + ox, y + oy)))
        .expect("fixture pattern fits the grid")
}

/// Cells of a 2x2 block with its top-left corner at the origin.
pub const BLOCK: [(usize, usize); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Cells of a horizontal blinker starting at the origin.
pub const BLINKER: [(usize, usize); 3] = [(0, 0), (1, 0), (2, 0)];

/// Cells of a south-east glider in its `⠠⠵` phase.
pub const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// A block centred on an 8x8 grid.
pub fn block() -> Grid {
    place(8, 8, &BLOCK, 3, 3)
}

/// A horizontal blinker centred on an 8x8 grid.
pub fn blinker() -> Grid {
    place(8, 8, &BLINKER, 2, 4)
}

/// A glider near the top-left of a `size x size` grid.
pub fn glider(size: usize) -> Grid {
    place(size, size, &GLIDER, 1, 0)
}
