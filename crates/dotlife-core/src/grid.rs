//! Toroidal Life grid and the generation-advance step.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::braille;
use crate::error::{DecodeError, GridError};
use crate::rule::RuleSet;
use crate::wrap;

/// A two-dimensional grid of live/dead cells on a torus.
///
/// Cells are stored row-major: cell `(x, y)` lives at index
/// `y * width + x`. There are no edges: every neighbour lookup wraps
/// modulo `width`/`height`. Direct cell access ([`cell_at`](Self::cell_at),
/// [`set_cell_at`](Self::set_cell_at)) does *not* wrap; callers pass
/// in-range coordinates.
///
/// A grid is a value: [`advance`](Self::advance) builds a fresh grid and
/// never mutates `self`, so every neighbour count of a step reads the same
/// prior generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a `width x height` grid with every cell dead.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create a grid with exactly the listed `(x, y)` cells alive.
    ///
    /// Duplicate coordinates are harmless. Any coordinate outside the grid
    /// is rejected with `GridError::CoordOutOfBounds`.
    pub fn with_live_cells<I>(width: usize, height: usize, live: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        for (x, y) in live {
            let idx = grid.checked_index(x, y)?;
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::CoordOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x, y))
    }

    /// State of cell `(x, y)`, or an error if it lies outside the grid.
    pub fn try_cell_at(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// State of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Out-of-range access is a
    /// caller bug; use [`try_cell_at`](Self::try_cell_at) for untrusted
    /// coordinates.
    pub fn cell_at(&self, x: usize, y: usize) -> bool {
        match self.checked_index(x, y) {
            Ok(idx) => self.cells[idx],
            Err(e) => panic!("cell_at: {e}"),
        }
    }

    /// Set cell `(x, y)` alive or dead.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_cell_at(&mut self, x: usize, y: usize, value: bool) {
        match self.checked_index(x, y) {
            Ok(idx) => self.cells[idx] = value,
            Err(e) => panic!("set_cell_at: {e}"),
        }
    }

    /// Cell state with out-of-range coordinates reading as dead.
    ///
    /// Used by the encoder to pad partial 2x4 blocks.
    pub(crate) fn cell_or_dead(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// The 8 Moore neighbours of `(x, y)`, wrapped onto the torus.
    ///
    /// Order: W, E, N, S, NW, NE, SW, SE. On grids with a dimension below 3
    /// some neighbours coincide (or coincide with `(x, y)` itself).
    pub fn neighbours(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 8]> {
        wrap::moore_neighbours(x, y, self.width, self.height)
    }

    /// Number of live cells among the 8 wrapped neighbours of `(x, y)`.
    pub fn neighbour_count(&self, x: usize, y: usize) -> u8 {
        self.neighbours(x, y)
            .into_iter()
            .filter(|&(nx, ny)| self.cells[self.index(nx, ny)])
            .count() as u8
    }

    /// Compute the next generation under `rules`.
    ///
    /// A live cell survives iff its neighbour count is in `rules.survival()`;
    /// a dead cell is born iff its count is in `rules.birth()`. The result
    /// has the same dimensions as `self`.
    pub fn advance(&self, rules: &RuleSet) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let n = self.neighbour_count(x, y);
                let alive = if self.cells[self.index(x, y)] {
                    rules.survival().contains(n)
                } else {
                    rules.birth().contains(n)
                };
                cells.push(alive);
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate live cells as `(x, y)` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Serialize to the `|`-joined Braille encoding.
    pub fn encode(&self) -> String {
        braille::encode_rows(self).join("|")
    }

    /// Render as Braille rows separated by newlines, for terminal display.
    pub fn render(&self) -> String {
        braille::encode_rows(self).join("\n")
    }

    /// Parse a `|`-joined Braille encoding (no rule directive).
    ///
    /// Height is 4 x the row count and width is 2 x the longest row; shorter
    /// rows are padded with dead cells rather than rejected.
    pub fn decode(text: &str) -> Result<Grid, DecodeError> {
        braille::decode_rows(text.split('|'))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Grid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
