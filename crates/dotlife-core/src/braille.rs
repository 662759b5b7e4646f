//! Braille glyph packing for 2x4 cell blocks.
//!
//! Unicode Braille patterns occupy the 256 code points `U+2800..=U+28FF`.
//! The low byte of the code point is a dot mask whose bits, from least to
//! most significant, are the dots `⠁⠂⠄⠈⠐⠠⡀⢀`. That is the historical
//! 6-dot cell (left column top to bottom, then right column) followed by
//! the two dots of the 8-dot extension row, so the bit order is not raster
//! order. Shared links depend on it; it is a wire-format constant.

use crate::error::DecodeError;
use crate::grid::Grid;

/// First code point of the Braille Patterns block (all dots clear).
pub const BRAILLE_BASE: u32 = 0x2800;

/// The all-dead glyph.
pub const BLANK: char = '\u{2800}';

/// Cells covered by one glyph horizontally.
pub const BLOCK_WIDTH: usize = 2;

/// Cells covered by one glyph vertically.
pub const BLOCK_HEIGHT: usize = 4;

/// `(dx, dy)` of the cell carried by each mask bit, least significant first.
pub const DOT_LAYOUT: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// The glyph for an 8-bit dot mask.
pub fn glyph_for_mask(mask: u8) -> char {
    // Every offset below 0x100 from BRAILLE_BASE is an assigned scalar value.
    char::from_u32(BRAILLE_BASE + u32::from(mask)).unwrap_or(BLANK)
}

/// The dot mask of a Braille glyph, or `None` outside `U+2800..=U+28FF`.
pub fn mask_for_glyph(ch: char) -> Option<u8> {
    (ch as u32)
        .checked_sub(BRAILLE_BASE)
        .and_then(|offset| u8::try_from(offset).ok())
}

/// Dot mask of the block whose top-left cell is `(x, y)`.
///
/// Cells beyond the grid's right or bottom edge read as dead.
pub(crate) fn block_mask(grid: &Grid, x: usize, y: usize) -> u8 {
    DOT_LAYOUT
        .iter()
        .enumerate()
        .filter(|(_, &(dx, dy))| grid.cell_or_dead(x + dx, y + dy))
        .fold(0u8, |mask, (bit, _)| mask | (1 << bit))
}

/// Encode each block row of `grid` as a string of glyphs.
pub(crate) fn encode_rows(grid: &Grid) -> Vec<String> {
    let blocks_across = grid.width().div_ceil(BLOCK_WIDTH);
    let blocks_down = grid.height().div_ceil(BLOCK_HEIGHT);
    (0..blocks_down)
        .map(|by| {
            (0..blocks_across)
                .map(|bx| glyph_for_mask(block_mask(grid, bx * BLOCK_WIDTH, by * BLOCK_HEIGHT)))
                .collect()
        })
        .collect()
}

/// Decode block rows into a grid.
///
/// Rows shorter than the longest one are right-padded with [`BLANK`].
pub(crate) fn decode_rows<'a, I>(rows: I) -> Result<Grid, DecodeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut masks: Vec<Vec<u8>> = Vec::new();
    for (row, text) in rows.into_iter().enumerate() {
        let decoded = text
            .chars()
            .enumerate()
            .map(|(column, found)| {
                mask_for_glyph(found).ok_or(DecodeError::InvalidGlyph { row, column, found })
            })
            .collect::<Result<Vec<u8>, DecodeError>>()?;
        masks.push(decoded);
    }

    let blocks_across = masks.iter().map(Vec::len).max().unwrap_or(0);
    if blocks_across == 0 {
        return Err(DecodeError::Empty);
    }

    let mut grid = Grid::new(blocks_across * BLOCK_WIDTH, masks.len() * BLOCK_HEIGHT)?;
    for (by, row) in masks.iter().enumerate() {
        for (bx, &mask) in row.iter().enumerate() {
            for (bit, &(dx, dy)) in DOT_LAYOUT.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    grid.set_cell_at(bx * BLOCK_WIDTH + dx, by * BLOCK_HEIGHT + dy, true);
                }
            }
        }
    }
    Ok(grid)
}
