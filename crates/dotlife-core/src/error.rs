//! Error types for the dotlife grid engine.
//!
//! Organized by subsystem: grid construction and access, text decoding,
//! and rule directive parsing.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and checked cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    CoordOutOfBounds {
        /// Offending x coordinate.
        x: usize,
        /// Offending y coordinate.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from decoding the Braille text encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The body contains no glyphs at all.
    Empty,
    /// A character outside `U+2800..=U+28FF` appeared in a row.
    InvalidGlyph {
        /// Zero-based row (block row, not cell row).
        row: usize,
        /// Zero-based glyph position within the row.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// The decoded dimensions could not form a grid.
    Grid(GridError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "encoding contains no glyphs"),
            Self::InvalidGlyph { row, column, found } => write!(
                f,
                "invalid glyph {found:?} (U+{:04X}) at row {row}, column {column}",
                *found as u32
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DecodeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from parsing a `B<digits>/S<digits>` rule directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The directive does not start with `B`.
    MissingBirth,
    /// No `/S` separator follows the birth digits.
    MissingSurvival,
    /// A character other than a decimal digit appeared in a count list.
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// A digit names a neighbour count that cannot occur (above 8).
    CountOutOfRange {
        /// The offending count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBirth => write!(f, "rule directive must start with 'B'"),
            Self::MissingSurvival => write!(f, "rule directive is missing '/S'"),
            Self::InvalidCharacter { found } => {
                write!(f, "unexpected character {found:?} in rule directive")
            }
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} is outside [0, 8]")
            }
        }
    }
}

impl Error for RuleError {}
