//! Core types for the dotlife cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! toroidal [`Grid`], the [`RuleSet`] that parameterizes its transition
//! function, the Braille glyph encoding, and [`LifeState`], the
//! `(grid, rules)` pair carried by the shareable text form.
//!
//! Everything here is a value: advancing a grid returns a new grid and
//! nothing in this crate holds global state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod braille;
pub mod error;
pub mod grid;
pub mod id;
pub mod rule;
pub mod state;
mod wrap;

pub use error::{DecodeError, GridError, RuleError};
pub use grid::Grid;
pub use id::Generation;
pub use rule::{NeighbourSet, RuleSet};
pub use state::LifeState;
