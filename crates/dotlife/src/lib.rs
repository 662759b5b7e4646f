//! Dotlife: Conway's Game of Life on a torus, persisted as Braille text.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! dotlife sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use dotlife::prelude::*;
//!
//! let glider = Grid::with_live_cells(12, 12, [(2, 0), (3, 1), (1, 2), (2, 2), (3, 2)]).unwrap();
//! let state = LifeState::new(glider, RuleSet::default());
//! assert_eq!(state.encode(), "⠠⠵⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀|⠀⠀⠀⠀⠀⠀");
//!
//! let highlife: LifeState = "B36/S23⠠⠵".parse().unwrap();
//! assert_eq!(highlife.rules.to_string(), "B36/S23");
//! assert_eq!((highlife.grid.width(), highlife.grid.height()), (4, 4));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `dotlife-core` | Grid, rule sets, Braille codec, errors |
//! | [`engine`] | `dotlife-engine` | Paced driver, fragment hooks, seed |
//!
//! [`terminal`] holds the publisher used by the `dotlife` binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, rule sets and the Braille encoding (`dotlife-core`).
pub use dotlife_core as core;

/// Generation loop and host glue (`dotlife-engine`).
///
/// Contains the [`engine::Driver`], its configuration, the fragment
/// load/publish hooks and the built-in seed.
pub use dotlife_engine as engine;

pub mod terminal;

/// Common imports for typical usage.
///
/// ```rust
/// use dotlife::prelude::*;
/// ```
pub mod prelude {
    pub use dotlife_core::{
        DecodeError, Generation, Grid, GridError, LifeState, NeighbourSet, RuleError, RuleSet,
    };
    pub use dotlife_engine::{
        ConfigError, Driver, DriverConfig, DriverHandle, FrameOutcome, FrameScheduler, Publisher,
        ThreadScheduler,
    };
}
