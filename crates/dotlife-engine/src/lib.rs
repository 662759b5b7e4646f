//! Generation loop and host glue for dotlife.
//!
//! Provides the [`Driver`] that owns the current
//! [`LifeState`](dotlife_core::LifeState), advances it on frames handed out
//! by a [`FrameScheduler`] at most once per tick interval, and publishes
//! the resulting fragment text through a [`Publisher`]. Pause/resume and
//! fragment changes arrive through a [`DriverHandle`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod events;
pub mod fragment;
pub mod scheduler;
pub mod seed;

pub use config::{ConfigError, DriverConfig};
pub use driver::{Driver, FrameOutcome};
pub use events::{DriverEvent, DriverGone, DriverHandle};
pub use fragment::{FragmentError, Publisher};
pub use scheduler::{FrameScheduler, ThreadScheduler, TickPacer};
