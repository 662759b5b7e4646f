//! The generation loop: owns the current state and advances it on paced
//! frames.
//!
//! ```text
//! FrameScheduler          Driver                         Publisher
//!     |                     |                                |
//!     |--next_frame()------>| drain events (pause/resume/    |
//!     |                     |   fragment change)             |
//!     |                     | paused? -> no-op               |
//!     |                     | pacer due? no -> no-op         |
//!     |                     | state = state.step()           |
//!     |                     | publish(state) --------------->|
//! ```
//!
//! There is exactly one current [`LifeState`]. A step builds the next
//! state in full and then replaces the old one, so nothing ever observes
//! a partially advanced grid.

use std::time::Instant;

use crossbeam_channel::Receiver;
use dotlife_core::{Generation, LifeState};

use crate::config::{ConfigError, DriverConfig};
use crate::events::{DriverEvent, DriverHandle};
use crate::fragment::{self, Publisher};
use crate::scheduler::{FrameScheduler, TickPacer};

/// What a single frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Advancement is paused; nothing happened.
    Paused,
    /// The tick interval has not elapsed yet; nothing happened.
    Waiting,
    /// One generation was computed and published.
    Advanced(Generation),
}

/// Drives a [`LifeState`] forward and publishes each generation.
pub struct Driver<P: Publisher> {
    state: LifeState,
    generation: Generation,
    pacer: TickPacer,
    paused: bool,
    events: Receiver<DriverEvent>,
    publisher: P,
    last_published: String,
}

impl<P: Publisher> Driver<P> {
    /// Load the initial state from `fragment`, publish it, and return the
    /// driver together with a handle for signalling it.
    ///
    /// The first generation is due `config.tick_interval` after `start`.
    pub fn new(
        config: &DriverConfig,
        fragment: Option<&str>,
        publisher: P,
        start: Instant,
    ) -> Result<(Self, DriverHandle), ConfigError> {
        config.validate()?;
        let (tx, rx) = crossbeam_channel::unbounded();
        let state = fragment::load(fragment);
        tracing::info!(
            width = state.grid.width(),
            height = state.grid.height(),
            rules = %state.rules,
            population = state.grid.population(),
            "loaded initial state"
        );
        let mut driver = Self {
            state,
            generation: Generation::default(),
            pacer: TickPacer::new(config.tick_interval, start),
            paused: false,
            events: rx,
            publisher,
            last_published: String::new(),
        };
        driver.publish();
        Ok((driver, DriverHandle::new(tx)))
    }

    /// Handle one frame at time `now`.
    ///
    /// Pending events are applied first. The state then advances only if
    /// the driver is not paused and the tick interval has elapsed since the
    /// previous generation.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        self.drain_events(now);

        if self.paused {
            return FrameOutcome::Paused;
        }
        if !self.pacer.is_due(now) {
            return FrameOutcome::Waiting;
        }

        let next = self.state.step();
        self.state = next;
        self.generation = self.generation.next();
        self.pacer.mark(now);
        self.publish();

        tracing::trace!(
            generation = %self.generation,
            population = self.state.grid.population(),
            "advanced"
        );
        FrameOutcome::Advanced(self.generation)
    }

    /// Run until `scheduler` stops producing frames.
    ///
    /// With [`ThreadScheduler`](crate::scheduler::ThreadScheduler) this
    /// never returns.
    pub fn run<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        while let Some(now) = scheduler.next_frame() {
            self.on_frame(now);
        }
    }

    /// Apply all queued events.
    fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                DriverEvent::Pause => {
                    if !self.paused {
                        tracing::debug!(generation = %self.generation, "paused");
                    }
                    self.paused = true;
                }
                DriverEvent::Resume => {
                    if self.paused {
                        tracing::debug!(generation = %self.generation, "resumed");
                    }
                    self.paused = false;
                }
                DriverEvent::FragmentChanged(raw) => self.reload(&raw, now),
            }
        }
    }

    /// Replace the state from an externally edited fragment.
    ///
    /// A fragment equal to our own last publication is an echo of
    /// `publish` and is ignored.
    fn reload(&mut self, raw: &str, now: Instant) {
        if fragment::normalize(raw).is_ok_and(|text| text == self.last_published) {
            return;
        }
        self.state = fragment::load(Some(raw));
        self.generation = Generation::default();
        self.pacer.mark(now);
        tracing::info!(
            width = self.state.grid.width(),
            height = self.state.grid.height(),
            rules = %self.state.rules,
            "reloaded state from fragment"
        );
        self.publish();
    }

    fn publish(&mut self) {
        self.last_published = fragment::publish(&self.state);
        self.publisher.publish(&self.last_published);
    }

    /// The current state.
    pub fn state(&self) -> &LifeState {
        &self.state
    }

    /// Generations advanced since the current state was loaded.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether advancement is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The most recently published fragment text.
    pub fn last_published(&self) -> &str {
        &self.last_published
    }

    /// The publisher sink.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
