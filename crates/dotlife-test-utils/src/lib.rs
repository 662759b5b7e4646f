//! Test utilities and mock host collaborators for dotlife development.
//!
//! Provides canonical Life patterns ([`fixtures`]), seeded random soups
//! ([`soup`]), a [`RecordingPublisher`] that keeps every published
//! fragment, and a [`ScriptedScheduler`] that replays a fixed list of frame
//! timestamps so driver tests never sleep.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod soup;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dotlife_engine::{FrameScheduler, Publisher};

/// Publisher that records every fragment it is given.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: Vec<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fragment published so far, oldest first.
    pub fn published(&self) -> &[String] {
        &self.published
    }

    /// The most recent fragment, if any.
    pub fn last(&self) -> Option<&str> {
        self.published.last().map(String::as_str)
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&mut self, fragment: &str) {
        self.published.push(fragment.to_string());
    }
}

/// Scheduler that yields a predetermined sequence of timestamps.
#[derive(Debug)]
pub struct ScriptedScheduler {
    frames: VecDeque<Instant>,
}

impl ScriptedScheduler {
    /// Yield exactly `frames`, in order, then stop.
    pub fn new(frames: impl IntoIterator<Item = Instant>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `count` frames spaced `every` apart, the first one `every` after `start`.
    pub fn evenly_spaced(start: Instant, every: Duration, count: u32) -> Self {
        Self::new((1..=count).map(|i| start + every * i))
    }

    /// Frames not yet handed out.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameScheduler for ScriptedScheduler {
    fn next_frame(&mut self) -> Option<Instant> {
        self.frames.pop_front()
    }
}
