//! Frame scheduling and tick pacing.
//!
//! A [`FrameScheduler`] hands out display-refresh timestamps; the
//! [`TickPacer`] decides which of those frames are allowed to advance a
//! generation. Frames that arrive before the tick interval has elapsed
//! are no-ops, but the scheduler keeps polling regardless.

use std::time::{Duration, Instant};

/// Source of frame timestamps, one per display refresh.
pub trait FrameScheduler {
    /// Block until the next frame is due and return its timestamp, or
    /// `None` when no further frames will be produced.
    fn next_frame(&mut self) -> Option<Instant>;
}

/// Scheduler backed by `std::thread::sleep`.
///
/// Sleeps out whatever remains of `frame_interval` since the previous frame.
/// It never returns `None`: the loop runs for the lifetime of the process.
#[derive(Debug)]
pub struct ThreadScheduler {
    frame_interval: Duration,
    last_frame: Option<Instant>,
}

impl ThreadScheduler {
    /// Create a scheduler that yields a frame every `frame_interval`.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            last_frame: None,
        }
    }
}

impl FrameScheduler for ThreadScheduler {
    fn next_frame(&mut self) -> Option<Instant> {
        if let Some(last) = self.last_frame {
            if let Some(remaining) = self.frame_interval.checked_sub(last.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        let now = Instant::now();
        self.last_frame = Some(now);
        Some(now)
    }
}

/// Gate that admits at most one generation per `interval`.
#[derive(Clone, Debug)]
pub struct TickPacer {
    interval: Duration,
    last_tick: Instant,
}

impl TickPacer {
    /// Create a pacer whose first tick is due `interval` after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
        }
    }

    /// Whether at least `interval` has elapsed since the last tick.
    ///
    /// Timestamps earlier than the last tick count as zero elapsed.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.interval
    }

    /// Record a successful tick at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_not_due_before_interval() {
        let start = Instant::now();
        let pacer = TickPacer::new(Duration::from_millis(250), start);
        assert!(!pacer.is_due(start));
        assert!(!pacer.is_due(start + Duration::from_millis(249)));
        assert!(pacer.is_due(start + Duration::from_millis(250)));
    }

    #[test]
    fn pacer_measures_from_last_mark() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(Duration::from_millis(100), start);
        let t1 = start + Duration::from_millis(130);
        pacer.mark(t1);
        assert!(!pacer.is_due(start + Duration::from_millis(200)));
        assert!(pacer.is_due(t1 + Duration::from_millis(100)));
    }

    #[test]
    fn pacer_tolerates_time_going_backwards() {
        let start = Instant::now() + Duration::from_secs(1);
        let pacer = TickPacer::new(Duration::from_millis(10), start);
        assert!(!pacer.is_due(start - Duration::from_millis(500)));
    }

    #[test]
    fn thread_scheduler_spaces_frames() {
        let mut scheduler = ThreadScheduler::new(Duration::from_millis(5));
        let a = scheduler.next_frame().unwrap();
        let b = scheduler.next_frame().unwrap();
        assert!(b.duration_since(a) >= Duration::from_millis(5));
    }
}
