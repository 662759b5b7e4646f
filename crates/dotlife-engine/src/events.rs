//! External signals delivered to a running driver.
//!
//! Focus/blur and fragment changes originate outside the loop, possibly on
//! other threads. They are queued on an unbounded crossbeam channel and
//! drained by the driver at the start of every frame, so the driver's state
//! is only ever touched from the loop itself.

use std::fmt;

use crossbeam_channel::Sender;

/// A signal for the driver loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    /// Stop advancing generations (e.g. window lost focus).
    Pause,
    /// Resume advancing generations (e.g. window regained focus).
    Resume,
    /// The fragment was edited externally; reload state from this text.
    FragmentChanged(String),
}

/// The driver loop has been dropped; the event was not delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverGone;

impl fmt::Display for DriverGone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver has been dropped")
    }
}

impl std::error::Error for DriverGone {}

/// Cloneable, `Send` handle for signalling a [`Driver`](crate::driver::Driver).
#[derive(Clone, Debug)]
pub struct DriverHandle {
    tx: Sender<DriverEvent>,
}

impl DriverHandle {
    pub(crate) fn new(tx: Sender<DriverEvent>) -> Self {
        Self { tx }
    }

    /// Queue an arbitrary event.
    pub fn send(&self, event: DriverEvent) -> Result<(), DriverGone> {
        self.tx.send(event).map_err(|_| DriverGone)
    }

    /// Suspend advancement. Frames keep arriving but do nothing.
    pub fn pause(&self) -> Result<(), DriverGone> {
        self.send(DriverEvent::Pause)
    }

    /// Resume advancement.
    pub fn resume(&self) -> Result<(), DriverGone> {
        self.send(DriverEvent::Resume)
    }

    /// Report a new fragment text (hash change).
    pub fn fragment_changed(&self, text: impl Into<String>) -> Result<(), DriverGone> {
        self.send(DriverEvent::FragmentChanged(text.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_sends_in_order() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = DriverHandle::new(tx);
        handle.pause().unwrap();
        handle.fragment_changed("⠁").unwrap();
        handle.resume().unwrap();
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![
                DriverEvent::Pause,
                DriverEvent::FragmentChanged("⠁".to_string()),
                DriverEvent::Resume,
            ]
        );
    }

    #[test]
    fn handle_reports_dropped_driver() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = DriverHandle::new(tx);
        drop(rx);
        assert_eq!(handle.pause(), Err(DriverGone));
    }

    #[test]
    fn handle_is_send() {
        fn assert_send<T: Send + Sync>() {}
        assert_send::<DriverHandle>();
    }
}
