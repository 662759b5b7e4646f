//! Terminal rendering of published fragments.

use std::io::{self, Write};

use dotlife_core::LifeState;
use dotlife_engine::Publisher;

/// Clear screen, cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Redraws the grid and prints the fragment underneath it.
#[derive(Debug)]
pub struct TerminalPublisher<W: Write> {
    out: W,
}

impl<W: Write> TerminalPublisher<W> {
    /// Publish to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self, fragment: &str) -> io::Result<()> {
        let body = match LifeState::decode(fragment) {
            Ok(state) => state.grid.render(),
            Err(e) => {
                tracing::warn!(error = %e, "published fragment does not decode");
                return Ok(());
            }
        };
        writeln!(self.out, "{CLEAR}{body}\n\n#{fragment}")?;
        self.out.flush()
    }
}

impl<W: Write> Publisher for TerminalPublisher<W> {
    fn publish(&mut self, fragment: &str) {
        if let Err(e) = self.redraw(fragment) {
            tracing::warn!(error = %e, "failed to redraw terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn publish_draws_grid_then_fragment() {
        let mut publisher = TerminalPublisher::new(Vec::new());
        publisher.publish("B36/S23⠠⠵|⠁⠀");
        let text = String::from_utf8(publisher.into_inner()).unwrap();
        assert_eq!(text, format!("{CLEAR}⠠⠵\n⠁⠀\n\n#B36/S23⠠⠵|⠁⠀\n"));
    }

    #[test]
    fn undecodable_fragment_draws_nothing() {
        let mut publisher = TerminalPublisher::new(Vec::new());
        publisher.publish("not a grid");
        assert!(publisher.into_inner().is_empty());
    }

    #[test]
    fn write_failures_are_not_fatal() {
        let mut publisher = TerminalPublisher::new(Broken);
        publisher.publish("⠠⠵");
        assert!(publisher.redraw("⠠⠵").is_err());
    }
}
