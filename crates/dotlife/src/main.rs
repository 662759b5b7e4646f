//! dotlife: run a Braille Game of Life in the terminal.
//!
//! Usage:
//!   dotlife                      → start from the built-in glider seed
//!   dotlife 'B36/S23⠠⠵⠀⠀|⠀⠀⠀⠀'   → start from a fragment
//!
//! While running, an empty line on stdin toggles pause and any other line
//! is loaded as a new fragment.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use dotlife::prelude::*;
use dotlife::terminal::TerminalPublisher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "dotlife",
    about = "Conway's Game of Life on a torus, persisted as Braille text",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Initial fragment: optional `B../S..` directive plus Braille rows
    /// joined with `|`. A leading `#` and percent escapes are accepted.
    fragment: Option<String>,

    /// Minimum time between generations, in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_ms: u64,

    /// Time between frames, in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = DriverConfig {
        tick_interval: Duration::from_millis(cli.tick_ms),
        frame_interval: Duration::from_millis(cli.frame_ms),
    };
    let publisher = TerminalPublisher::new(io::stdout());
    let (mut driver, handle) =
        match Driver::new(&config, cli.fragment.as_deref(), publisher, Instant::now()) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!(error = %e, "invalid driver configuration");
                return ExitCode::FAILURE;
            }
        };

    if let Err(e) = thread::Builder::new()
        .name("dotlife-input".into())
        .spawn(move || forward_input(&handle))
    {
        tracing::warn!(error = %e, "stdin controls unavailable");
    }

    driver.run(&mut ThreadScheduler::new(config.frame_interval));
    ExitCode::SUCCESS
}

/// Translate stdin lines into driver events until stdin closes or the
/// driver goes away.
fn forward_input(handle: &DriverHandle) {
    let mut paused = false;
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        let sent = if line.is_empty() {
            paused = !paused;
            if paused {
                handle.pause()
            } else {
                handle.resume()
            }
        } else {
            handle.fragment_changed(line)
        };
        if sent.is_err() {
            break;
        }
    }
    tracing::debug!("input thread exiting");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dotlife=info,dotlife_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
