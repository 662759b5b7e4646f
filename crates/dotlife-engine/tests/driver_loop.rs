//! Integration test: the paced generation loop.
//!
//! Drives a [`Driver`] with scripted frame timestamps and checks pacing,
//! pause/resume, publication after every generation, and reloading from
//! externally changed fragments.

use std::time::{Duration, Instant};

use dotlife_core::{Generation, Grid, LifeState, RuleSet};
use dotlife_engine::seed::seed_state;
use dotlife_engine::{Driver, DriverConfig, DriverHandle, FrameOutcome};
use dotlife_test_utils::{fixtures, RecordingPublisher, ScriptedScheduler};

const TICK: Duration = Duration::from_millis(250);
const FRAME: Duration = Duration::from_millis(16);

fn config() -> DriverConfig {
    DriverConfig {
        tick_interval: TICK,
        frame_interval: FRAME,
    }
}

fn driver_at(
    start: Instant,
    fragment: Option<&str>,
) -> (Driver<RecordingPublisher>, DriverHandle) {
    Driver::new(&config(), fragment, RecordingPublisher::new(), start).unwrap()
}

// ── Pacing ───────────────────────────────────────────────────────

#[test]
fn frames_faster_than_tick_interval_are_no_ops() {
    let start = Instant::now();
    let (mut driver, _handle) = driver_at(start, None);

    // 64 frames of 16ms: generations land on the frames at 256, 512, 768 and 1024.
    let mut scheduler = ScriptedScheduler::evenly_spaced(start, FRAME, 64);
    driver.run(&mut scheduler);

    assert_eq!(driver.generation(), Generation(4));
    // Initial publish plus one per generation.
    assert_eq!(driver.publisher().published().len(), 5);
}

#[test]
fn each_generation_is_published_in_order() {
    let start = Instant::now();
    let (mut driver, _handle) = driver_at(start, None);
    let mut scheduler = ScriptedScheduler::evenly_spaced(start, TICK, 3);
    driver.run(&mut scheduler);

    let mut expected = seed_state();
    let mut fragments = vec![expected.encode()];
    for _ in 0..3 {
        expected = expected.step();
        fragments.push(expected.encode());
    }
    assert_eq!(driver.publisher().published(), fragments.as_slice());
    assert_eq!(driver.state(), &expected);
}

// ── Pause / resume ───────────────────────────────────────────────

#[test]
fn paused_driver_keeps_polling_without_advancing() {
    let start = Instant::now();
    let (mut driver, handle) = driver_at(start, None);
    handle.pause().unwrap();

    for i in 1..=10 {
        assert_eq!(driver.on_frame(start + TICK * i), FrameOutcome::Paused);
    }
    assert!(driver.is_paused());
    assert_eq!(driver.generation(), Generation(0));
    assert_eq!(driver.publisher().published().len(), 1);

    handle.resume().unwrap();
    assert_eq!(
        driver.on_frame(start + TICK * 11),
        FrameOutcome::Advanced(Generation(1))
    );
}

#[test]
fn handle_works_across_threads() {
    let start = Instant::now();
    let (mut driver, handle) = driver_at(start, None);
    std::thread::spawn(move || handle.pause().unwrap())
        .join()
        .unwrap();
    assert_eq!(driver.on_frame(start + TICK), FrameOutcome::Paused);
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn initial_fragment_is_loaded_and_republished() {
    let start = Instant::now();
    let blinker = LifeState::new(fixtures::blinker(), RuleSet::default());
    let fragment = format!("#{}", blinker.encode());
    let (mut driver, _handle) = driver_at(start, Some(&fragment));

    assert_eq!(driver.state(), &blinker);
    assert_eq!(driver.publisher().last(), Some(blinker.encode().as_str()));

    driver.on_frame(start + TICK);
    driver.on_frame(start + TICK * 2);
    assert_eq!(driver.state(), &blinker);
}

#[test]
fn unparseable_initial_fragment_uses_seed() {
    let start = Instant::now();
    let (driver, _handle) = driver_at(start, Some("#garbage"));
    assert_eq!(driver.state(), &seed_state());
}

#[test]
fn fragment_change_replaces_state_and_rules() {
    let start = Instant::now();
    let (mut driver, handle) = driver_at(start, None);
    driver.on_frame(start + TICK);
    assert_eq!(driver.generation(), Generation(1));

    let rules = RuleSet::parse("B36/S23").unwrap();
    let incoming = LifeState::new(fixtures::block(), rules);
    handle.fragment_changed(incoming.encode()).unwrap();

    // The reload resets the pacer, so this frame only applies the event.
    assert_eq!(
        driver.on_frame(start + TICK + FRAME),
        FrameOutcome::Waiting
    );
    assert_eq!(driver.state(), &incoming);
    assert_eq!(driver.generation(), Generation(0));
    assert_eq!(driver.publisher().last(), Some(incoming.encode().as_str()));
    assert!(driver.last_published().starts_with("B36/S23"));
}

#[test]
fn fragment_change_to_garbage_falls_back_to_seed() {
    let start = Instant::now();
    let glider = LifeState::new(fixtures::glider(16), RuleSet::default());
    let (mut driver, handle) = driver_at(start, Some(&glider.encode()));
    handle.fragment_changed("%%%").unwrap();
    driver.on_frame(start + FRAME);
    assert_eq!(driver.state(), &seed_state());
}

#[test]
fn echoed_fragment_does_not_reset_generation() {
    let start = Instant::now();
    let (mut driver, handle) = driver_at(start, None);
    driver.on_frame(start + TICK);
    driver.on_frame(start + TICK * 2);
    handle.fragment_changed(driver.last_published().to_string()).unwrap();
    driver.on_frame(start + TICK * 2 + FRAME);
    assert_eq!(driver.generation(), Generation(2));
}

#[test]
fn advanced_grid_is_a_fresh_value() {
    let start = Instant::now();
    let (mut driver, _handle) = driver_at(start, None);
    let before: Grid = driver.state().grid.clone();
    driver.on_frame(start + TICK);
    assert_eq!(driver.state().grid, before.advance(&RuleSet::default()));
    assert_ne!(driver.state().grid, before);
}
