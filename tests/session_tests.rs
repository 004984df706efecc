// Host-side integration tests for the full search session.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod input {
    include!("../src/input.rs");
}
mod lockon {
    include!("../src/lockon.rs");
}
mod orientation {
    include!("../src/orientation.rs");
}
mod tracker {
    include!("../src/tracker.rs");
}
mod session {
    include!("../src/session.rs");
}

use glam::Vec2;
use input::PointerKind;
use lockon::LockPhase;
use orientation::OrientationSample;
use session::{SearchSession, SessionConfig};
use std::cell::Cell;
use std::rc::Rc;

fn test_config() -> SessionConfig {
    SessionConfig {
        sensitivity: 25.0,
        offset_clamp: 2000.0,
        lock_radius: 250.0,
        countdown_ms: 2000,
        guide_rest_offset_deg: 90.0,
        target: Vec2::new(0.0, -400.0),
    }
}

fn counting_session(config: SessionConfig) -> (SearchSession, Rc<Cell<u32>>) {
    let found = Rc::new(Cell::new(0u32));
    let found_cb = found.clone();
    let session = SearchSession::new(config, move || found_cb.set(found_cb.get() + 1));
    (session, found)
}

fn sample(alpha: f64, beta: f64) -> OrientationSample {
    OrientationSample {
        alpha: Some(alpha),
        beta: Some(beta),
        gamma: Some(0.0),
    }
}

#[test]
fn drag_sequence_accumulates_offsets() {
    let (mut s, _) = counting_session(test_config());
    s.pointer_down(Vec2::new(0.0, 0.0), PointerKind::Mouse);
    s.pointer_move(Vec2::new(50.0, 0.0));
    s.pointer_move(Vec2::new(100.0, 0.0));
    s.pointer_up();
    assert_eq!(s.snapshot().offset, Vec2::new(100.0, 0.0));
}

#[test]
fn distance_is_never_stale_after_an_update() {
    let (mut s, _) = counting_session(test_config());
    s.pointer_down(Vec2::ZERO, PointerKind::Touch);
    for step in [
        Vec2::new(-30.0, -120.0),
        Vec2::new(55.0, -300.0),
        Vec2::new(200.0, 80.0),
    ] {
        s.pointer_move(step);
        let snap = s.snapshot();
        let expected = (Vec2::new(0.0, -400.0) - snap.offset).length();
        assert!((snap.distance - expected).abs() < 1e-4);
    }
}

#[test]
fn reaching_the_target_locks_on_the_same_tick() {
    let (mut s, _) = counting_session(test_config());
    s.pointer_down(Vec2::ZERO, PointerKind::Mouse);
    let just_locked = s.pointer_move(Vec2::new(0.0, -400.0));
    assert!(just_locked);
    assert_eq!(s.snapshot().phase, LockPhase::Locked);
    assert_eq!(s.snapshot().distance, 0.0);
}

#[test]
fn panning_stops_once_locked() {
    let (mut s, _) = counting_session(test_config());
    s.pointer_down(Vec2::ZERO, PointerKind::Mouse);
    s.pointer_move(Vec2::new(0.0, -400.0));
    let locked_offset = s.snapshot().offset;
    // The lock edge ends the gesture; neither the stale move stream nor a
    // fresh gesture moves the camera afterwards.
    s.pointer_move(Vec2::new(500.0, 500.0));
    s.pointer_up();
    s.pointer_down(Vec2::ZERO, PointerKind::Mouse);
    s.pointer_move(Vec2::new(300.0, 300.0));
    assert_eq!(s.snapshot().offset, locked_offset);
}

#[test]
fn completion_callback_fires_exactly_once() {
    let (mut s, found) = counting_session(test_config());
    s.pointer_down(Vec2::ZERO, PointerKind::Mouse);
    s.pointer_move(Vec2::new(0.0, -400.0));
    assert_eq!(found.get(), 0); // not before the countdown
    s.countdown_elapsed();
    assert_eq!(found.get(), 1);
    assert_eq!(s.snapshot().phase, LockPhase::Found);
    // Duplicate timer fires must not re-invoke the callback.
    s.countdown_elapsed();
    s.countdown_elapsed();
    assert_eq!(found.get(), 1);
}

#[test]
fn countdown_before_lock_does_not_complete() {
    let (mut s, found) = counting_session(test_config());
    s.countdown_elapsed();
    assert_eq!(found.get(), 0);
    assert_eq!(s.snapshot().phase, LockPhase::Scanning);
}

#[test]
fn phase_is_monotonic_through_a_session() {
    let (mut s, _) = counting_session(test_config());
    s.pointer_down(Vec2::ZERO, PointerKind::Mouse);
    s.pointer_move(Vec2::new(0.0, -400.0));
    s.pointer_up();
    // Orientation keeps flowing after lock but can only move the view, not
    // the phase.
    s.handle_orientation(sample(0.0, 0.0)); // baseline
    s.handle_orientation(sample(40.0, 30.0));
    assert_eq!(s.snapshot().phase, LockPhase::Locked);
    s.countdown_elapsed();
    assert_eq!(s.snapshot().phase, LockPhase::Found);
    s.handle_orientation(sample(10.0, 10.0));
    assert_eq!(s.snapshot().phase, LockPhase::Found);
}

#[test]
fn orientation_pans_and_can_lock() {
    let mut config = test_config();
    config.target = Vec2::new(250.0, -250.0);
    let (mut s, _) = counting_session(config);
    s.handle_orientation(sample(100.0, 50.0)); // baseline, no movement
    assert_eq!(s.snapshot().offset, Vec2::ZERO);
    // baseline - current scaled by 25 px/deg: (10, -10) deg -> (250, -250) px
    let just_locked = s.handle_orientation(sample(90.0, 60.0));
    assert!(just_locked);
    assert_eq!(s.snapshot().offset, Vec2::new(250.0, -250.0));
    assert_eq!(s.snapshot().phase, LockPhase::Locked);
}

#[test]
fn active_drag_suppresses_orientation() {
    let (mut s, _) = counting_session(test_config());
    s.handle_orientation(sample(0.0, 0.0)); // baseline
    s.pointer_down(Vec2::ZERO, PointerKind::Touch);
    s.pointer_move(Vec2::new(10.0, 10.0));
    s.handle_orientation(sample(20.0, 20.0));
    // Orientation would have jumped the offset to (-500, -500); the drag
    // gesture wins until it ends.
    assert_eq!(s.snapshot().offset, Vec2::new(10.0, 10.0));
    s.pointer_up();
    s.handle_orientation(sample(20.0, 20.0));
    assert_eq!(s.snapshot().offset, Vec2::new(-500.0, -500.0));
}

#[test]
fn orientation_only_session_stays_usable_without_pointer() {
    let (mut s, found) = counting_session(SessionConfig {
        target: Vec2::new(100.0, 0.0),
        ..test_config()
    });
    s.handle_orientation(sample(4.0, 0.0));
    s.handle_orientation(sample(0.0, 0.0)); // +4 deg -> +100 px
    assert_eq!(s.snapshot().phase, LockPhase::Locked);
    s.countdown_elapsed();
    assert_eq!(found.get(), 1);
}

#[test]
fn drag_only_session_stays_usable_without_orientation() {
    // Permission denied: no orientation sample ever arrives.
    let (mut s, found) = counting_session(test_config());
    s.pointer_down(Vec2::new(300.0, 300.0), PointerKind::Touch);
    s.pointer_move(Vec2::new(300.0, -100.0));
    assert_eq!(s.snapshot().phase, LockPhase::Locked);
    s.countdown_elapsed();
    assert_eq!(found.get(), 1);
}

#[test]
fn malformed_orientation_never_corrupts_the_offset() {
    let (mut s, _) = counting_session(test_config());
    s.handle_orientation(sample(0.0, 0.0));
    s.handle_orientation(sample(5.0, 0.0));
    let before = s.snapshot().offset;
    s.handle_orientation(OrientationSample {
        alpha: Some(f64::NAN),
        beta: Some(0.0),
        gamma: None,
    });
    s.handle_orientation(OrientationSample {
        alpha: None,
        beta: None,
        gamma: None,
    });
    let snap = s.snapshot();
    assert_eq!(snap.offset, before);
    assert!(snap.distance.is_finite());
}
