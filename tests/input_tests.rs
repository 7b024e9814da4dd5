// Host-side tests for pure input and frame-stat helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod stats {
    include!("../src/stats.rs");
}

use glam::Vec2;
use input::*;
use sphere_core::PointerEvent;
use stats::FrameStats;
use std::time::Duration;

#[test]
fn event_types_map_to_pointer_kinds() {
    assert_eq!(
        PointerKind::from_event_type("pointerdown"),
        Some(PointerKind::Down)
    );
    assert_eq!(
        PointerKind::from_event_type("pointermove"),
        Some(PointerKind::Move)
    );
    assert_eq!(PointerKind::from_event_type("pointerup"), Some(PointerKind::Up));
    assert_eq!(
        PointerKind::from_event_type("pointerleave"),
        Some(PointerKind::Leave)
    );
    assert_eq!(
        PointerKind::from_event_type("mouseleave"),
        Some(PointerKind::Leave)
    );
    assert_eq!(PointerKind::from_event_type("click"), None);
}

#[test]
fn every_wired_event_type_is_recognized() {
    for ty in POINTER_EVENT_TYPES {
        assert!(PointerKind::from_event_type(ty).is_some(), "{}", ty);
    }
}

#[test]
fn leave_and_up_both_release() {
    let pos = Vec2::new(10.0, 20.0);
    let vp = Vec2::new(100.0, 100.0);
    assert_eq!(
        to_pointer_event(PointerKind::Up, pos, vp),
        PointerEvent::Release
    );
    assert_eq!(
        to_pointer_event(PointerKind::Leave, pos, vp),
        PointerEvent::Release
    );
    assert_eq!(
        to_pointer_event(PointerKind::Down, pos, vp),
        PointerEvent::Press {
            position: pos,
            viewport: vp
        }
    );
    assert_eq!(
        to_pointer_event(PointerKind::Move, pos, vp),
        PointerEvent::Move { position: pos }
    );
}

#[test]
fn client_coordinates_scale_to_backing_store() {
    // CSS rect 400x200 at (50, 30), backing store at 2x DPR
    let px = client_to_canvas_px(
        Vec2::new(250.0, 130.0),
        Vec2::new(50.0, 30.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(px, Vec2::new(400.0, 200.0));
}

#[test]
fn collapsed_rect_leaves_offset_unscaled() {
    let px = client_to_canvas_px(
        Vec2::new(15.0, 25.0),
        Vec2::new(5.0, 5.0),
        Vec2::ZERO,
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(px, Vec2::new(10.0, 20.0));
}

#[test]
fn frame_stats_report_once_per_interval() {
    let t0 = instant::Instant::now();
    let mut stats = FrameStats::new(t0, 1.0);
    assert_eq!(stats.record(t0 + Duration::from_millis(500)), None);
    let fps = stats
        .record(t0 + Duration::from_millis(1000))
        .expect("interval closed");
    assert!((fps - 2.0).abs() < 1e-4);
    // Counter restarts for the next window
    assert_eq!(stats.record(t0 + Duration::from_millis(1500)), None);
}
