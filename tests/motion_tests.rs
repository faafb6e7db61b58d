// Host-side tests for tilt and parallax math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use crate::core::constants::TILT_MAX_DEG;
use crate::core::motion::*;
use glam::Vec2;

const ORIGIN: Vec2 = Vec2::new(0.0, 0.0);
const SIZE: Vec2 = Vec2::new(200.0, 100.0);

#[test]
fn tilt_is_flat_at_center() {
    let t = tilt_for_pointer(Vec2::new(100.0, 50.0), ORIGIN, SIZE);
    assert_eq!(t, Tilt::default());
    assert_eq!(
        t.css_transform(),
        "perspective(900px) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn tilt_follows_pointer_offset() {
    // Halfway to the right edge: dx = 0.5
    let t = tilt_for_pointer(Vec2::new(150.0, 50.0), ORIGIN, SIZE);
    assert!((t.rotate_y - 2.0).abs() < 1e-6);
    assert_eq!(t.rotate_x, 0.0);

    // Top-right corner: dx = 1, dy = -1
    let t = tilt_for_pointer(Vec2::new(200.0, 0.0), ORIGIN, SIZE);
    assert!((t.rotate_x - 4.0).abs() < 1e-6);
    assert!((t.rotate_y - 4.0).abs() < 1e-6);
    assert_eq!(
        t.css_transform(),
        "perspective(900px) rotateX(4deg) rotateY(4deg)"
    );
}

#[test]
fn tilt_respects_box_origin() {
    let origin = Vec2::new(300.0, 400.0);
    let t = tilt_for_pointer(Vec2::new(400.0, 475.0), origin, SIZE);
    // center (400, 450); dy = 25 / 50 = 0.5
    assert!((t.rotate_x + 2.0).abs() < 1e-6);
    assert_eq!(t.rotate_y, 0.0);
}

#[test]
fn tilt_is_clamped_for_any_pointer_position() {
    let points = [
        Vec2::new(1.0e4, 1.0e4),
        Vec2::new(-1.0e4, -1.0e4),
        Vec2::new(1.0e4, -1.0e4),
        Vec2::new(-250.0, 75.0),
        Vec2::new(f32::MAX, f32::MIN),
    ];
    for p in points {
        let t = tilt_for_pointer(p, ORIGIN, SIZE);
        assert!(t.rotate_x.abs() <= TILT_MAX_DEG, "{:?} -> {:?}", p, t);
        assert!(t.rotate_y.abs() <= TILT_MAX_DEG, "{:?} -> {:?}", p, t);
    }
    let far = tilt_for_pointer(Vec2::new(1.0e4, 1.0e4), ORIGIN, SIZE);
    assert_eq!(far.rotate_x, -TILT_MAX_DEG);
    assert_eq!(far.rotate_y, TILT_MAX_DEG);
}

#[test]
fn tilt_on_degenerate_box_is_flat() {
    let t = tilt_for_pointer(Vec2::new(10.0, 10.0), ORIGIN, Vec2::ZERO);
    assert_eq!(t, Tilt::default());
    assert!(t.rotate_x.is_finite() && t.rotate_y.is_finite());
}

#[test]
fn parallax_maps_viewport_to_offset_range() {
    let viewport = Vec2::new(1000.0, 500.0);
    assert_eq!(parallax_offset(Vec2::new(500.0, 250.0), viewport), Vec2::ZERO);
    assert_eq!(
        parallax_offset(Vec2::new(750.0, 125.0), viewport),
        Vec2::new(2.0, -2.0)
    );
    assert_eq!(
        parallax_offset(Vec2::new(0.0, 0.0), viewport),
        Vec2::new(-4.0, -4.0)
    );
    assert_eq!(
        parallax_offset(Vec2::new(1000.0, 500.0), viewport),
        Vec2::new(4.0, 4.0)
    );
}

#[test]
fn parallax_with_empty_viewport_is_zero() {
    assert_eq!(
        parallax_offset(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0)),
        Vec2::ZERO
    );
}

#[test]
fn css_px_formats_values() {
    assert_eq!(css_px(2.0), "2px");
    assert_eq!(css_px(-2.5), "-2.5px");
}

#[test]
fn parallax_coalesces_moves_within_a_frame() {
    let mut state = ParallaxState::default();
    assert_eq!(state.take(), None);

    // First move schedules a frame; the rest of the burst does not.
    assert!(state.record(Vec2::new(1.0, 1.0)));
    assert!(!state.record(Vec2::new(2.0, -1.0)));
    assert!(!state.record(Vec2::new(3.0, -3.5)));

    // One publish, with the last move's value.
    assert_eq!(state.take(), Some(Vec2::new(3.0, -3.5)));
    assert_eq!(state.take(), None);

    // Next burst schedules again.
    assert!(state.record(Vec2::new(0.5, 0.5)));
    assert_eq!(state.take(), Some(Vec2::new(0.5, 0.5)));
}

#[test]
fn parallax_cancel_allows_rescheduling() {
    let mut state = ParallaxState::default();
    assert!(state.record(Vec2::ONE));
    state.cancel();
    assert_eq!(state.take(), None);
    assert!(state.record(Vec2::ONE));
    assert_eq!(state.take(), Some(Vec2::ONE));
}
