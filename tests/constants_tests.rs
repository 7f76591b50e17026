// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_bounds_span_planck_to_universe() {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < MAX_SCALE);
    assert!(MIN_SCALE <= 1.6e-35);
    assert!(MAX_SCALE >= 8.8e26);
    assert!(INITIAL_SCALE >= MIN_SCALE && INITIAL_SCALE <= MAX_SCALE);
    // 62 orders of magnitude between the bounds
    assert_eq!((MAX_SCALE / MIN_SCALE).log10().round() as i32, 62);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_fraction() {
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_steps_point_the_right_way() {
    assert!(WHEEL_ZOOM_OUT > 1.0);
    assert!(WHEEL_ZOOM_IN < 1.0 && WHEEL_ZOOM_IN > 0.0);
    assert!(KEY_ZOOM_OUT > 1.0);
    assert!(KEY_ZOOM_IN < 1.0 && KEY_ZOOM_IN > 0.0);
    assert!(TOUCH_DRAG_GAIN > 0.0 && TOUCH_DRAG_GAIN < 1.0);
}

#[test]
fn zoom_steps_roughly_cancel() {
    // One step in then one step out lands near where it started
    assert!((WHEEL_ZOOM_IN * WHEEL_ZOOM_OUT - 1.0).abs() < 1e-3);
    assert!((KEY_ZOOM_IN * KEY_ZOOM_OUT - 1.0).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visibility_bands_are_ordered() {
    assert!(MIN_VISIBLE_PX > 0.0);
    assert!(LABEL_MIN_PX > MIN_VISIBLE_PX);
    assert!(REFERENCE_RADIUS_PX > LABEL_MIN_PX);
    assert!(MAX_VISIBLE_VIEWPORT_FACTOR >= 1.0);
    assert!(LABEL_MAX_HEIGHT_FRACTION > 0.0 && LABEL_MAX_HEIGHT_FRACTION <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_constants_are_sane() {
    assert!(WHEEL_THROTTLE_MS > 0);
    assert!(INSTRUCTIONS_FADE_MS > 0);
    assert!(PINCH_MIN_DISTANCE_PX > 0.0);
    assert!(REFERENCE_RING_DASH_PX > 0.0);
    assert_eq!(CIRCLE_FILL_EDGE_ALPHA.len(), 2);
    assert_eq!(CIRCLE_STROKE_ALPHA.len(), 2);
    assert!((METERS_PER_LIGHT_YEAR - 9.461e15).abs() < 1.0);
}
