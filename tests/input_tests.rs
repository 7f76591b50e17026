// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use input::*;
use std::time::Duration;

#[test]
fn key_action_zoom_keys() {
    for key in ["ArrowUp", "+", "="] {
        assert_eq!(key_action(key), Some(KeyAction::ZoomIn), "{key}");
    }
    for key in ["ArrowDown", "-", "_"] {
        assert_eq!(key_action(key), Some(KeyAction::ZoomOut), "{key}");
    }
    assert_eq!(KeyAction::ZoomIn.zoom_factor(), Some(KEY_ZOOM_IN));
    assert_eq!(KeyAction::ZoomOut.zoom_factor(), Some(KEY_ZOOM_OUT));
}

#[test]
fn key_action_other_keys() {
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::NextEntry));
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::PreviousEntry));
    assert_eq!(key_action("Home"), Some(KeyAction::Home));
    assert_eq!(key_action("h"), Some(KeyAction::ToggleInstructions));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleInstructions));
    assert_eq!(key_action("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(key_action("Escape"), Some(KeyAction::ExitFullscreen));
    assert_eq!(KeyAction::Home.zoom_factor(), None);
    assert_eq!(KeyAction::NextEntry.zoom_factor(), None);
}

#[test]
fn key_action_ignores_unbound_keys() {
    for key in ["", "a", "z", "1", " ", "Tab", "ArrowUpp"] {
        assert_eq!(key_action(key), None, "{key:?}");
    }
}

#[test]
fn any_key_but_help_fades_instructions() {
    assert!(key_fades_instructions(key_action("a")));
    assert!(key_fades_instructions(key_action("Tab")));
    assert!(key_fades_instructions(key_action("ArrowUp")));
    assert!(key_fades_instructions(key_action("Escape")));
    assert!(!key_fades_instructions(key_action("h")));
    assert!(!key_fades_instructions(key_action("H")));
}

#[test]
fn wheel_direction() {
    assert_eq!(wheel_zoom_factor(120.0), WHEEL_ZOOM_OUT);
    assert_eq!(wheel_zoom_factor(0.5), WHEEL_ZOOM_OUT);
    assert_eq!(wheel_zoom_factor(-120.0), WHEEL_ZOOM_IN);
    assert_eq!(wheel_zoom_factor(0.0), WHEEL_ZOOM_IN);
    assert!(wheel_zoom_factor(1.0) > 1.0);
    assert!(wheel_zoom_factor(-1.0) < 1.0);
}

#[test]
fn wheel_throttle_drops_bursts() {
    let mut t = WheelThrottle::default();
    let t0 = instant::Instant::now();
    assert!(t.accept(t0));
    assert!(!t.accept(t0 + Duration::from_millis(5)));
    assert!(!t.accept(t0 + Duration::from_millis(WHEEL_THROTTLE_MS - 1)));
    assert!(t.accept(t0 + Duration::from_millis(WHEEL_THROTTLE_MS)));
    // The window restarts from the last accepted event
    assert!(!t.accept(t0 + Duration::from_millis(WHEEL_THROTTLE_MS + 10)));
    assert!(t.accept(t0 + Duration::from_millis(WHEEL_THROTTLE_MS * 2 + 1)));
}

#[test]
fn pinch_scales_target_by_distance_ratio() {
    let p = PinchState::begin(100.0, 10.0).unwrap();
    assert_eq!(p.target_for(100.0), Some(10.0));
    // Fingers apart: zoom in
    assert_eq!(p.target_for(200.0), Some(5.0));
    // Fingers together: zoom out
    assert_eq!(p.target_for(50.0), Some(20.0));
}

#[test]
fn pinch_rejects_degenerate_distances() {
    assert!(PinchState::begin(0.0, 10.0).is_none());
    assert!(PinchState::begin(PINCH_MIN_DISTANCE_PX / 2.0, 10.0).is_none());
    let p = PinchState::begin(100.0, 10.0).unwrap();
    assert_eq!(p.target_for(0.0), None);
}

#[test]
fn touch_state_starts_without_pinch() {
    assert!(TouchState::default().pinch.is_none());
}

#[test]
fn touch_drag_factor_around_mid_screen() {
    let h = 800.0;
    assert_eq!(touch_drag_factor(400.0, h), 1.0);
    assert!((touch_drag_factor(800.0, h) - (1.0 + TOUCH_DRAG_GAIN / 2.0)).abs() < 1e-12);
    assert!((touch_drag_factor(0.0, h) - (1.0 - TOUCH_DRAG_GAIN / 2.0)).abs() < 1e-12);
    assert!(touch_drag_factor(600.0, h) > 1.0);
    assert!(touch_drag_factor(200.0, h) < 1.0);
}

#[test]
fn touch_drag_factor_without_viewport_is_neutral() {
    assert_eq!(touch_drag_factor(100.0, 0.0), 1.0);
    assert_eq!(touch_drag_factor(100.0, -5.0), 1.0);
}

#[test]
fn touch_distance_is_euclidean() {
    let a = glam::DVec2::new(0.0, 0.0);
    let b = glam::DVec2::new(3.0, 4.0);
    assert!((touch_distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(touch_distance(b, b), 0.0);
}

#[test]
fn selection_cycles_both_ways() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
    assert_eq!(previous_index(0, 3), 2);
    assert_eq!(previous_index(2, 3), 1);
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(previous_index(0, 1), 0);
    // Out-of-range cursors wrap back into the catalog
    assert_eq!(previous_index(7, 3), 0);
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(previous_index(0, 0), 0);
}
