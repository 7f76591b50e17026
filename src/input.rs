use crate::constants::{
    KEY_ZOOM_IN, KEY_ZOOM_OUT, PINCH_MIN_DISTANCE_PX, TOUCH_DRAG_GAIN, WHEEL_THROTTLE_MS,
    WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use glam::DVec2;
use instant::Instant;
use std::time::Duration;
use web_sys as web;

/// Keys the viewer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ZoomIn,
    ZoomOut,
    NextEntry,
    PreviousEntry,
    Home,
    ToggleInstructions,
    ToggleFullscreen,
    ExitFullscreen,
}

impl KeyAction {
    /// Target multiplier for zoom keys, `None` for everything else.
    #[inline]
    pub fn zoom_factor(self) -> Option<f64> {
        match self {
            KeyAction::ZoomIn => Some(KEY_ZOOM_IN),
            KeyAction::ZoomOut => Some(KEY_ZOOM_OUT),
            _ => None,
        }
    }
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowUp" | "+" | "=" => Some(KeyAction::ZoomIn),
        "ArrowDown" | "-" | "_" => Some(KeyAction::ZoomOut),
        "ArrowRight" => Some(KeyAction::NextEntry),
        "ArrowLeft" => Some(KeyAction::PreviousEntry),
        "Home" => Some(KeyAction::Home),
        "h" | "H" => Some(KeyAction::ToggleInstructions),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Any first keydown fades the instructions, except the key that toggles them.
#[inline]
pub fn key_fades_instructions(action: Option<KeyAction>) -> bool {
    action != Some(KeyAction::ToggleInstructions)
}

// ---------------- Wheel ----------------
/// Scrolling down zooms out, anything else zooms in.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT
    } else {
        WHEEL_ZOOM_IN
    }
}

/// Drops wheel events that arrive faster than one per throttle window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelThrottle {
    last: Option<Instant>,
}

impl WheelThrottle {
    pub fn accept(&mut self, now: Instant) -> bool {
        let window = Duration::from_millis(WHEEL_THROTTLE_MS);
        match self.last {
            Some(prev) if now < prev + window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

// ---------------- Touch ----------------
/// Snapshot taken when a two-finger gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    pub start_distance: f64,
    pub start_target: f64,
}

impl PinchState {
    pub fn begin(start_distance: f64, start_target: f64) -> Option<Self> {
        (start_distance >= PINCH_MIN_DISTANCE_PX).then_some(Self {
            start_distance,
            start_target,
        })
    }

    /// Spreading the fingers zooms in: the target shrinks by the same ratio
    /// the finger distance grows.
    pub fn target_for(&self, distance: f64) -> Option<f64> {
        if distance < PINCH_MIN_DISTANCE_PX {
            return None;
        }
        Some(self.start_target * self.start_distance / distance)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TouchState {
    pub pinch: Option<PinchState>,
}

/// Per-move zoom factor for a single finger at `y`: below mid-screen zooms
/// out, above zooms in, faster the further from the middle.
#[inline]
pub fn touch_drag_factor(y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    let offset = y - viewport_height * 0.5;
    1.0 + (offset / viewport_height) * TOUCH_DRAG_GAIN
}

#[inline]
pub fn touch_distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

pub fn two_finger_distance(touches: &web::TouchList) -> Option<f64> {
    if touches.length() < 2 {
        return None;
    }
    let t0 = touches.item(0)?;
    let t1 = touches.item(1)?;
    let a = DVec2::new(t0.client_x() as f64, t0.client_y() as f64);
    let b = DVec2::new(t1.client_x() as f64, t1.client_y() as f64);
    Some(touch_distance(a, b))
}

// ---------------- Selection helpers ----------------
#[inline]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

#[inline]
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + len - 1) % len
}
