/// Input and presentation tuning constants for the web frontend.
///
/// Zoom factors multiply the target scale: above 1 zooms out (the reference
/// ring stands for more meters), below 1 zooms in.
// Mouse wheel
pub const WHEEL_ZOOM_OUT: f64 = 1.1;
pub const WHEEL_ZOOM_IN: f64 = 0.909; // ~1 / 1.1
pub const WHEEL_THROTTLE_MS: u64 = 16; // one step per frame at 60 Hz

// Keyboard
pub const KEY_ZOOM_IN: f64 = 0.8;
pub const KEY_ZOOM_OUT: f64 = 1.25;

// One-finger touch: zoom rate relative to the finger's offset from mid-screen
pub const TOUCH_DRAG_GAIN: f64 = 0.02;

// Pinch distances below this are ignored (px)
pub const PINCH_MIN_DISTANCE_PX: f64 = 1.0;

// Instructions panel fade-out before it is removed from layout
pub const INSTRUCTIONS_FADE_MS: i32 = 300;

// Canvas drawing
pub const CIRCLE_FILL_EDGE_ALPHA: &str = "80"; // hex alpha appended to the entry color
pub const CIRCLE_STROKE_ALPHA: &str = "40";
pub const CIRCLE_STROKE_WIDTH: f64 = 2.0;
pub const LABEL_OFFSET_PX: f64 = 25.0; // label baseline above the circle
pub const LABEL_FONT: &str = "14px system-ui, sans-serif";
pub const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const REFERENCE_RING_STYLE: &str = "rgba(255, 255, 255, 0.2)";
pub const REFERENCE_RING_DASH_PX: f64 = 5.0;
pub const BACKGROUND_COLOR: &str = "#000000";
