// Domain constants shared by the scale model, catalog lookup and formatting.

// Scale bounds (meters)
pub const MIN_SCALE: f64 = 1.0e-35; // just below the Planck length
pub const MAX_SCALE: f64 = 1.0e27; // just above the observable universe

// Easing: fraction of the remaining gap closed per frame
pub const SMOOTHING_FACTOR: f64 = 0.15;

// Starting scale, the catalog's "Human (average)" entry
pub const INITIAL_SCALE: f64 = 1.7;
pub const HOME_ENTRY_NAME: &str = "Human (average)";

// Unit conversions
pub const METERS_PER_LIGHT_YEAR: f64 = 9.461e15;

// Radius in CSS pixels of the reference ring; an object exactly at the
// current scale is drawn at this radius.
pub const REFERENCE_RADIUS_PX: f64 = 200.0;

// Visibility and labelling bands for drawn circles (CSS pixels)
pub const MIN_VISIBLE_PX: f64 = 5.0;
pub const MAX_VISIBLE_VIEWPORT_FACTOR: f64 = 2.0; // of the larger viewport side
pub const LABEL_MIN_PX: f64 = 30.0;
pub const LABEL_MAX_HEIGHT_FRACTION: f64 = 0.5; // of the viewport height
