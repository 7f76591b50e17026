use super::constants::{INITIAL_SCALE, MAX_SCALE, MIN_SCALE, SMOOTHING_FACTOR};

/// The scale currently shown and the scale the view is easing toward.
///
/// Both values are meters represented by the reference ring. Input handlers
/// only move `target`; the frame loop calls [`ScaleModel::advance`] once per
/// animation tick to pull `current` after it.
#[derive(Clone, Debug)]
pub struct ScaleModel {
    current: f64,
    target: f64,
    smoothing: f64,
    min: f64,
    max: f64,
}

impl Default for ScaleModel {
    fn default() -> Self {
        Self::with_bounds(INITIAL_SCALE, MIN_SCALE, MAX_SCALE, SMOOTHING_FACTOR)
    }
}

impl ScaleModel {
    pub fn new(initial: f64) -> Self {
        Self::with_bounds(initial, MIN_SCALE, MAX_SCALE, SMOOTHING_FACTOR)
    }

    /// `min`/`max` are swapped if given in the wrong order. `smoothing` is
    /// kept within (0, 1]; zero or NaN fall back to the default factor.
    pub fn with_bounds(initial: f64, min: f64, max: f64, smoothing: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let smoothing = if smoothing > 0.0 {
            smoothing.min(1.0)
        } else {
            SMOOTHING_FACTOR
        };
        let mut model = Self {
            current: min,
            target: min,
            smoothing,
            min,
            max,
        };
        model.jump_to(initial);
        model
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Clamp into `[min, max]`. NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }

    /// One easing step toward the target.
    pub fn advance(&mut self) {
        let next = self.current + (self.target - self.current) * self.smoothing;
        self.current = self.clamp(next);
    }

    pub fn set_target(&mut self, scale: f64) {
        self.target = self.clamp(scale);
    }

    /// Relative zoom: factors above 1 zoom out, below 1 zoom in.
    pub fn multiply_target(&mut self, factor: f64) {
        self.target = self.clamp(self.target * factor);
    }

    /// Move both current and target, skipping the easing.
    pub fn jump_to(&mut self, scale: f64) {
        let s = self.clamp(scale);
        self.current = s;
        self.target = s;
    }

    /// Remaining distance between current and target, in meters.
    #[inline]
    pub fn gap(&self) -> f64 {
        (self.target - self.current).abs()
    }
}

/// Size in pixels of an object of `object_size_meters` when the reference
/// ring of `reference_px` stands for `reference_scale` meters.
#[inline]
pub fn size_to_display(object_size_meters: f64, reference_scale: f64, reference_px: f64) -> f64 {
    object_size_meters / reference_scale * reference_px
}

#[inline]
pub fn is_visible(px: f64, min_visible_px: f64, max_visible_px: f64) -> bool {
    px >= min_visible_px && px <= max_visible_px
}
