use super::catalog::{nearest_index, size_order, CatalogEntry};
use super::constants::{
    LABEL_MAX_HEIGHT_FRACTION, LABEL_MIN_PX, MAX_VISIBLE_VIEWPORT_FACTOR, MIN_VISIBLE_PX,
    REFERENCE_RADIUS_PX,
};
use super::scale::{is_visible, size_to_display};

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn max_visible_px(&self) -> f64 {
        self.width.max(self.height) * MAX_VISIBLE_VIEWPORT_FACTOR
    }

    #[inline]
    pub fn max_label_px(&self) -> f64 {
        self.height * LABEL_MAX_HEIGHT_FRACTION
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleEntry {
    pub index: usize,
    pub radius_px: f64,
    pub labelled: bool,
}

/// What one frame should draw for a given scale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FramePlan {
    /// Largest first, so smaller circles are painted on top.
    pub visible: Vec<VisibleEntry>,
    /// Catalog entry closest to the scale, over the whole catalog.
    pub nearest: Option<usize>,
}

pub fn plan_frame(entries: &[CatalogEntry], scale: f64, viewport: Viewport) -> FramePlan {
    let max_px = viewport.max_visible_px();
    let max_label_px = viewport.max_label_px();

    // Radius grows with size, so walking sizes downwards paints largest first
    let visible: Vec<VisibleEntry> = size_order(entries)
        .into_iter()
        .rev()
        .filter_map(|index| {
            let radius_px = size_to_display(entries[index].size_meters, scale, REFERENCE_RADIUS_PX);
            is_visible(radius_px, MIN_VISIBLE_PX, max_px).then(|| VisibleEntry {
                index,
                radius_px,
                labelled: is_visible(radius_px, LABEL_MIN_PX, max_label_px),
            })
        })
        .collect();

    FramePlan {
        visible,
        nearest: nearest_index(entries, scale).ok(),
    }
}
