// Host-side tests for per-frame visibility planning.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod scale {
    include!("../src/core/scale.rs");
}
mod view {
    include!("../src/core/view.rs");
}

use catalog::*;
use constants::*;
use view::*;

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

fn visible_named<'a>(plan: &'a FramePlan, name: &str) -> Option<&'a VisibleEntry> {
    let idx = Catalog::builtin().index_of(name)?;
    plan.visible.iter().find(|v| v.index == idx)
}

#[test]
fn entry_at_current_scale_sits_on_reference_ring() {
    let plan = plan_frame(CATALOG, INITIAL_SCALE, viewport());
    let human = visible_named(&plan, HOME_ENTRY_NAME).expect("human visible");
    assert_eq!(human.radius_px, REFERENCE_RADIUS_PX);
    assert!(human.labelled);
    assert_eq!(plan.nearest, Catalog::builtin().index_of(HOME_ENTRY_NAME));
}

#[test]
fn visible_radii_stay_within_band() {
    let vp = viewport();
    for k in -35..=27 {
        let scale = 10f64.powi(k);
        let plan = plan_frame(CATALOG, scale, vp);
        for v in &plan.visible {
            assert!(v.radius_px >= MIN_VISIBLE_PX, "{k}: {}", v.radius_px);
            assert!(v.radius_px <= vp.max_visible_px(), "{k}: {}", v.radius_px);
        }
        assert!(plan.nearest.is_some());
    }
}

#[test]
fn visible_entries_are_ordered_largest_first() {
    let plan = plan_frame(CATALOG, 1.0, viewport());
    assert!(plan.visible.len() > 1);
    for pair in plan.visible.windows(2) {
        assert!(pair[0].radius_px >= pair[1].radius_px);
    }
}

#[test]
fn far_away_scales_are_hidden() {
    let plan = plan_frame(CATALOG, INITIAL_SCALE, viewport());
    assert!(visible_named(&plan, "Planck Length").is_none());
    assert!(visible_named(&plan, "Observable Universe").is_none());
    // Ant: 5 mm at 1.7 m is about 0.6 px
    assert!(visible_named(&plan, "Ant").is_none());
}

#[test]
fn only_mid_sized_circles_get_labels() {
    let plan = plan_frame(CATALOG, INITIAL_SCALE, viewport());
    // Door: ~235 px, inside [30, 400]
    assert!(visible_named(&plan, "Door").unwrap().labelled);
    // Giraffe: ~647 px, drawn but taller than half the viewport
    let giraffe = visible_named(&plan, "Giraffe").unwrap();
    assert!(!giraffe.labelled);
    // Cat: ~54 px, labelled; Mouse: ~12 px, drawn without a label
    assert!(visible_named(&plan, "Cat").unwrap().labelled);
    assert!(!visible_named(&plan, "Mouse").unwrap().labelled);
}

#[test]
fn empty_catalog_plans_nothing() {
    let plan = plan_frame(&[], 1.0, viewport());
    assert!(plan.visible.is_empty());
    assert_eq!(plan.nearest, None);
}

#[test]
fn viewport_geometry() {
    let vp = viewport();
    assert_eq!(vp.center(), (500.0, 400.0));
    assert_eq!(vp.max_visible_px(), 2000.0);
    assert_eq!(vp.max_label_px(), 400.0);
}

#[test]
fn draw_order_follows_catalog_size_order() {
    let plan = plan_frame(CATALOG, 1.0, viewport());
    let drawn: Vec<usize> = plan.visible.iter().map(|v| v.index).collect();
    let expected: Vec<usize> = size_order(CATALOG)
        .into_iter()
        .rev()
        .filter(|i| drawn.contains(i))
        .collect();
    assert_eq!(drawn, expected);
}
