#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn window(vw: f64, vh: f64, dw: f64, dh: f64, margin: f64, overscroll: f64) -> BoundsWindow {
    BoundsWindow::recompute(Size::new(vw, vh), Size::new(dw, dh), margin, overscroll)
}

// =============================================================
// recompute
// =============================================================

#[test]
fn plain_document_larger_than_viewport() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 0.0, 0.0);
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_x, 1200.0);
    assert_eq!(b.max_y, 2400.0);
}

#[test]
fn margin_widens_both_ends() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 20.0, 0.0);
    assert_eq!(b.min_x, -20.0);
    assert_eq!(b.min_y, -20.0);
    assert_eq!(b.max_x, 1220.0);
    assert_eq!(b.max_y, 2420.0);
}

#[test]
fn overscroll_scales_with_viewport() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 0.0, 0.5);
    assert_eq!(b.min_x, -400.0);
    assert_eq!(b.min_y, -300.0);
    assert_eq!(b.max_x, 1600.0);
    assert_eq!(b.max_y, 2700.0);
}

#[test]
fn margin_and_overscroll_combine() {
    let b = window(100.0, 100.0, 500.0, 500.0, 10.0, 0.25);
    assert_eq!(b.min(), Point::new(-35.0, -35.0));
    assert_eq!(b.max(), Point::new(435.0, 435.0));
}

#[test]
fn equal_sizes_give_single_point_window() {
    let b = window(800.0, 600.0, 800.0, 600.0, 0.0, 0.0);
    assert_eq!(b.min(), Point::ZERO);
    assert_eq!(b.max(), Point::ZERO);
    assert!(!b.is_scrollable_x());
    assert!(!b.is_scrollable_y());
}

#[test]
fn small_document_is_degenerate() {
    let b = window(800.0, 600.0, 400.0, 300.0, 0.0, 0.0);
    assert!(b.min_x > b.max_x);
    assert!(b.min_y > b.max_y);
    assert_eq!(b.max_x, -400.0);
    assert_eq!(b.max_y, -300.0);
}

#[test]
fn degenerate_on_one_axis_only() {
    let b = window(800.0, 600.0, 2000.0, 100.0, 0.0, 0.0);
    assert!(b.is_scrollable_x());
    assert!(!b.is_scrollable_y());
}

// =============================================================
// clamp / contains
// =============================================================

#[test]
fn clamp_inside_is_identity() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 0.0, 0.0);
    let p = Point::new(100.0, 200.0);
    assert_eq!(b.clamp(p), p);
    assert!(b.contains(p));
}

#[test]
fn clamp_pulls_to_edges() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 0.0, 0.0);
    assert_eq!(b.clamp(Point::new(-50.0, 9999.0)), Point::new(0.0, 2400.0));
    assert!(!b.contains(Point::new(-50.0, 10.0)));
}

#[test]
fn contains_is_inclusive() {
    let b = window(800.0, 600.0, 2000.0, 3000.0, 0.0, 0.0);
    assert!(b.contains(b.min()));
    assert!(b.contains(b.max()));
}

#[test]
fn clamp_degenerate_axis_pins_to_middle() {
    let b = window(800.0, 600.0, 400.0, 3000.0, 0.0, 0.0);
    // min_x = 0, max_x = -400 -> pinned at -200.
    let c = b.clamp(Point::new(123.0, 50.0));
    assert_eq!(c.x, -200.0);
    assert_eq!(c.y, 50.0);
}

#[test]
fn contains_degenerate_axis_only_at_pin() {
    let b = window(800.0, 600.0, 400.0, 3000.0, 0.0, 0.0);
    assert!(b.contains(Point::new(-200.0, 0.0)));
    assert!(!b.contains(Point::new(0.0, 0.0)));
}

#[test]
fn default_window_is_zero() {
    let b = BoundsWindow::default();
    assert_eq!(b.min(), Point::ZERO);
    assert_eq!(b.max(), Point::ZERO);
}

// =============================================================
// Properties
// =============================================================

proptest! {
    #[test]
    fn min_not_above_max_when_document_covers_viewport(
        vw in 1.0f64..4000.0,
        vh in 1.0f64..4000.0,
        extra_w in 0.0f64..10_000.0,
        extra_h in 0.0f64..10_000.0,
        margin in 0.0f64..500.0,
        overscroll in 0.0f64..2.0,
    ) {
        let b = window(vw, vh, vw + extra_w, vh + extra_h, margin, overscroll);
        prop_assert!(b.min_x <= b.max_x);
        prop_assert!(b.min_y <= b.max_y);
    }

    #[test]
    fn clamp_result_is_contained(
        vw in 1.0f64..2000.0,
        dw in 0.0f64..4000.0,
        margin in 0.0f64..100.0,
        overscroll in 0.0f64..1.0,
        px in -10_000.0f64..10_000.0,
        py in -10_000.0f64..10_000.0,
    ) {
        let b = window(vw, vw, dw, dw, margin, overscroll);
        let c = b.clamp(Point::new(px, py));
        prop_assert!(b.contains(c));
    }
}
