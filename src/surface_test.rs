use canvas::controller::CanvasController;
use canvas::input::Pinch;

use super::*;

// =============================================================================
// TracingSurface
// =============================================================================

#[test]
fn view_to_document_divides_by_zoom() {
    let mut surface = TracingSurface::new(None);
    surface.set_zoom(2.0);
    let doc = surface.view_to_document(Rect::new(10.0, 20.0, 800.0, 600.0));
    assert_eq!(doc, Rect::new(5.0, 10.0, 400.0, 300.0));
}

#[test]
fn new_surface_is_visible_at_identity_zoom() {
    let mut surface = TracingSurface::new(None);
    assert!(surface.is_visible());
    assert!((surface.zoom() - 1.0).abs() < f64::EPSILON);
    surface.set_visible(false);
    surface.set_zoom(2.5);
    assert!(!surface.is_visible());
    assert!((surface.zoom() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn preview_is_captured_and_hidden() {
    let mut surface = TracingSurface::new(None);
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    surface.capture_preview(rect);
    assert_eq!(surface.preview(), Some(rect));
    surface.hide_preview();
    assert_eq!(surface.preview(), None);
}

#[test]
fn surface_limits_are_reported() {
    let limits = ZoomLimits { min: 0.5, max: 2.0 };
    assert_eq!(TracingSurface::new(Some(limits)).zoom_limits(), Some(limits));
    assert_eq!(TracingSurface::new(None).zoom_limits(), None);
}

#[test]
fn pinch_through_controller_commits_zoom() {
    let mut controller = CanvasController::default();
    controller.resize(Size::new(800.0, 600.0));
    controller.attach_surface(Box::new(TracingSurface::new(None)));

    let pinch = Pinch { center: Point::new(400.0, 300.0), scale_factor: 1.5, last_scale_factor: 1.0 };
    controller.pinch_started(pinch);
    controller.pinch_finished(Point::new(400.0, 300.0));
    assert!((controller.zoom() - 1.5).abs() < 1e-9);
    assert!(controller.detach_surface().is_some());
}

// =============================================================================
// ScrollbarObserver
// =============================================================================

fn window(max_x: f64, max_y: f64) -> BoundsWindow {
    BoundsWindow { min_x: 0.0, min_y: 0.0, max_x, max_y }
}

#[test]
fn scrollbar_position_is_fraction_of_pan_range() {
    let mut observer = ScrollbarObserver::new();
    observer.on_bounds_changed(window(2000.0, 1000.0));
    observer.on_offset_changed(Point::new(500.0, 250.0));
    assert_eq!(observer.position(), Point::new(0.25, 0.25));
}

#[test]
fn scrollbar_position_clamps_overscroll() {
    let mut observer = ScrollbarObserver::new();
    observer.on_bounds_changed(window(100.0, 100.0));
    observer.on_offset_changed(Point::new(-20.0, 140.0));
    assert_eq!(observer.position(), Point::new(0.0, 1.0));
}

#[test]
fn scrollbar_tracks_bounds_changes() {
    let mut observer = ScrollbarObserver::new();
    observer.on_bounds_changed(window(100.0, 100.0));
    observer.on_offset_changed(Point::new(50.0, 50.0));
    observer.on_bounds_changed(window(200.0, 50.0));
    assert_eq!(observer.position(), Point::new(0.25, 1.0));
}

#[test]
fn scrollbar_on_unscrollable_axis_stays_at_origin() {
    let mut observer = ScrollbarObserver::new();
    observer.on_offset_changed(Point::new(30.0, 30.0));
    assert_eq!(observer.position(), Point::ZERO);
}
