//! Collaborator contracts: the renderable surface and offset observers.
//!
//! The controller never draws anything itself. It tells a [`Surface`] which
//! view rectangle to occupy and which document rectangle to render, and it
//! reports offset, size and zoom changes to any number of
//! [`OffsetObserver`]s (scrollbars, minimaps, remote presence, ...).
//!
//! Both traits require `Send` so a controller can be moved into the task
//! that owns it.

use crate::bounds::BoundsWindow;
use crate::config::ZoomLimits;
use crate::geometry::{Point, Rect, Size};

/// Something that can render document content into the viewport.
pub trait Surface: Send {
    /// Place the live content in the given view rectangle.
    fn set_view_rect(&mut self, rect: Rect);

    /// Render the given document-space rectangle.
    fn render(&mut self, document_rect: Rect);

    /// Show or hide the live content.
    fn set_visible(&mut self, visible: bool);

    /// Map a view-space rectangle to document space using the surface's own
    /// zoom and pan state.
    fn view_to_document(&self, rect: Rect) -> Rect;

    /// Snapshot the current view so a pinch can scale a static image instead
    /// of re-rendering live content.
    fn capture_preview(&mut self, _view_rect: Rect) {}

    /// Draw the preview at `scale` around `pivot` (view coordinates).
    fn set_preview_transform(&mut self, _scale: f64, _pivot: Point) {}

    fn hide_preview(&mut self) {}

    /// Zoom limits specific to this surface; `None` uses the controller's.
    fn zoom_limits(&self) -> Option<ZoomLimits> {
        None
    }

    /// The committed zoom changed.
    fn set_zoom(&mut self, _zoom: f64) {}
}

/// Receives viewport change notifications.
pub trait OffsetObserver: Send {
    fn on_offset_changed(&mut self, offset: Point);

    fn on_document_size_changed(&mut self, _size: Size) {}

    fn on_viewport_resized(&mut self, _size: Size) {}

    /// The pan range changed because a size, the margin or the overscroll
    /// changed. Not sent for offset-only changes.
    fn on_bounds_changed(&mut self, _bounds: BoundsWindow) {}

    /// A zoom by `factor` was committed.
    fn on_zoom_by(&mut self, _factor: f64) {}

    fn on_surface_attached(&mut self) {}

    fn on_surface_removed(&mut self) {}
}
