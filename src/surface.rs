//! Headless collaborators for the host process.
//!
//! There is no window here, so the surface and the scrollbar observer only
//! keep the state a real one would and log what they would draw.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use canvas::bounds::BoundsWindow;
use canvas::config::ZoomLimits;
use canvas::geometry::{Point, Rect, Size};
use canvas::surface::{OffsetObserver, Surface};
use tracing::{debug, trace};

/// Surface that logs render requests instead of drawing.
#[derive(Debug)]
pub struct TracingSurface {
    view_rect: Rect,
    zoom: f64,
    visible: bool,
    preview: Option<Rect>,
    limits: Option<ZoomLimits>,
}

impl TracingSurface {
    #[must_use]
    pub fn new(limits: Option<ZoomLimits>) -> Self {
        Self { view_rect: Rect::default(), zoom: 1.0, visible: true, preview: None, limits }
    }

    #[cfg(test)]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn preview(&self) -> Option<Rect> {
        self.preview
    }
}

impl Surface for TracingSurface {
    fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    fn render(&mut self, document_rect: Rect) {
        trace!(
            x = document_rect.x,
            y = document_rect.y,
            width = document_rect.width,
            height = document_rect.height,
            "render"
        );
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        debug!(visible, "surface visibility");
    }

    fn view_to_document(&self, rect: Rect) -> Rect {
        Rect::new(rect.x / self.zoom, rect.y / self.zoom, rect.width / self.zoom, rect.height / self.zoom)
    }

    fn capture_preview(&mut self, view_rect: Rect) {
        self.preview = Some(view_rect);
    }

    fn set_preview_transform(&mut self, scale: f64, pivot: Point) {
        trace!(scale, px = pivot.x, py = pivot.y, "preview transform");
    }

    fn hide_preview(&mut self) {
        self.preview = None;
    }

    fn zoom_limits(&self) -> Option<ZoomLimits> {
        self.limits
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }
}

/// Scrollbar model: thumb position as a fraction of the pan range per axis.
#[derive(Debug, Default)]
pub struct ScrollbarObserver {
    bounds: BoundsWindow,
    offset: Point,
    position: Point,
}

impl ScrollbarObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Thumb position in `[0, 1]` per axis; zero on an axis that cannot scroll.
    #[cfg(test)]
    pub fn position(&self) -> Point {
        self.position
    }

    fn fraction(offset: f64, min: f64, max: f64) -> f64 {
        if max <= min { 0.0 } else { ((offset - min) / (max - min)).clamp(0.0, 1.0) }
    }

    fn update(&mut self) {
        let b = &self.bounds;
        self.position = Point::new(
            Self::fraction(self.offset.x, b.min_x, b.max_x),
            Self::fraction(self.offset.y, b.min_y, b.max_y),
        );
        trace!(x = self.position.x, y = self.position.y, "scrollbar moved");
    }
}

impl OffsetObserver for ScrollbarObserver {
    fn on_offset_changed(&mut self, offset: Point) {
        self.offset = offset;
        self.update();
    }

    fn on_document_size_changed(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "scrollbar document size");
    }

    fn on_bounds_changed(&mut self, bounds: BoundsWindow) {
        self.bounds = bounds;
        self.update();
    }

    fn on_zoom_by(&mut self, factor: f64) {
        debug!(factor, "scrollbar rescaled");
    }

    fn on_surface_attached(&mut self) {
        debug!("scrollbar shown");
    }

    fn on_surface_removed(&mut self) {
        debug!("scrollbar hidden");
    }
}
