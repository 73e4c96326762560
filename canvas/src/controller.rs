//! The canvas controller: owns viewport, motion and zoom state and keeps the
//! collaborators in sync.
//!
//! DESIGN
//! ======
//! Everything is synchronous and single-threaded. The host delivers input as
//! [`ControllerEvent`]s through [`CanvasController::handle`] and calls
//! [`CanvasController::tick`] from a repeating timer while
//! [`CanvasController::is_ticking`] is true. Every entry point returns the
//! [`Action`]s the host may care about (offset/zoom changes and timer
//! transitions); surface and observers are driven directly.
//!
//! Bounds are recomputed on every offset commit and every viewport input
//! change, except that a resize during an active drag only marks them stale.
//! The next drag move refreshes them, so they can lag by one frame.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use crate::bounds::BoundsWindow;
use crate::config::{ConfigError, ControllerConfig, ZoomLimits};
use crate::consts::{IDENTITY_ZOOM, ZOOM_STEP};
use crate::geometry::{Point, Rect, Size};
use crate::input::{ControllerEvent, Pinch};
use crate::motion::MotionEngine;
use crate::surface::{OffsetObserver, Surface};
use crate::zoom::{GesturePhase, ScaleUpdate, ZoomConfig, ZoomGesture, anchored_offset};

/// Changes reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    OffsetChanged(Point),
    ZoomChanged(f64),
    TimerStarted,
    TimerStopped,
}

/// Position and extent of the viewport over the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewportState {
    /// Current scroll position in document coordinates.
    pub offset: Point,
    /// Viewport size in pixels.
    pub size: Size,
    pub document_size: Size,
    pub margin: f64,
    pub overscroll: f64,
}

/// Read-only view of the controller for logging and remote inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub viewport: ViewportState,
    pub bounds: BoundsWindow,
    pub zoom: f64,
    pub velocity: Point,
    pub dragging: bool,
    pub ticking: bool,
    pub gesture: GesturePhase,
}

pub struct CanvasController {
    config: ControllerConfig,
    viewport: ViewportState,
    bounds: BoundsWindow,
    bounds_stale: bool,
    motion: MotionEngine,
    gesture: ZoomGesture,
    zoom: f64,
    zoom_config: Option<ZoomConfig>,
    surface: Option<Box<dyn Surface>>,
    observers: Vec<Box<dyn OffsetObserver>>,
    ticking: bool,
    /// Cleared while a pinch is active: drags are ignored and offset commits
    /// skip re-rendering the live surface.
    live_updates: bool,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl CanvasController {
    /// Build a controller from a config already known to be valid.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        let viewport = ViewportState { margin: config.margin, overscroll: config.overscroll, ..Default::default() };
        Self {
            config,
            viewport,
            bounds: BoundsWindow::recompute(viewport.size, viewport.document_size, viewport.margin, viewport.overscroll),
            bounds_stale: false,
            motion: MotionEngine::new(config.motion),
            gesture: ZoomGesture::new(),
            zoom: IDENTITY_ZOOM,
            zoom_config: None,
            surface: None,
            observers: Vec::new(),
            ticking: false,
            live_updates: true,
        }
    }

    /// Validate `config` and build a controller.
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn try_new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // --- Collaborators ---

    pub fn add_observer(&mut self, observer: Box<dyn OffsetObserver>) {
        self.observers.push(observer);
    }

    /// Attach `surface`, replacing any current one, and start the timer.
    ///
    /// The zoom configuration is rebuilt from the new surface. The offset is
    /// reset to the top-left of the bounds window.
    pub fn attach_surface(&mut self, mut surface: Box<dyn Surface>) -> Vec<Action> {
        let mut out = Vec::new();
        if let Some(mut old) = self.surface.take() {
            debug!("replacing attached surface");
            for o in &mut self.observers {
                o.on_surface_removed();
            }
            old.set_visible(false);
        }

        let limits = surface.zoom_limits().unwrap_or(self.config.zoom_limits);
        self.zoom_config = Some(ZoomConfig { limits });
        surface.set_visible(true);
        self.surface = Some(surface);
        debug!(min_zoom = limits.min, max_zoom = limits.max, "surface attached");

        self.update_canvas_size();
        self.refresh_bounds();
        self.commit_offset(self.bounds.min(), &mut out);

        for o in &mut self.observers {
            o.on_surface_attached();
        }
        self.start_timer(&mut out);
        out
    }

    /// Detach and return the current surface.
    ///
    /// Calling this with nothing attached is a caller bug: it asserts in debug
    /// builds and does nothing in release builds.
    pub fn detach_surface(&mut self) -> Option<Box<dyn Surface>> {
        debug_assert!(self.surface.is_some(), "detach_surface called with no surface attached");
        let mut surface = self.surface.take()?;
        for o in &mut self.observers {
            o.on_surface_removed();
        }
        surface.set_visible(false);
        self.zoom_config = None;
        debug!("surface detached");
        Some(surface)
    }

    // --- Event dispatch ---

    /// Dispatch one input event to its handler.
    pub fn handle(&mut self, event: ControllerEvent) -> Vec<Action> {
        trace!(event = event.name(), "handling event");
        match event {
            ControllerEvent::DragStart => self.drag_start(),
            ControllerEvent::DragMove { prev, cur } => self.drag_move(prev, cur),
            ControllerEvent::DragEnd => self.drag_end(),
            ControllerEvent::PinchStarted(pinch) => self.pinch_started(pinch),
            ControllerEvent::PinchUpdated(pinch) => self.pinch_updated(pinch),
            ControllerEvent::PinchFinished { center } => self.pinch_finished(center),
            ControllerEvent::ZoomIn { center } => self.zoom_in(center),
            ControllerEvent::ZoomOut { center } => self.zoom_out(center),
            ControllerEvent::ZoomBy { center, factor } => self.zoom_by(center, factor),
            ControllerEvent::ResetZoom => self.reset_zoom(),
            ControllerEvent::Resize { size } => self.resize(size),
            ControllerEvent::DocumentResized { size } => self.set_document_size(size),
            ControllerEvent::SetMargin { margin } => self.set_margin(margin),
            ControllerEvent::SetOverscroll { factor } => self.set_overscroll(factor),
            ControllerEvent::SetOffset { offset } => self.set_offset(offset),
            ControllerEvent::ScrollBy { dx, dy } => self.scroll_by(dx, dy),
        }
    }

    // --- Drag ---

    pub fn drag_start(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        self.motion.on_drag_start();
        self.stop_timer(&mut out);
        out
    }

    /// Scroll along with the finger and feed the movement to the motion engine.
    pub fn drag_move(&mut self, prev: Point, cur: Point) -> Vec<Action> {
        let mut out = Vec::new();
        if !self.live_updates {
            return out;
        }
        if self.bounds_stale {
            self.refresh_bounds();
        }
        let delta = self.motion.on_drag_move(prev, cur);
        self.commit_offset(self.viewport.offset + delta, &mut out);
        out
    }

    pub fn drag_end(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        self.motion.on_drag_end();
        self.start_timer(&mut out);
        out
    }

    // --- Timer ---

    /// Run one motion step. Does nothing while the timer is paused.
    pub fn tick(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        if !self.ticking {
            return out;
        }
        let step = self.motion.tick(self.viewport.offset, &self.bounds);
        trace!(x = step.offset.x, y = step.offset.y, vx = step.velocity.x, vy = step.velocity.y, "motion tick");
        self.commit_offset(step.offset, &mut out);

        if self.motion.is_at_rest(self.viewport.offset, &self.bounds) {
            debug!("motion at rest; pausing timer");
            self.stop_timer(&mut out);
        }
        out
    }

    // --- Pinch ---

    pub fn pinch_started(&mut self, pinch: Pinch) -> Vec<Action> {
        let Some(limits) = self.zoom_limits_for_gesture() else {
            debug!("pinch ignored: no surface attached");
            return Vec::new();
        };
        self.live_updates = false;
        let gesture = self.gesture.start(self.zoom, limits, pinch.center);
        debug!(
            zoom = self.zoom,
            min_scale = gesture.min_scale,
            max_scale = gesture.max_scale,
            "pinch started"
        );

        let view_rect = Rect::from_size(self.viewport.size);
        if let Some(surface) = self.surface.as_mut() {
            surface.capture_preview(view_rect);
            surface.set_preview_transform(gesture.scale, gesture.pivot);
            surface.set_visible(false);
        }
        // The start event carries a scale reading of its own.
        self.pinch_updated(pinch)
    }

    pub fn pinch_updated(&mut self, pinch: Pinch) -> Vec<Action> {
        let scale = match self.gesture.update(pinch.center, pinch.scale_factor, pinch.last_scale_factor) {
            ScaleUpdate::Applied(scale) => scale,
            ScaleUpdate::Rejected(scale) => {
                trace!(scale, requested = pinch.scale_factor, "pinch scale out of range");
                scale
            }
            ScaleUpdate::Ignored => return Vec::new(),
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.set_preview_transform(scale, pinch.center);
        }
        Vec::new()
    }

    /// End the gesture and commit its scale as a zoom around `center`.
    pub fn pinch_finished(&mut self, center: Point) -> Vec<Action> {
        let Some(gesture) = self.gesture.finish() else {
            return Vec::new();
        };
        debug!(scale = gesture.scale, "pinch finished");
        if let Some(surface) = self.surface.as_mut() {
            surface.hide_preview();
            surface.set_visible(true);
        }
        let out = self.zoom_by(center, gesture.scale);
        self.live_updates = true;
        out
    }

    // --- Zoom ---

    /// Zoom by `factor` keeping the view point `center` fixed.
    ///
    /// Requests that would leave the zoom limits are dropped silently.
    pub fn zoom_by(&mut self, center: Point, factor: f64) -> Vec<Action> {
        let mut out = Vec::new();
        let target = self.zoom * factor;
        let limits = self.zoom_limits();
        if !limits.accepts(target) {
            debug!(zoom = self.zoom, factor, min = limits.min, max = limits.max, "zoom request rejected");
            return out;
        }

        for o in &mut self.observers {
            o.on_zoom_by(factor);
        }
        self.zoom = target;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_zoom(target);
        }
        out.push(Action::ZoomChanged(target));

        let offset = anchored_offset(self.viewport.offset, center, factor);
        self.refresh_bounds();
        self.update_canvas_size();
        self.commit_offset(offset, &mut out);
        self.start_timer(&mut out);
        out
    }

    /// One zoom step in, around `center` or the viewport center.
    pub fn zoom_in(&mut self, center: Option<Point>) -> Vec<Action> {
        let center = center.unwrap_or_else(|| self.viewport.size.center());
        self.zoom_by(center, ZOOM_STEP)
    }

    /// One zoom step out, around `center` or the viewport center.
    pub fn zoom_out(&mut self, center: Option<Point>) -> Vec<Action> {
        let center = center.unwrap_or_else(|| self.viewport.size.center());
        self.zoom_by(center, 1.0 / ZOOM_STEP)
    }

    /// Return to 1:1 zoom without moving the offset.
    pub fn reset_zoom(&mut self) -> Vec<Action> {
        self.zoom = IDENTITY_ZOOM;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_zoom(IDENTITY_ZOOM);
        }
        self.refresh_bounds();
        self.update_canvas_size();
        vec![Action::ZoomChanged(IDENTITY_ZOOM)]
    }

    // --- Viewport inputs ---

    pub fn resize(&mut self, size: Size) -> Vec<Action> {
        self.viewport.size = size;
        for o in &mut self.observers {
            o.on_viewport_resized(size);
        }
        if self.motion.is_dragging() {
            self.bounds_stale = true;
        } else {
            self.bounds_inputs_changed();
        }
        self.update_canvas_size();
        Vec::new()
    }

    pub fn set_document_size(&mut self, size: Size) -> Vec<Action> {
        self.viewport.document_size = size;
        for o in &mut self.observers {
            o.on_document_size_changed(size);
        }
        self.bounds_inputs_changed();
        Vec::new()
    }

    pub fn set_margin(&mut self, margin: f64) -> Vec<Action> {
        self.viewport.margin = margin;
        self.bounds_inputs_changed();
        Vec::new()
    }

    pub fn set_overscroll(&mut self, factor: f64) -> Vec<Action> {
        self.viewport.overscroll = factor;
        self.bounds_inputs_changed();
        Vec::new()
    }

    /// Jump to `offset`. Elastic resistance applies on the following ticks.
    pub fn set_offset(&mut self, offset: Point) -> Vec<Action> {
        let mut out = Vec::new();
        self.commit_offset(offset, &mut out);
        out
    }

    /// Move the offset by a delta. Ignored while a pinch is active.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        let mut out = Vec::new();
        if !self.live_updates {
            return out;
        }
        self.commit_offset(self.viewport.offset + Point::new(dx, dy), &mut out);
        out
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> Point {
        self.viewport.offset
    }

    #[must_use]
    pub fn bounds(&self) -> BoundsWindow {
        self.bounds
    }

    /// The committed zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport.size
    }

    #[must_use]
    pub fn document_size(&self) -> Size {
        self.viewport.document_size
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.viewport.margin
    }

    #[must_use]
    pub fn overscroll(&self) -> f64 {
        self.viewport.overscroll
    }

    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.viewport.size.width
    }

    #[must_use]
    pub fn visible_height(&self) -> f64 {
        self.viewport.size.height
    }

    #[must_use]
    pub fn velocity(&self) -> Point {
        self.motion.velocity()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.motion.is_dragging()
    }

    /// Whether the host's timer should be calling [`Self::tick`].
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.motion.tick_interval_ms)
    }

    #[must_use]
    pub fn gesture(&self) -> GesturePhase {
        self.gesture.phase()
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Limits in force: the attached surface's, else the configured ones.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_config.map_or(self.config.zoom_limits, |c| c.limits)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            viewport: self.viewport,
            bounds: self.bounds,
            zoom: self.zoom,
            velocity: self.motion.velocity(),
            dragging: self.motion.is_dragging(),
            ticking: self.ticking,
            gesture: self.gesture.phase(),
        }
    }

    // --- Internals ---

    fn zoom_limits_for_gesture(&self) -> Option<ZoomLimits> {
        if self.surface.is_none() {
            return None;
        }
        self.zoom_config.map(|c| c.limits)
    }

    /// Recompute the bounds window. If a size, margin or overscroll change
    /// is still pending, observers hear about the new window.
    fn refresh_bounds(&mut self) {
        let v = &self.viewport;
        self.bounds = BoundsWindow::recompute(v.size, v.document_size, v.margin, v.overscroll);
        if self.bounds_stale {
            self.bounds_stale = false;
            let bounds = self.bounds;
            for o in &mut self.observers {
                o.on_bounds_changed(bounds);
            }
        }
    }

    fn bounds_inputs_changed(&mut self) {
        self.bounds_stale = true;
        self.refresh_bounds();
    }

    /// Store `offset`, notify observers, refresh bounds and re-render.
    fn commit_offset(&mut self, offset: Point, out: &mut Vec<Action>) {
        self.viewport.offset = offset;
        for o in &mut self.observers {
            o.on_offset_changed(offset);
        }
        self.refresh_bounds();
        if self.live_updates {
            self.update_canvas_size();
        }
        out.push(Action::OffsetChanged(offset));
    }

    /// Size the surface to the viewport and render what it now covers.
    fn update_canvas_size(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let view_rect = Rect::from_size(self.viewport.size);
        surface.set_view_rect(view_rect);
        let document_rect = surface.view_to_document(view_rect);
        surface.render(document_rect);
    }

    fn start_timer(&mut self, out: &mut Vec<Action>) {
        if !self.ticking {
            self.ticking = true;
            out.push(Action::TimerStarted);
        }
    }

    fn stop_timer(&mut self, out: &mut Vec<Action>) {
        if self.ticking {
            self.ticking = false;
            out.push(Action::TimerStopped);
        }
    }
}
