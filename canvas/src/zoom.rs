//! Pinch-to-zoom gesture state machine and anchored zoom math.
//!
//! A gesture lives from `start` to `finish`. While active it tracks a
//! gesture-relative scale (1.0 at start) and a pivot. The scale is bounded in
//! gesture space so that the committed zoom it will produce stays within the
//! global limits:
//!
//! - `max_scale = 1 + (global_max - z0)`
//! - `min_scale = global_min / z0`
//!
//! The two bounds are not symmetric. The final commit still goes through
//! `zoom_by`, which applies the real limits.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use serde::Serialize;

use crate::config::ZoomLimits;
use crate::geometry::Point;

/// Live state of an in-progress pinch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveGesture {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Gesture-relative scale; the preview is drawn at this scale.
    pub scale: f64,
    /// Preview transform origin; follows the gesture center.
    pub pivot: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GesturePhase {
    #[default]
    Idle,
    Active(ActiveGesture),
}

/// What an update did to the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleUpdate {
    Applied(f64),
    /// The move would have left `[min_scale, max_scale]`; scale is unchanged.
    Rejected(f64),
    /// No gesture is active.
    Ignored,
}

/// The zoom configuration bound to the attached surface.
///
/// Replaced wholesale whenever a new surface is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub limits: ZoomLimits,
}

#[derive(Debug, Clone, Default)]
pub struct ZoomGesture {
    phase: GesturePhase,
}

impl ZoomGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GesturePhase::Active(_))
    }

    /// Current gesture-relative scale, if active.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        match self.phase {
            GesturePhase::Active(g) => Some(g.scale),
            GesturePhase::Idle => None,
        }
    }

    /// Enter the active phase from committed zoom `z0`.
    ///
    /// Restarting while already active discards the previous gesture.
    pub fn start(&mut self, committed_zoom: f64, limits: ZoomLimits, center: Point) -> ActiveGesture {
        let (min_scale, max_scale) = gesture_scale_range(committed_zoom, limits);
        let gesture = ActiveGesture { min_scale, max_scale, scale: 1.0, pivot: center };
        self.phase = GesturePhase::Active(gesture);
        gesture
    }

    /// Apply the scale delta `scale_factor - last_scale_factor`.
    ///
    /// The pivot always follows `center`, even when the scale move is rejected.
    pub fn update(&mut self, center: Point, scale_factor: f64, last_scale_factor: f64) -> ScaleUpdate {
        let GesturePhase::Active(gesture) = &mut self.phase else {
            return ScaleUpdate::Ignored;
        };
        gesture.pivot = center;

        let current = gesture.scale;
        let candidate = current + (scale_factor - last_scale_factor);
        if candidate > current && candidate > gesture.max_scale {
            return ScaleUpdate::Rejected(current);
        }
        if candidate < current && candidate < gesture.min_scale {
            return ScaleUpdate::Rejected(current);
        }
        gesture.scale = candidate;
        ScaleUpdate::Applied(candidate)
    }

    /// Leave the active phase, returning the gesture as it ended.
    pub fn finish(&mut self) -> Option<ActiveGesture> {
        match std::mem::take(&mut self.phase) {
            GesturePhase::Active(g) => Some(g),
            GesturePhase::Idle => None,
        }
    }
}

/// Gesture-space scale bounds for a gesture starting at committed zoom `z0`.
#[must_use]
pub fn gesture_scale_range(committed_zoom: f64, limits: ZoomLimits) -> (f64, f64) {
    let max_scale = 1.0 + (limits.max - committed_zoom);
    let min_scale = limits.min / committed_zoom;
    (min_scale, max_scale)
}

/// Offset that keeps the view point under `center` fixed when zooming by `factor`.
///
/// `new = -(factor * -old + (1 - factor) * center)`
#[must_use]
pub fn anchored_offset(old_offset: Point, center: Point, factor: f64) -> Point {
    let position = factor * -old_offset + (1.0 - factor) * center;
    -position
}
