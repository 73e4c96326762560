//! Input model: every event the controller reacts to, as one tagged union.
//!
//! The host translates whatever its toolkit delivers (pointer, touch and
//! gesture callbacks, resize notifications) into `ControllerEvent`s and hands
//! them to [`crate::controller::CanvasController::handle`], which dispatches
//! each variant to its own handler. Timer ticks are not events; the host
//! calls `tick()` directly from its repeating callback.
//!
//! Events are deserialisable so hosts can feed them over a wire or from a
//! script, e.g. `{"type": "drag_move", "prev": {"x": 0, "y": 0}, "cur": {"x": 4, "y": 1}}`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Snapshot of a pinch gesture as reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pinch {
    /// Center point between the fingers, in view coordinates.
    pub center: Point,
    /// Cumulative scale factor reported for this event.
    pub scale_factor: f64,
    /// Scale factor reported for the previous event.
    pub last_scale_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// A finger went down; momentum stops and the timer pauses.
    DragStart,
    /// The finger moved from `prev` to `cur` (view coordinates).
    DragMove { prev: Point, cur: Point },
    /// The finger lifted; the timer resumes.
    DragEnd,
    PinchStarted(Pinch),
    PinchUpdated(Pinch),
    PinchFinished { center: Point },
    /// Zoom in one step around `center`, or the viewport center when absent.
    ZoomIn {
        #[serde(default)]
        center: Option<Point>,
    },
    ZoomOut {
        #[serde(default)]
        center: Option<Point>,
    },
    /// Programmatic zoom by an arbitrary factor around `center`.
    ZoomBy { center: Point, factor: f64 },
    ResetZoom,
    /// The viewport was resized.
    Resize { size: Size },
    /// The document's content extent changed.
    DocumentResized { size: Size },
    SetMargin { margin: f64 },
    SetOverscroll { factor: f64 },
    /// Jump to an explicit offset.
    SetOffset { offset: Point },
    /// Scroll the offset by a delta.
    ScrollBy { dx: f64, dy: f64 },
}

impl ControllerEvent {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd => "drag_end",
            Self::PinchStarted(_) => "pinch_started",
            Self::PinchUpdated(_) => "pinch_updated",
            Self::PinchFinished { .. } => "pinch_finished",
            Self::ZoomIn { .. } => "zoom_in",
            Self::ZoomOut { .. } => "zoom_out",
            Self::ZoomBy { .. } => "zoom_by",
            Self::ResetZoom => "reset_zoom",
            Self::Resize { .. } => "resize",
            Self::DocumentResized { .. } => "document_resized",
            Self::SetMargin { .. } => "set_margin",
            Self::SetOverscroll { .. } => "set_overscroll",
            Self::SetOffset { .. } => "set_offset",
            Self::ScrollBy { .. } => "scroll_by",
        }
    }
}
