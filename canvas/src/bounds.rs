//! Valid pan range of the viewport over the document.
//!
//! The window is a pure function of viewport size, document size, margin and
//! overscroll factor. It is cached by the controller and recomputed whenever
//! one of those inputs (or the offset) changes.
//!
//! When the document is smaller than the viewport on an axis, `min > max` on
//! that axis. Nothing here treats that as an error: the axis is simply not
//! scrollable and [`BoundsWindow::clamp`] pins it to the middle.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::Serialize;

use crate::geometry::{Point, Size};

/// Inclusive range of document offsets the viewport may rest at.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundsWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundsWindow {
    /// Derive the window from the viewport inputs.
    ///
    /// Per axis: `min = -(size * overscroll) - margin` and
    /// `max = document - size + (size * overscroll) + margin`.
    #[must_use]
    pub fn recompute(viewport: Size, document: Size, margin: f64, overscroll: f64) -> Self {
        let (min_x, max_x) = axis_range(viewport.width, document.width, margin, overscroll);
        let (min_y, max_y) = axis_range(viewport.height, document.height, margin, overscroll);
        Self { min_x, min_y, max_x, max_y }
    }

    #[must_use]
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    #[must_use]
    pub fn is_scrollable_x(&self) -> bool {
        self.min_x < self.max_x
    }

    #[must_use]
    pub fn is_scrollable_y(&self) -> bool {
        self.min_y < self.max_y
    }

    /// Whether `p` lies inside the window (inclusive). A degenerate axis only
    /// contains its pinned midpoint.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.clamp(p) == p
    }

    /// Clamp `p` into the window. A degenerate axis pins to the midpoint of
    /// its two bounds.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(clamp_axis(p.x, self.min_x, self.max_x), clamp_axis(p.y, self.min_y, self.max_y))
    }
}

fn axis_range(viewport: f64, document: f64, margin: f64, overscroll: f64) -> (f64, f64) {
    let slack = viewport * overscroll;
    let min = -slack - margin;
    let max = (document + slack) - viewport + margin;
    (min, max)
}

fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return (min + max) * 0.5;
    }
    v.clamp(min, max)
}
