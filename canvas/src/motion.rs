//! Inertial motion engine: momentum scrolling with edge resistance.
//!
//! DESIGN
//! ======
//! Fixed-timestep, semi-implicit integration. Drag moves accumulate a force
//! between ticks; each tick drains it, moves the position by the velocity
//! from *before* the tick, applies edge resistance, and only then updates the
//! velocity.
//!
//! Edge resistance is asymmetric. Below the lower bound the position is
//! multiplied by the spring coefficient (so it decays toward the origin, not
//! toward `min`). Above the upper bound only a fixed share of the overshoot
//! past `max` is kept.
//!
//! The engine never stops itself; whoever owns the timer decides when to
//! tick. [`MotionEngine::is_at_rest`] supports an optional idle stop.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::bounds::BoundsWindow;
use crate::config::MotionConfig;
use crate::geometry::Point;

/// Result of a single integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Position to commit as the new document offset.
    pub offset: Point,
    /// Acceleration computed from the drained force.
    pub acceleration: Point,
    /// Velocity after the step.
    pub velocity: Point,
}

#[derive(Debug, Clone)]
pub struct MotionEngine {
    config: MotionConfig,
    time_step: f64,
    velocity: Point,
    applied_force: Point,
    dragging: bool,
}

impl MotionEngine {
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            time_step: config.time_step(),
            velocity: Point::ZERO,
            applied_force: Point::ZERO,
            dragging: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[must_use]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Force accumulated since the last tick.
    #[must_use]
    pub fn applied_force(&self) -> Point {
        self.applied_force
    }

    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A new manual drag kills any momentum.
    pub fn on_drag_start(&mut self) {
        self.velocity = Point::ZERO;
        self.dragging = true;
    }

    /// Accumulate the pointer movement between `prev` and `cur` as force.
    ///
    /// Moving the finger right pushes the document offset left, hence
    /// `prev - cur`.
    pub fn on_drag_move(&mut self, prev: Point, cur: Point) -> Point {
        let delta = prev - cur;
        self.applied_force += delta;
        delta
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    /// Advance the simulation by one step from `offset`.
    pub fn tick(&mut self, offset: Point, bounds: &BoundsWindow) -> TickOutcome {
        let net_force = self.applied_force - self.config.drag_coefficient * self.velocity;
        self.applied_force = Point::ZERO;

        let acceleration = net_force / self.config.mass;

        let mut position = offset + self.velocity;
        position.x = self.resist(position.x, bounds.min_x, bounds.max_x);
        position.y = self.resist(position.y, bounds.min_y, bounds.max_y);

        self.velocity += acceleration * self.time_step;

        TickOutcome { offset: position, acceleration, velocity: self.velocity }
    }

    /// Whether the optional idle stop may pause the timer at `offset`.
    ///
    /// Always `false` unless `rest_epsilon` is configured. An axis that
    /// cannot scroll places no constraint on the offset: edge resistance only
    /// approaches its pinned position asymptotically.
    #[must_use]
    pub fn is_at_rest(&self, offset: Point, bounds: &BoundsWindow) -> bool {
        let Some(epsilon) = self.config.rest_epsilon else {
            return false;
        };
        let inside_x = !bounds.is_scrollable_x() || (bounds.min_x..=bounds.max_x).contains(&offset.x);
        let inside_y = !bounds.is_scrollable_y() || (bounds.min_y..=bounds.max_y).contains(&offset.y);
        self.velocity.max_abs() < epsilon && self.applied_force.max_abs() < epsilon && inside_x && inside_y
    }

    fn resist(&self, v: f64, min: f64, max: f64) -> f64 {
        let mut v = v;
        if v < min {
            v *= self.config.spring_coefficient;
        }
        if v > max {
            v = max + (v - max) * self.config.overshoot_retention;
        }
        v
    }
}
