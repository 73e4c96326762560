//! Tunable constants of the controller.
//!
//! Everything has a sensible default, so hosts usually start from
//! `ControllerConfig::default()` and override a field or two. The struct is
//! also deserialisable with missing fields falling back to those defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_MASS, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_OVERSHOOT_RETENTION,
    DEFAULT_SPRING_COEFFICIENT, DEFAULT_TICK_INTERVAL_MS,
};

/// Global zoom limits. A committed zoom outside `[min, max]` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_ZOOM, max: DEFAULT_MAX_ZOOM }
    }
}

impl ZoomLimits {
    /// Whether `zoom` is an acceptable committed zoom (inclusive).
    #[must_use]
    pub fn accepts(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }
}

/// Physical constants of the motion engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub mass: f64,
    pub drag_coefficient: f64,
    pub spring_coefficient: f64,
    /// Share of the distance past the upper bound kept per tick.
    pub overshoot_retention: f64,
    pub tick_interval_ms: u64,
    /// When set, the timer stops once force and velocity are both below this
    /// value and the offset is inside the bounds.
    pub rest_epsilon: Option<f64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            spring_coefficient: DEFAULT_SPRING_COEFFICIENT,
            overshoot_retention: DEFAULT_OVERSHOOT_RETENTION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            rest_epsilon: None,
        }
    }
}

impl MotionConfig {
    /// Simulation steps per second: `1000 / tick_interval_ms`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_step(&self) -> f64 {
        1000.0 / self.tick_interval_ms as f64
    }
}

/// Everything the host can tune about a [`crate::controller::CanvasController`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Fraction of the viewport that may be scrolled past the document edges.
    pub overscroll: f64,
    /// Extra scrollable margin around the document, in pixels.
    pub margin: f64,
    pub motion: MotionConfig,
    /// Fallback limits used when the attached surface does not provide any.
    pub zoom_limits: ZoomLimits,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("zoom limits must be positive, got [{min}, {max}]")]
    NonPositiveZoom { min: f64, max: f64 },
    #[error("zoom limits are inverted: min {min} > max {max}")]
    InvertedZoomLimits { min: f64, max: f64 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
}

impl ControllerConfig {
    /// Check the invariants the motion engine and zoom math rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("overscroll", self.overscroll),
            ("margin", self.margin),
            ("mass", self.motion.mass),
            ("drag_coefficient", self.motion.drag_coefficient),
            ("spring_coefficient", self.motion.spring_coefficient),
            ("overshoot_retention", self.motion.overshoot_retention),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }
        if self.motion.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.motion.mass));
        }
        if self.motion.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let ZoomLimits { min, max } = self.zoom_limits;
        if min <= 0.0 || max <= 0.0 {
            return Err(ConfigError::NonPositiveZoom { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedZoomLimits { min, max });
        }
        Ok(())
    }
}
