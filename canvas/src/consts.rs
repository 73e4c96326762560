//! Shared numeric constants for the canvas crate.

// ── Timer ───────────────────────────────────────────────────────

/// Default interval between motion ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 40;

// ── Physics ─────────────────────────────────────────────────────

/// Default mass of the scrolled content.
pub const DEFAULT_MASS: f64 = 10.0;

/// Default drag coefficient; fraction of velocity removed as opposing force.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.05;

/// Default multiplier applied to a position that fell below the lower bound.
pub const DEFAULT_SPRING_COEFFICIENT: f64 = 0.8;

/// Share of the overshoot past the upper bound kept on each tick.
pub const DEFAULT_OVERSHOOT_RETENTION: f64 = 0.9;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest committed zoom factor accepted.
pub const DEFAULT_MIN_ZOOM: f64 = 0.2;

/// Largest committed zoom factor accepted.
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;

/// Step used by `zoom_in`; `zoom_out` uses its reciprocal.
pub const ZOOM_STEP: f64 = std::f64::consts::SQRT_2;

/// Zoom factor of an unzoomed document.
pub const IDENTITY_ZOOM: f64 = 1.0;
