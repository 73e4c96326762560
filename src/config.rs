//! Host configuration loaded from environment variables.
//!
//! Every knob has a default; a missing or unparseable variable silently
//! falls back to it. The assembled controller config is validated before
//! anything is spawned, so a nonsensical value (zero tick interval, inverted
//! zoom limits) stops the process at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::config::{ConfigError, ControllerConfig, MotionConfig, ZoomLimits};
use canvas::consts::{
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_MASS, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_SPRING_COEFFICIENT,
    DEFAULT_TICK_INTERVAL_MS,
};
use canvas::geometry::Size;

const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
const DEFAULT_DOCUMENT_WIDTH: f64 = 2000.0;
const DEFAULT_DOCUMENT_HEIGHT: f64 = 1500.0;
const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 256;

/// Everything `main` needs to stand up a controller task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostConfig {
    pub controller: ControllerConfig,
    /// Initial viewport size.
    pub viewport: Size,
    /// Initial document size.
    pub document: Size,
    /// Bounded channel capacity between the input reader and the controller task.
    pub event_queue_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            viewport: Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            document: Size::new(DEFAULT_DOCUMENT_WIDTH, DEFAULT_DOCUMENT_HEIGHT),
            event_queue_capacity: DEFAULT_EVENT_QUEUE_CAPACITY,
        }
    }
}

impl HostConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let motion = MotionConfig {
            mass: env_parse("CANVAS_MASS", DEFAULT_MASS),
            drag_coefficient: env_parse("CANVAS_DRAG_COEFFICIENT", DEFAULT_DRAG_COEFFICIENT),
            spring_coefficient: env_parse("CANVAS_SPRING_COEFFICIENT", DEFAULT_SPRING_COEFFICIENT),
            tick_interval_ms: env_parse("CANVAS_TICK_INTERVAL_MS", DEFAULT_TICK_INTERVAL_MS),
            rest_epsilon: env_parse_opt("CANVAS_REST_EPSILON"),
            ..MotionConfig::default()
        };
        let controller = ControllerConfig {
            overscroll: env_parse("CANVAS_OVERSCROLL", 0.0),
            margin: env_parse("CANVAS_MARGIN", 0.0),
            motion,
            zoom_limits: ZoomLimits {
                min: env_parse("CANVAS_MIN_ZOOM", DEFAULT_MIN_ZOOM),
                max: env_parse("CANVAS_MAX_ZOOM", DEFAULT_MAX_ZOOM),
            },
        };
        Self {
            controller,
            viewport: Size::new(
                env_parse("CANVAS_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH),
                env_parse("CANVAS_VIEWPORT_HEIGHT", DEFAULT_VIEWPORT_HEIGHT),
            ),
            document: Size::new(
                env_parse("CANVAS_DOCUMENT_WIDTH", DEFAULT_DOCUMENT_WIDTH),
                env_parse("CANVAS_DOCUMENT_HEIGHT", DEFAULT_DOCUMENT_HEIGHT),
            ),
            event_queue_capacity: env_parse("CANVAS_EVENT_QUEUE_CAPACITY", DEFAULT_EVENT_QUEUE_CAPACITY).max(1),
        }
    }

    /// # Errors
    ///
    /// Returns the first constraint the controller config violates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_parse_opt(key).unwrap_or(default)
}

/// Like [`env_parse`] for knobs whose default is "off".
pub(crate) fn env_parse_opt<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}
