//! Host-level errors.
//!
//! The controller itself never fails; everything here happens at the edges
//! of the process: loading configuration, decoding input lines, talking to
//! the controller task.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use canvas::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("malformed event: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("controller task is gone")]
    ChannelClosed,
}

impl HostError {
    /// Stable machine-readable code, used as a log field.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG",
            Self::Parse(_) => "E_PARSE",
            Self::Io(_) => "E_IO",
            Self::ChannelClosed => "E_CHANNEL_CLOSED",
        }
    }
}
