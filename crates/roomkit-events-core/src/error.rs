//! Error handling for the RoomKit event center
//!
//! Subscribe, unsubscribe and publish never return errors: invalid input and
//! unknown subscriptions are silently ignored, and failing handlers are logged
//! and skipped. The types here cover the fallible edges of the crate:
//! - Configuration loading
//! - Process-wide singleton initialization
//! - Handler failures, which are formatted through this type before logging
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for the event center
#[derive(Error, Debug)]
pub enum EventCenterError {
    /// The process-wide event center was already built
    #[error("Event center already initialized")]
    AlreadyInitialized,

    /// A handler panicked while an event was being delivered
    #[error("Handler for {event} panicked: {message}")]
    HandlerPanicked {
        /// The event being delivered.
        event: String,
        /// The panic payload, when it was a string.
        message: String,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {message}")]
    Config {
        /// A message describing the parse failure.
        message: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EventCenterError {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        EventCenterError::Config {
            message: msg.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, EventCenterError::Config { .. } | EventCenterError::Io(_))
    }
}

impl From<toml::de::Error> for EventCenterError {
    fn from(err: toml::de::Error) -> Self {
        EventCenterError::config(err.to_string())
    }
}

/// Result type using EventCenterError
pub type Result<T> = std::result::Result<T, EventCenterError>;
