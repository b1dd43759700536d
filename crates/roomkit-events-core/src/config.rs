//! Event center configuration
//!
//! Read from TOML, with every field optional:
//!
//! ```toml
//! outer_topic = "RoomKitEvent"
//! dedupe_subscriptions = false
//! trace_deliveries = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EventCenterError, Result};
use crate::event_bus::ui_events::ROOM_KIT_EVENT;

/// Configuration for the event center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCenterConfig {
    /// Outer key under which UI events are registered on the notification bus.
    pub outer_topic: String,
    /// Skip subscriptions of a responder already registered for the same event.
    pub dedupe_subscriptions: bool,
    /// Log every engine event delivery at `debug` level.
    pub trace_deliveries: bool,
}

impl Default for EventCenterConfig {
    fn default() -> Self {
        Self {
            outer_topic: ROOM_KIT_EVENT.to_string(),
            dedupe_subscriptions: false,
            trace_deliveries: true,
        }
    }
}

impl EventCenterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.outer_topic.trim().is_empty() {
            return Err(EventCenterError::config("outer_topic must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EventCenterConfig::default();
        assert_eq!(config.outer_topic, "RoomKitEvent");
        assert!(!config.dedupe_subscriptions);
        assert!(config.trace_deliveries);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EventCenterConfig::from_toml_str("dedupe_subscriptions = true")
            .expect("valid config");
        assert!(config.dedupe_subscriptions);
        assert_eq!(config.outer_topic, "RoomKitEvent");
    }

    #[test]
    fn test_empty_topic_rejected() {
        let err = EventCenterConfig::from_toml_str("outer_topic = \"  \"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(EventCenterConfig::from_toml_str("trace_deliveries = maybe").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "outer_topic = \"MeetingEvent\"").expect("write");
        writeln!(file, "trace_deliveries = false").expect("write");

        let config = EventCenterConfig::load(file.path()).expect("load config");
        assert_eq!(config.outer_topic, "MeetingEvent");
        assert!(!config.trace_deliveries);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EventCenterConfig::load(Path::new("/nonexistent/roomkit.toml")).unwrap_err();
        assert!(matches!(err, EventCenterError::Io(_)));
    }
}
