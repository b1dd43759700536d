//! # RoomKit Events Core
//!
//! Event registries for the room kit.
//! Provides the typed engine-event channel, the string-keyed UI-event
//! channel bridged onto a shared notification bus, and the process-wide
//! event center that owns both.

pub mod config;
pub mod error;
pub mod event_bus;
pub mod types;

pub use config::EventCenterConfig;

pub use error::{EventCenterError, Result};

// Re-export event bus for convenience
pub use event_bus::{
    event_center, init_event_center, notification_bus, ui_events, EngineEventRegistry,
    EngineEventResponder, InProcessNotificationBus, Notification, NotificationAdapter,
    NotificationBus, RoomEngineEvent, RoomEventCenter, SubscriptionId, UiEventRegistry,
    UiEventResponder,
};

// Re-export type aliases for convenience
pub use types::{EngineResponderRef, EventParams, NotificationRef, SnapshotList, UiResponderRef};
