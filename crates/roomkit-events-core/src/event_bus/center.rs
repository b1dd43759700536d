//! Event center facade and its process-wide instance.

use std::sync::{Arc, OnceLock};

use super::adapter::SubscriptionId;
use super::engine::EngineEventRegistry;
use super::events::RoomEngineEvent;
use super::notification::{notification_bus, NotificationBus};
use super::ui::UiEventRegistry;
use crate::config::EventCenterConfig;
use crate::error::{EventCenterError, Result};
use crate::types::{EngineResponderRef, EventParams, UiResponderRef};

/// Entry point for subscribing to and publishing room events
///
/// Engine events are dispatched in-process. UI events are bridged onto a
/// [`NotificationBus`] under the configured outer topic, so other subsystems
/// sharing the bus can post them as well.
///
/// None of the operations fail: an empty UI event name or an unknown
/// subscription is ignored, and a panicking responder is logged and skipped.
pub struct RoomEventCenter {
    engine: EngineEventRegistry,
    ui: UiEventRegistry,
    config: EventCenterConfig,
}

impl RoomEventCenter {
    /// Create an event center on the process-wide notification bus
    pub fn new(config: EventCenterConfig) -> Self {
        Self::with_bus(notification_bus(), config)
    }

    /// Create an event center on a caller-supplied notification bus
    pub fn with_bus(bus: Arc<dyn NotificationBus>, config: EventCenterConfig) -> Self {
        tracing::debug!(
            "Event center created (outer topic {}, dedupe {})",
            config.outer_topic,
            config.dedupe_subscriptions
        );
        Self {
            engine: EngineEventRegistry::new(
                config.dedupe_subscriptions,
                config.trace_deliveries,
            ),
            ui: UiEventRegistry::new(
                bus,
                config.outer_topic.clone(),
                config.dedupe_subscriptions,
            ),
            config,
        }
    }

    /// Get or initialize the process-wide event center
    pub fn instance() -> &'static RoomEventCenter {
        event_center()
    }

    /// Subscribe `responder` to an engine event
    pub fn subscribe_engine(&self, event: RoomEngineEvent, responder: EngineResponderRef) {
        self.engine.subscribe(event, responder);
    }

    /// Unsubscribe `responder` from an engine event
    pub fn unsubscribe_engine(&self, event: RoomEngineEvent, responder: &EngineResponderRef) {
        self.engine.unsubscribe(event, responder);
    }

    /// Deliver an engine event to its responders on the calling thread
    pub fn notify_engine_event(&self, event: RoomEngineEvent, params: &mut EventParams) {
        self.engine.publish(event, params);
    }

    /// Subscribe `responder` to a UI event
    pub fn subscribe_ui_event(&self, event: &str, responder: UiResponderRef) {
        self.ui.subscribe(event, responder);
    }

    /// Unsubscribe `responder` from a UI event
    pub fn unsubscribe_ui_event(&self, event: &str, responder: &UiResponderRef) {
        self.ui.unsubscribe(event, responder);
    }

    /// Post a UI event on the notification bus
    ///
    /// Delivery is performed entirely by the bus, which reaches every handler
    /// registered under the outer topic and `event`, not only those
    /// subscribed through this event center.
    pub fn notify_ui_event(&self, event: &str, params: &mut EventParams) {
        self.ui.bus().notify(self.ui.outer_topic(), event, params);
    }

    /// Number of responders subscribed to an engine event
    pub fn engine_subscriber_count(&self, event: RoomEngineEvent) -> usize {
        self.engine.subscriber_count(event)
    }

    /// Number of responders subscribed to a UI event through this center
    pub fn ui_subscriber_count(&self, event: &str) -> usize {
        self.ui.subscriber_count(event)
    }

    /// Ids of the UI subscriptions made through this center for `event`
    pub fn ui_subscription_ids(&self, event: &str) -> Vec<SubscriptionId> {
        self.ui.subscription_ids(event)
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventCenterConfig {
        &self.config
    }
}

impl Default for RoomEventCenter {
    fn default() -> Self {
        Self::new(EventCenterConfig::default())
    }
}

impl std::fmt::Debug for RoomEventCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomEventCenter")
            .field("config", &self.config)
            .finish()
    }
}

/// Global event center instance
static EVENT_CENTER: OnceLock<RoomEventCenter> = OnceLock::new();

/// Get or initialize the global event center
///
/// The first caller from any thread builds it with the default
/// configuration; every caller observes the same instance.
pub fn event_center() -> &'static RoomEventCenter {
    EVENT_CENTER.get_or_init(RoomEventCenter::default)
}

/// Initialize the global event center with custom configuration
///
/// Must be called before any call to `event_center()`.
pub fn init_event_center(config: EventCenterConfig) -> Result<()> {
    config.validate()?;
    EVENT_CENTER
        .set(RoomEventCenter::new(config))
        .map_err(|_| EventCenterError::AlreadyInitialized)
}
