//! Responder interfaces
//!
//! Implement these traits (or pass a closure) to receive events from the
//! event center. Responders are shared as `Arc<dyn ...>`; unsubscribing takes
//! a clone of the same `Arc` that was subscribed.

use super::events::RoomEngineEvent;
use crate::types::EventParams;

/// Receiver for typed engine events
pub trait EngineEventResponder: Send + Sync {
    /// Called on the publisher's thread for every engine event subscribed to
    fn on_engine_event(&self, event: RoomEngineEvent, params: &mut EventParams);
}

impl<F> EngineEventResponder for F
where
    F: Fn(RoomEngineEvent, &mut EventParams) + Send + Sync,
{
    fn on_engine_event(&self, event: RoomEngineEvent, params: &mut EventParams) {
        self(event, params)
    }
}

/// Receiver for string-keyed UI events
pub trait UiEventResponder: Send + Sync {
    /// Called with the UI event key and the notification parameters
    fn on_notify_ui_event(&self, key: &str, params: &mut EventParams);
}

impl<F> UiEventResponder for F
where
    F: Fn(&str, &mut EventParams) + Send + Sync,
{
    fn on_notify_ui_event(&self, key: &str, params: &mut EventParams) {
        self(key, params)
    }
}
