//! Typed channel: engine events dispatched in-process.

use super::events::RoomEngineEvent;
use super::registry::{deliver_isolated, SubscriberRegistry};
use crate::types::{same_handle, EngineResponderRef, EventParams};

/// Registry of engine event responders
pub struct EngineEventRegistry {
    responders: SubscriberRegistry<RoomEngineEvent, EngineResponderRef>,
    dedupe: bool,
    trace_deliveries: bool,
}

impl EngineEventRegistry {
    pub fn new(dedupe: bool, trace_deliveries: bool) -> Self {
        Self {
            responders: SubscriberRegistry::new(),
            dedupe,
            trace_deliveries,
        }
    }

    /// Append `responder` to the subscribers of `event`
    pub fn subscribe(&self, event: RoomEngineEvent, responder: EngineResponderRef) {
        if self.dedupe {
            let added = self
                .responders
                .append_unique(event, responder.clone(), |existing| {
                    same_handle(existing, &responder)
                });
            if !added {
                tracing::debug!("Responder already subscribed to {}", event);
                return;
            }
        } else {
            self.responders.append(event, responder);
        }
        tracing::debug!("Engine responder subscribed to {}", event);
    }

    /// Remove the first registration of `responder` for `event`
    pub fn unsubscribe(&self, event: RoomEngineEvent, responder: &EngineResponderRef) {
        let removed = self
            .responders
            .remove_first(&event, |existing| same_handle(existing, responder));
        match removed {
            Some(_) => tracing::debug!("Engine responder unsubscribed from {}", event),
            None => tracing::debug!("No matching responder subscribed to {}", event),
        }
    }

    /// Deliver `event` to every responder, in subscription order
    ///
    /// Responders run on the caller's thread against a snapshot of the list,
    /// so they may subscribe or unsubscribe while being called. A panicking
    /// responder is logged and skipped.
    pub fn publish(&self, event: RoomEngineEvent, params: &mut EventParams) {
        let Some(responders) = self.responders.snapshot(&event) else {
            return;
        };
        for responder in responders.iter() {
            deliver_isolated(event.as_str(), || responder.on_engine_event(event, params));
            if self.trace_deliveries {
                tracing::debug!("onEngineEvent : {}", event);
            }
        }
    }

    /// Number of responders subscribed to `event`
    pub fn subscriber_count(&self, event: RoomEngineEvent) -> usize {
        self.responders.len(&event)
    }
}

impl Default for EngineEventRegistry {
    fn default() -> Self {
        Self::new(false, true)
    }
}
