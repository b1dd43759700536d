//! Shared notification bus.
//!
//! The string channel is delivered through a bus shared with other
//! subsystems. Handlers are registered under a `(key, sub_key)` pair, where
//! `key` namespaces a subsystem and `sub_key` names the event. The bus stores
//! handler identities, so registering the same `Arc` twice is a no-op and
//! unregistering needs the exact `Arc` that was registered.

use std::sync::{Arc, OnceLock};

use super::registry::{deliver_isolated, SubscriberRegistry};
use crate::types::{same_handle, EventParams, NotificationRef};

/// Handler contract of the notification bus
pub trait Notification: Send + Sync {
    /// Called for every notification posted under the registered key pair
    fn on_notify_event(&self, key: &str, sub_key: &str, params: &mut EventParams);
}

/// Register/notify/unregister primitives of a shared notification bus
pub trait NotificationBus: Send + Sync {
    /// Register `handler` under `(key, sub_key)`
    ///
    /// Registering a handler that is already present does nothing.
    fn register(&self, key: &str, sub_key: &str, handler: NotificationRef);

    /// Synchronously invoke every handler registered under `(key, sub_key)`
    fn notify(&self, key: &str, sub_key: &str, params: &mut EventParams);

    /// Remove `handler` from `(key, sub_key)`
    ///
    /// `None`, or a handler that was never registered, is a no-op.
    fn unregister(&self, key: &str, sub_key: &str, handler: Option<&NotificationRef>);
}

/// Notification bus delivering on the caller's thread
#[derive(Default)]
pub struct InProcessNotificationBus {
    handlers: SubscriberRegistry<(String, String), NotificationRef>,
}

impl InProcessNotificationBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers registered under `(key, sub_key)`
    pub fn handler_count(&self, key: &str, sub_key: &str) -> usize {
        self.handlers.len(&(key.to_string(), sub_key.to_string()))
    }

    /// Number of handlers registered under any key pair
    pub fn total_handlers(&self) -> usize {
        self.handlers.total_len()
    }
}

impl NotificationBus for InProcessNotificationBus {
    fn register(&self, key: &str, sub_key: &str, handler: NotificationRef) {
        let added = self.handlers.append_unique(
            (key.to_string(), sub_key.to_string()),
            handler.clone(),
            |existing| same_handle(existing, &handler),
        );
        if added {
            tracing::debug!("Notification handler registered for {}/{}", key, sub_key);
        }
    }

    fn notify(&self, key: &str, sub_key: &str, params: &mut EventParams) {
        let Some(handlers) = self
            .handlers
            .snapshot(&(key.to_string(), sub_key.to_string()))
        else {
            return;
        };
        for handler in handlers.iter() {
            deliver_isolated(sub_key, || handler.on_notify_event(key, sub_key, params));
        }
    }

    fn unregister(&self, key: &str, sub_key: &str, handler: Option<&NotificationRef>) {
        let Some(handler) = handler else {
            return;
        };
        let removed = self
            .handlers
            .remove_first(&(key.to_string(), sub_key.to_string()), |existing| {
                same_handle(existing, handler)
            });
        if removed.is_some() {
            tracing::debug!("Notification handler removed from {}/{}", key, sub_key);
        }
    }
}

impl std::fmt::Debug for InProcessNotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InProcessNotificationBus")
            .field("handlers", &self.total_handlers())
            .finish()
    }
}

/// Global notification bus instance
static NOTIFICATION_BUS: OnceLock<Arc<InProcessNotificationBus>> = OnceLock::new();

/// Get or initialize the process-wide notification bus
///
/// Subsystems that share this bus keep their keys apart by using distinct
/// outer keys.
pub fn notification_bus() -> Arc<InProcessNotificationBus> {
    NOTIFICATION_BUS
        .get_or_init(|| Arc::new(InProcessNotificationBus::new()))
        .clone()
}
