//! Bridges a UI responder onto the notification bus.

use std::sync::Arc;
use uuid::Uuid;

use super::notification::Notification;
use crate::types::{same_handle, EventParams, UiResponderRef};

/// Identity of one UI subscription
///
/// Minted when the adapter is created. Shown in subscribe/unsubscribe logs
/// and in the adapter's `Debug` output, and listed per event by
/// [`UiEventRegistry::subscription_ids`](super::UiEventRegistry::subscription_ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = Uuid::encode_buffer();
        let hex = self.0.simple().encode_lower(&mut buf);
        write!(f, "ui-{}", &hex[..12])
    }
}

/// Wraps exactly one [`UiEventResponder`](super::UiEventResponder)
///
/// One adapter is created per subscription. The bus holds the adapter, not
/// the responder, so unsubscribing has to find the adapter again by the
/// responder it wraps.
pub struct NotificationAdapter {
    id: SubscriptionId,
    responder: UiResponderRef,
}

impl NotificationAdapter {
    pub fn new(responder: UiResponderRef) -> Self {
        Self {
            id: SubscriptionId(Uuid::new_v4()),
            responder,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether this adapter wraps `responder` (by identity)
    pub fn wraps(&self, responder: &UiResponderRef) -> bool {
        same_handle(&self.responder, responder)
    }
}

impl Notification for NotificationAdapter {
    fn on_notify_event(&self, _key: &str, sub_key: &str, params: &mut EventParams) {
        self.responder.on_notify_ui_event(sub_key, params);
    }
}

impl std::fmt::Debug for NotificationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationAdapter")
            .field("id", &format_args!("{}", self.id))
            .finish_non_exhaustive()
    }
}

/// Shared handle to an adapter, as stored by the string registry
pub type AdapterRef = Arc<NotificationAdapter>;
