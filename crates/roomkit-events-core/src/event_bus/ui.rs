//! String channel: UI events bridged onto the notification bus.
//!
//! Delivery never walks the local map. `notify` on the bus fans out to the
//! adapters installed here; the local map only exists so that unsubscribe can
//! find the adapter wrapping a given responder.
//!
//! Subscribe and unsubscribe each touch two tables, the local adapter list and
//! the bus. Both steps run under one mutation lock so a concurrent unsubscribe
//! can never observe the adapter locally before it reaches the bus.

use parking_lot::Mutex;
use std::sync::Arc;

use super::adapter::{AdapterRef, NotificationAdapter, SubscriptionId};
use super::notification::NotificationBus;
use super::registry::SubscriberRegistry;
use crate::types::{NotificationRef, UiResponderRef};

/// Registry of UI event adapters
pub struct UiEventRegistry {
    adapters: SubscriberRegistry<String, AdapterRef>,
    bus: Arc<dyn NotificationBus>,
    outer_topic: String,
    dedupe: bool,
    mutation: Mutex<()>,
}

impl UiEventRegistry {
    pub fn new(
        bus: Arc<dyn NotificationBus>,
        outer_topic: impl Into<String>,
        dedupe: bool,
    ) -> Self {
        Self {
            adapters: SubscriberRegistry::new(),
            bus,
            outer_topic: outer_topic.into(),
            dedupe,
            mutation: Mutex::new(()),
        }
    }

    /// Wrap `responder` in a new adapter and register it for `event`
    ///
    /// An empty event name is ignored.
    pub fn subscribe(&self, event: &str, responder: UiResponderRef) {
        if event.is_empty() {
            tracing::trace!("Ignoring UI subscription with empty event name");
            return;
        }
        let adapter = Arc::new(NotificationAdapter::new(responder.clone()));
        let _guard = self.mutation.lock();
        if self.dedupe {
            let added = self
                .adapters
                .append_unique(event.to_string(), adapter.clone(), |a| a.wraps(&responder));
            if !added {
                tracing::debug!("Responder already subscribed to UI event {}", event);
                return;
            }
        } else {
            self.adapters.append(event.to_string(), adapter.clone());
        }
        self.bus.register(&self.outer_topic, event, adapter.clone());
        tracing::debug!("UI subscription {} added for {}", adapter.id(), event);
    }

    /// Remove the adapter wrapping `responder` locally and from the bus
    ///
    /// When no adapter matches, the bus is still asked to unregister an
    /// absent handler, which it ignores.
    pub fn unsubscribe(&self, event: &str, responder: &UiResponderRef) {
        if event.is_empty() {
            tracing::trace!("Ignoring UI unsubscription with empty event name");
            return;
        }
        let _guard = self.mutation.lock();
        if !self.adapters.contains_key(event) {
            return;
        }
        let adapter: Option<NotificationRef> = self
            .adapters
            .remove_first(event, |a| a.wraps(responder))
            .map(|adapter| {
                tracing::debug!("UI subscription {} removed for {}", adapter.id(), event);
                adapter as NotificationRef
            });
        if adapter.is_none() {
            tracing::debug!("No matching responder subscribed to UI event {}", event);
        }
        self.bus.unregister(&self.outer_topic, event, adapter.as_ref());
    }

    /// Number of adapters held locally for `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.adapters.len(event)
    }

    /// Ids of the adapters held locally for `event`, in subscription order
    pub fn subscription_ids(&self, event: &str) -> Vec<SubscriptionId> {
        self.adapters
            .snapshot(event)
            .map(|adapters| adapters.iter().map(|a| a.id()).collect())
            .unwrap_or_default()
    }

    /// Outer key used on the notification bus
    pub fn outer_topic(&self) -> &str {
        &self.outer_topic
    }

    /// The bus adapters are registered with
    pub fn bus(&self) -> &Arc<dyn NotificationBus> {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::notification::InProcessNotificationBus;
    use crate::types::EventParams;
    use crate::types::NotificationRef;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    fn counting(counter: &Arc<AtomicUsize>) -> UiResponderRef {
        let counter = counter.clone();
        Arc::new(move |_key: &str, _params: &mut EventParams| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn registry(dedupe: bool) -> (Arc<InProcessNotificationBus>, UiEventRegistry) {
        let bus = Arc::new(InProcessNotificationBus::new());
        let registry = UiEventRegistry::new(bus.clone(), "RoomKitEvent", dedupe);
        (bus, registry)
    }

    #[test]
    fn test_subscribe_registers_adapter_on_bus() {
        let (bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        registry.subscribe("showUserList", counting(&counter));

        assert_eq!(registry.subscriber_count("showUserList"), 1);
        assert_eq!(bus.handler_count("RoomKitEvent", "showUserList"), 1);

        bus.notify("RoomKitEvent", "showUserList", &mut EventParams::new());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_removes_local_and_bus_entries() {
        let (bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        let responder = counting(&counter);

        registry.subscribe("showUserList", responder.clone());
        registry.unsubscribe("showUserList", &responder);

        assert_eq!(registry.subscriber_count("showUserList"), 0);
        assert_eq!(bus.handler_count("RoomKitEvent", "showUserList"), 0);
        bus.notify("RoomKitEvent", "showUserList", &mut EventParams::new());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_only_matching_responder() {
        let (bus, registry) = registry(false);
        let kept = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));
        let dropped_responder = counting(&dropped);

        registry.subscribe("showApplyList", counting(&kept));
        registry.subscribe("showApplyList", dropped_responder.clone());
        registry.unsubscribe("showApplyList", &dropped_responder);

        bus.notify("RoomKitEvent", "showApplyList", &mut EventParams::new());
        assert_eq!(kept.load(Ordering::SeqCst), 1);
        assert_eq!(dropped.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_event_is_ignored() {
        let (bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        let responder = counting(&counter);

        registry.subscribe("", responder.clone());
        registry.unsubscribe("", &responder);

        assert_eq!(registry.subscriber_count(""), 0);
        assert_eq!(bus.total_handlers(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_responder_is_noop() {
        let (bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        let stranger = counting(&counter);

        registry.unsubscribe("showMeetingInfo", &stranger);
        registry.subscribe("showMeetingInfo", counting(&counter));
        registry.unsubscribe("showMeetingInfo", &stranger);

        assert_eq!(bus.handler_count("RoomKitEvent", "showMeetingInfo"), 1);
    }

    #[test]
    fn test_dedupe_skips_second_adapter() {
        let (bus, registry) = registry(true);
        let counter = Arc::new(AtomicUsize::new(0));
        let responder = counting(&counter);

        registry.subscribe("kickedOffLine", responder.clone());
        registry.subscribe("kickedOffLine", responder.clone());

        assert_eq!(bus.handler_count("RoomKitEvent", "kickedOffLine"), 1);
        bus.notify("RoomKitEvent", "kickedOffLine", &mut EventParams::new());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_without_dedupe_each_subscribe_gets_adapter() {
        let (bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        let responder = counting(&counter);

        registry.subscribe("kickedOffLine", responder.clone());
        registry.subscribe("kickedOffLine", responder.clone());

        assert_eq!(bus.handler_count("RoomKitEvent", "kickedOffLine"), 2);
        bus.notify("RoomKitEvent", "kickedOffLine", &mut EventParams::new());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscription_ids_track_adapters() {
        let (_bus, registry) = registry(false);
        let counter = Arc::new(AtomicUsize::new(0));
        let first = counting(&counter);
        let second = counting(&counter);

        registry.subscribe("showChatView", first.clone());
        registry.subscribe("showChatView", second);
        let ids = registry.subscription_ids("showChatView");
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);

        registry.unsubscribe("showChatView", &first);
        assert_eq!(registry.subscription_ids("showChatView"), vec![ids[1]]);
        assert!(registry.subscription_ids("unknown").is_empty());
    }

    /// Bus whose first `register` stalls until the test releases it
    struct StallingBus {
        inner: InProcessNotificationBus,
        stalled: AtomicBool,
        entered: Barrier,
        release: Barrier,
    }

    impl NotificationBus for StallingBus {
        fn register(&self, key: &str, sub_key: &str, handler: NotificationRef) {
            if !self.stalled.swap(true, Ordering::SeqCst) {
                self.entered.wait();
                self.release.wait();
            }
            self.inner.register(key, sub_key, handler);
        }

        fn notify(&self, key: &str, sub_key: &str, params: &mut EventParams) {
            self.inner.notify(key, sub_key, params);
        }

        fn unregister(&self, key: &str, sub_key: &str, handler: Option<&NotificationRef>) {
            self.inner.unregister(key, sub_key, handler);
        }
    }

    #[test]
    fn test_unsubscribe_during_slow_register_leaves_no_orphan() {
        let bus = Arc::new(StallingBus {
            inner: InProcessNotificationBus::new(),
            stalled: AtomicBool::new(false),
            entered: Barrier::new(2),
            release: Barrier::new(2),
        });
        let registry = Arc::new(UiEventRegistry::new(bus.clone(), "RoomKitEvent", false));
        let counter = Arc::new(AtomicUsize::new(0));
        let responder = counting(&counter);

        let subscriber = {
            let registry = registry.clone();
            let responder = responder.clone();
            thread::spawn(move || registry.subscribe("showUserList", responder))
        };

        // The subscriber is now parked inside the bus register
        bus.entered.wait();
        let unsubscriber = {
            let registry = registry.clone();
            let responder = responder.clone();
            thread::spawn(move || registry.unsubscribe("showUserList", &responder))
        };
        thread::sleep(Duration::from_millis(50));
        bus.release.wait();

        subscriber.join().expect("subscriber thread");
        unsubscriber.join().expect("unsubscriber thread");

        assert_eq!(
            registry.subscriber_count("showUserList"),
            bus.inner.handler_count("RoomKitEvent", "showUserList")
        );
        registry.unsubscribe("showUserList", &responder);
        assert_eq!(bus.inner.handler_count("RoomKitEvent", "showUserList"), 0);

        bus.notify("RoomKitEvent", "showUserList", &mut EventParams::new());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
