//! Keyed copy-on-write subscriber lists.
//!
//! Shared by the typed registry, the string registry and the in-process
//! notification bus. Each key maps to an `Arc<Vec<T>>`; readers clone the
//! `Arc` and iterate without holding the lock, writers mutate through
//! `Arc::make_mut`.

use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::EventCenterError;
use crate::types::SnapshotList;

/// Ordered subscriber lists keyed by event identity
pub struct SubscriberRegistry<K, T> {
    lists: RwLock<HashMap<K, SnapshotList<T>>>,
}

impl<K, T> SubscriberRegistry<K, T>
where
    K: Eq + Hash,
    T: Clone,
{
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Append `item` to the list for `key`, creating the list if absent
    pub fn append(&self, key: K, item: T) {
        let mut lists = self.lists.write();
        Arc::make_mut(lists.entry(key).or_default()).push(item);
    }

    /// Append `item` unless an entry matching `is_same` is already present
    ///
    /// Returns false when the item was already present.
    pub fn append_unique<F>(&self, key: K, item: T, is_same: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut lists = self.lists.write();
        let list = lists.entry(key).or_default();
        if list.iter().any(is_same) {
            return false;
        }
        Arc::make_mut(list).push(item);
        true
    }

    /// Remove and return the first entry for `key` matching `pred`
    ///
    /// The list itself stays in the map even when it becomes empty.
    pub fn remove_first<Q, F>(&self, key: &Q, pred: F) -> Option<T>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: Fn(&T) -> bool,
    {
        let mut lists = self.lists.write();
        let list = lists.get_mut(key)?;
        let index = list.iter().position(pred)?;
        Some(Arc::make_mut(list).remove(index))
    }

    /// Snapshot of the current list for `key`, if one was ever created
    pub fn snapshot<Q>(&self, key: &Q) -> Option<SnapshotList<T>>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lists.read().get(key).cloned()
    }

    /// Check whether a list exists for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lists.read().contains_key(key)
    }

    /// Number of entries for `key`
    pub fn len<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lists.read().get(key).map_or(0, |list| list.len())
    }

    /// Number of entries across all keys
    pub fn total_len(&self) -> usize {
        self.lists.read().values().map(|list| list.len()).sum()
    }
}

impl<K, T> Default for SubscriberRegistry<K, T>
where
    K: Eq + Hash,
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Run one handler, catching a panic so later handlers still run
///
/// Returns false when the handler panicked. The panic is logged at `warn`.
pub(crate) fn deliver_isolated<F>(event: &str, handler: F) -> bool
where
    F: FnOnce(),
{
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(()) => true,
        Err(payload) => {
            let err = EventCenterError::HandlerPanicked {
                event: event.to_string(),
                message: panic_message(payload.as_ref()),
            };
            tracing::warn!("{}", err);
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let registry: SubscriberRegistry<&str, u32> = SubscriberRegistry::new();
        registry.append("a", 1);
        registry.append("a", 2);
        registry.append("a", 3);

        assert_eq!(*registry.snapshot("a").expect("list exists"), vec![1, 2, 3]);
        assert_eq!(registry.len("a"), 3);
    }

    #[test]
    fn test_append_unique() {
        let registry: SubscriberRegistry<&str, u32> = SubscriberRegistry::new();
        assert!(registry.append_unique("a", 1, |v| *v == 1));
        assert!(!registry.append_unique("a", 1, |v| *v == 1));
        assert_eq!(registry.len("a"), 1);
    }

    #[test]
    fn test_remove_first_keeps_empty_list() {
        let registry: SubscriberRegistry<String, u32> = SubscriberRegistry::new();
        registry.append("a".to_string(), 7);

        assert_eq!(registry.remove_first("a", |v| *v == 7), Some(7));
        assert_eq!(registry.remove_first("a", |v| *v == 7), None);
        assert!(registry.contains_key("a"));
        assert_eq!(registry.len("a"), 0);
    }

    #[test]
    fn test_remove_first_only_removes_one() {
        let registry: SubscriberRegistry<&str, u32> = SubscriberRegistry::new();
        registry.append("a", 5);
        registry.append("a", 6);
        registry.append("a", 5);

        registry.remove_first("a", |v| *v == 5);
        assert_eq!(*registry.snapshot("a").expect("list exists"), vec![6, 5]);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let registry: SubscriberRegistry<&str, u32> = SubscriberRegistry::new();
        registry.append("a", 1);
        let snapshot = registry.snapshot("a").expect("list exists");

        registry.append("a", 2);
        registry.remove_first("a", |v| *v == 1);

        assert_eq!(*snapshot, vec![1]);
        assert_eq!(*registry.snapshot("a").expect("list exists"), vec![2]);
    }

    #[test]
    fn test_unknown_key() {
        let registry: SubscriberRegistry<&str, u32> = SubscriberRegistry::new();
        assert!(registry.snapshot("missing").is_none());
        assert_eq!(registry.len("missing"), 0);
        assert_eq!(registry.remove_first("missing", |_| true), None);
        assert_eq!(registry.total_len(), 0);
    }

    #[test]
    fn test_deliver_isolated_catches_panic() {
        assert!(deliver_isolated("ok", || {}));
        assert!(!deliver_isolated("boom", || panic!("handler failed")));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }
}
