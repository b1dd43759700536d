//! Type aliases for commonly used complex types.
//!
//! Responders are shared as `Arc<dyn Trait>` so the registries can compare
//! them by allocation identity, and published lists are `Arc<Vec<T>>` so a
//! publish call can hold a snapshot while subscribers keep mutating.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_events_core::types::*;
//!
//! let responder: EngineResponderRef = Arc::new(|event, _params: &mut EventParams| {
//!     println!("{event}");
//! });
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::event_bus::{EngineEventResponder, Notification, UiEventResponder};

// =============================================================================
// PAYLOAD TYPES
// =============================================================================

/// Parameter bag handed to every handler of one publish call.
///
/// Handlers receive it by `&mut` in turn, so changes made by one handler are
/// visible to the handlers after it.
pub type EventParams = HashMap<String, serde_json::Value>;

// =============================================================================
// RESPONDER HANDLES
// =============================================================================

/// Shared handle to a typed-channel responder.
pub type EngineResponderRef = Arc<dyn EngineEventResponder>;

/// Shared handle to a string-channel responder.
pub type UiResponderRef = Arc<dyn UiEventResponder>;

/// Shared handle to a handler registered on the notification bus.
pub type NotificationRef = Arc<dyn Notification>;

// =============================================================================
// SNAPSHOTS AND IDENTITY
// =============================================================================

/// Immutable snapshot of one event's subscribers.
///
/// Mutations go through `Arc::make_mut`, which only copies the vector while a
/// publish call still holds an older snapshot.
pub type SnapshotList<T> = Arc<Vec<T>>;

/// Compare two shared handles by allocation, ignoring trait object metadata.
#[inline]
pub fn same_handle<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
