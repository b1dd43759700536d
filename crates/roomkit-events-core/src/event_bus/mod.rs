//! # Event Bus Module
//!
//! Two independent channels for decoupled communication between room
//! components:
//! - Engine events, keyed by [`RoomEngineEvent`] and dispatched in-process
//! - UI events, keyed by string and bridged onto a shared [`NotificationBus`]
//!
//! Responders run synchronously on the publishing thread, in subscription
//! order. Subscribing and unsubscribing is safe at any time, including from
//! inside a responder and concurrently with a publish in progress.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_events_core::event_bus::{event_center, RoomEngineEvent};
//! use roomkit_events_core::types::{EngineResponderRef, EventParams};
//! use std::sync::Arc;
//!
//! let responder: EngineResponderRef =
//!     Arc::new(|event: RoomEngineEvent, params: &mut EventParams| {
//!         println!("{event}: {params:?}");
//!     });
//! event_center().subscribe_engine(RoomEngineEvent::UserMicStateChanged, responder.clone());
//!
//! let mut params = EventParams::new();
//! params.insert("userId".to_string(), "u1".into());
//! event_center().notify_engine_event(RoomEngineEvent::UserMicStateChanged, &mut params);
//!
//! event_center().unsubscribe_engine(RoomEngineEvent::UserMicStateChanged, &responder);
//! ```

mod adapter;
mod center;
mod engine;
mod events;
mod notification;
mod registry;
mod responder;
mod ui;

pub use adapter::*;
pub use center::*;
pub use engine::*;
pub use events::*;
pub use notification::*;
pub use registry::SubscriberRegistry;
pub use responder::*;
pub use ui::*;
