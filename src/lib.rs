//! # RoomKit Events
//!
//! An in-process event center with two independent channels:
//! - **Engine events**: a closed set of typed events, dispatched to
//!   in-process responders
//! - **UI events**: open string keys, bridged onto a notification bus that
//!   other subsystems share
//!
//! ## Architecture
//!
//! 1. **roomkit-events-core** - Registries, notification bus, event center
//! 2. **roomkit-events** - Re-exports plus logging and configuration bootstrap
//!
//! ## Features
//!
//! - **Ordered delivery**: responders fire in subscription order on the publishing thread
//! - **Snapshot iteration**: subscribe and unsubscribe never disturb a publish in progress
//! - **Failure isolation**: a panicking responder is logged and skipped
//! - **Silent misuse**: empty event names and unknown subscriptions are ignored

use anyhow::Context;
use std::path::Path;

pub use roomkit_events_core::{config, error, event_bus, types};

pub use roomkit_events_core::{
    event_center, init_event_center, notification_bus, ui_events, EngineEventResponder,
    EngineResponderRef, EventCenterConfig, EventCenterError, EventParams,
    InProcessNotificationBus, Notification, NotificationBus, NotificationRef, RoomEngineEvent,
    RoomEventCenter, SubscriptionId, UiEventResponder, UiResponderRef,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Build the process-wide event center from a TOML configuration file
///
/// Must run before anything calls [`event_center`].
pub fn init_from_config_file(path: &Path) -> anyhow::Result<&'static RoomEventCenter> {
    let config = EventCenterConfig::load(path)
        .with_context(|| format!("Failed to load event center config from {}", path.display()))?;
    tracing::info!(
        "Initializing event center v{} (outer topic {})",
        VERSION,
        config.outer_topic
    );
    init_event_center(config).context("Event center was already initialized")?;
    Ok(event_center())
}
