//! Type system utilities and aliases.
//!
//! This module provides type aliases for the shared handler and collection
//! types used by the event registries.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for parameter bags, responder handles and snapshots.

pub mod aliases;

pub use aliases::*;
