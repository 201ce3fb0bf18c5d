//! # Responder chain
//!
//! The dispatch core: an ordered [`Registry`] of responder units and the
//! [`DispatchEngine`] that routes each inbound message through it. Broadcast
//! units all contribute in registration order; the first matching SingleShot
//! unit wins and ends the pass. A failing unit is logged and skipped, never
//! aborting the rest of the dispatch.

mod engine;
mod registry;

pub use engine::{DispatchEngine, HELP_USAGE};
pub use registry::{RegisteredResponder, Registry};

// Integration tests live in tests/registry_test.rs and tests/dispatch_test.rs.
