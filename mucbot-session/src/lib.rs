//! # mucbot-session
//!
//! The session boundary around the dispatch core: the [`ChatTransport`] trait
//! a chat backend must implement, the [`SessionAdapter`] that turns inbound
//! transport events into `route` calls and replies into sends, env-based
//! [`SessionConfig`], and a console transport for local runs.

pub mod config;
pub mod console;
pub mod session;
pub mod transport;

pub use config::SessionConfig;
pub use console::{run_console, ConsoleTransport};
pub use session::SessionAdapter;
pub use transport::ChatTransport;
