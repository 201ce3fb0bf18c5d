//! # mucbot-core
//!
//! Core types and traits for the MUC bot: the [`Responder`] contract, message and
//! permission types, error taxonomy, and tracing initialization. Transport-agnostic;
//! used by responder-chain and mucbot-session.

pub mod error;
pub mod logger;
pub mod responder;
pub mod types;

pub use error::{BotError, RegistryError, ResponderError, Result};
pub use logger::init_tracing;
pub use responder::Responder;
pub use types::{InboundMessage, PatternMatch, Permissions, ResponderKind, Scope};
