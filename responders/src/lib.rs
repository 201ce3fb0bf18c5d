//! # Bundled responders
//!
//! Small responder units shipped with the bot: ping, echo, time (SingleShot)
//! and greeter (Broadcast). They exist to exercise the [`mucbot_core::Responder`]
//! contract end to end; real deployments register their own units alongside
//! or instead of these.

mod echo;
mod greeter;
mod ping;
mod time;

pub use echo::EchoResponder;
pub use greeter::GreeterResponder;
pub use ping::PingResponder;
pub use time::TimeResponder;
