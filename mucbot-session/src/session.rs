//! Wires inbound transport events to the dispatch engine and replies back out.

use mucbot_core::{InboundMessage, Result, Scope};
use responder_chain::DispatchEngine;
use tracing::debug;

use crate::transport::ChatTransport;

/// Bridges one chat session to the dispatch engine.
///
/// Responsibilities the engine deliberately does not have: dropping the bot's
/// own echoed group messages, and the reply-delivery rules (private replies
/// are always sent, even empty ones; group replies only when non-empty).
pub struct SessionAdapter<T: ChatTransport> {
    engine: DispatchEngine,
    transport: T,
    nick: String,
}

impl<T: ChatTransport> SessionAdapter<T> {
    pub fn new(engine: DispatchEngine, transport: T, nick: impl Into<String>) -> Self {
        Self {
            engine,
            transport,
            nick: nick.into(),
        }
    }

    /// The bot's own nickname, used for self-message suppression.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Routes one inbound message and delivers the reply.
    pub async fn on_message(&self, inbound: &InboundMessage) -> Result<()> {
        if inbound.scope == Scope::Group && inbound.sender == self.nick {
            debug!(sender = %inbound.sender, "dropping own echoed group message");
            return Ok(());
        }

        let reply = self
            .engine
            .route(&inbound.body, &inbound.sender, inbound.scope)
            .await;

        match inbound.scope {
            Scope::Private => self.transport.send_private(&inbound.sender, &reply).await,
            Scope::Group => {
                if reply.is_empty() {
                    return Ok(());
                }
                self.transport.send_group(&reply).await
            }
        }
    }
}
