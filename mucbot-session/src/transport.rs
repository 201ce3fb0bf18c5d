//! Transport seam: the send primitives a chat backend must supply.

use async_trait::async_trait;
use mucbot_core::Result;

/// Abstraction over the chat connection. The bot only ever needs two
/// primitives: deliver a private reply to one nick, or post into the shared
/// room. Connection handshake, authentication, presence and room membership
/// are the implementation's own business.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Delivers `body` to `to` in a one-to-one chat.
    async fn send_private(&self, to: &str, body: &str) -> Result<()>;

    /// Posts `body` into the shared group context.
    async fn send_group(&self, body: &str) -> Result<()>;
}
