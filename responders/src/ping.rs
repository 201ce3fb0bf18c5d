//! Liveness check: `!ping` -> pong.

use async_trait::async_trait;
use mucbot_core::{PatternMatch, Permissions, Responder, ResponderError, ResponderKind};

/// SingleShot unit answering `!ping` in both contexts.
pub struct PingResponder;

#[async_trait]
impl Responder for PingResponder {
    fn name(&self) -> &str {
        "ping"
    }

    fn pattern(&self) -> &str {
        r"^!ping\b"
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::SingleShot
    }

    fn permissions(&self) -> Permissions {
        Permissions::BOTH
    }

    fn help(&self) -> &str {
        "!ping - checks whether the bot is alive"
    }

    async fn respond(
        &self,
        _text: &str,
        _found: &PatternMatch,
        nick: &str,
    ) -> Result<String, ResponderError> {
        Ok(format!("pong, {}!", nick))
    }
}
