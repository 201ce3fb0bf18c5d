//! The pluggable responder contract.

use crate::error::ResponderError;
use crate::types::{PatternMatch, Permissions, ResponderKind};
use async_trait::async_trait;

/// A pluggable matcher+handler pair that may produce a reply to a chat message.
///
/// Units are registered once at startup; the registry compiles `pattern()` with
/// case-insensitive, unanchored semantics and rejects invalid patterns and
/// duplicate names before the bot starts. `respond` is invoked only when the
/// compiled pattern matched the message body; its failures are isolated per
/// unit by the dispatch engine.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Unique, non-empty identifier; also the `!help <name>` lookup key.
    fn name(&self) -> &str;

    /// Regex source, compiled case-insensitive at registration time.
    fn pattern(&self) -> &str;

    /// Whether this unit composes (Broadcast) or is first-match-wins (SingleShot).
    fn kind(&self) -> ResponderKind;

    /// Contexts this unit may run in. Must allow at least one.
    fn permissions(&self) -> Permissions;

    /// Static help text returned by the help resolver.
    fn help(&self) -> &str;

    /// Produces the reply for a matched message. `found` is the match snapshot
    /// for this unit's pattern over `text`; `nick` is the sender's nickname.
    async fn respond(
        &self,
        text: &str,
        found: &PatternMatch,
        nick: &str,
    ) -> std::result::Result<String, ResponderError>;
}
