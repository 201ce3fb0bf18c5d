//! Routes one inbound message through the registry and aggregates the reply.

use std::sync::Arc;
use std::time::Duration;

use mucbot_core::{PatternMatch, ResponderError, Scope};
use tracing::{debug, instrument, warn};

use crate::registry::{RegisteredResponder, Registry};

/// Usage string returned for a bare `!help` (or `!help help`) in private chat.
pub const HELP_USAGE: &str = "!help <plugin>";

const DEFAULT_RESPONDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatches messages over a read-only [`Registry`].
///
/// `route` is total: it always returns a reply string (possibly empty), never
/// an error. Every responder invocation runs under a bounded timeout; a unit
/// that fails or times out is logged and skipped.
#[derive(Clone)]
pub struct DispatchEngine {
    registry: Arc<Registry>,
    responder_timeout: Duration,
}

impl DispatchEngine {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_timeout(registry, DEFAULT_RESPONDER_TIMEOUT)
    }

    /// Engine with a custom per-responder timeout.
    pub fn with_timeout(registry: Arc<Registry>, responder_timeout: Duration) -> Self {
        Self {
            registry,
            responder_timeout,
        }
    }

    /// Routes one message: help short-circuit (private only), then the
    /// Broadcast pass (all matching units contribute, registration order),
    /// then the SingleShot pass (first match wins). Returns the concatenated
    /// replies separated by single line breaks, no trailing separator; the
    /// empty string when nothing matched.
    #[instrument(skip(self, text))]
    pub async fn route(&self, text: &str, nick: &str, scope: Scope) -> String {
        if scope.is_private() {
            if let Some(reply) = self.try_help(text) {
                return reply;
            }
        }

        let mut out = String::new();

        for entry in self.registry.broadcast() {
            if !entry.permissions().allows(scope) {
                continue;
            }
            let Some(found) = entry.find(text) else {
                continue;
            };
            match self.invoke(entry, text, &found, nick).await {
                Ok(reply) => {
                    debug!(responder = entry.name(), "broadcast responder matched");
                    out.push_str(&reply);
                    out.push('\n');
                }
                Err(e) => {
                    warn!(responder = entry.name(), error = %e, "broadcast responder failed");
                }
            }
        }

        for entry in self.registry.single_shot() {
            if !entry.permissions().allows(scope) {
                continue;
            }
            let Some(found) = entry.find(text) else {
                continue;
            };
            match self.invoke(entry, text, &found, nick).await {
                Ok(reply) => {
                    debug!(responder = entry.name(), "single-shot responder matched");
                    out.push_str(&reply);
                    // First match wins; no further SingleShot units are tried.
                    break;
                }
                Err(e) => {
                    // A failure is not a stop condition; the next unit gets its turn.
                    warn!(responder = entry.name(), error = %e, "single-shot responder failed");
                }
            }
        }

        if out.ends_with('\n') {
            out.pop();
        }
        out
    }

    /// Resolves a help query: exact name equality first (Broadcast then
    /// SingleShot, registration order), then a pattern search against the
    /// query itself. Falls back to a not-found message naming the query.
    pub fn help(&self, query: &str) -> String {
        let entries = || {
            self.registry
                .broadcast()
                .iter()
                .chain(self.registry.single_shot().iter())
        };

        for entry in entries() {
            if entry.name().eq_ignore_ascii_case(query) {
                return entry.help().to_string();
            }
        }
        for entry in entries() {
            if entry.matches(query) {
                return entry.help().to_string();
            }
        }

        format!("No responder \"{}\" found ...", query)
    }

    /// Help short-circuit for private chat. Returns None when the message is
    /// not a help command and normal dispatch should proceed.
    fn try_help(&self, text: &str) -> Option<String> {
        let trimmed = text.trim_end();
        let is_help = trimmed
            .get(..5)
            .map(|prefix| prefix.eq_ignore_ascii_case("!help"))
            .unwrap_or(false);
        if !is_help {
            return None;
        }

        match trimmed.split_once(' ') {
            None => Some(HELP_USAGE.to_string()),
            Some((_, query)) if query.eq_ignore_ascii_case("help") => {
                Some(HELP_USAGE.to_string())
            }
            Some((_, query)) => Some(self.help(query)),
        }
    }

    async fn invoke(
        &self,
        entry: &RegisteredResponder,
        text: &str,
        found: &PatternMatch,
        nick: &str,
    ) -> Result<String, ResponderError> {
        match tokio::time::timeout(
            self.responder_timeout,
            entry.responder().respond(text, found, nick),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ResponderError::TimedOut(self.responder_timeout)),
        }
    }
}
