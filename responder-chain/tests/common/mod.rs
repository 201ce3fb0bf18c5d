//! Shared test double: a configurable responder with an invocation counter.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mucbot_core::{PatternMatch, Permissions, Responder, ResponderError, ResponderKind};

/// Configurable responder for tests: fixed reply or forced failure, optional
/// artificial delay, and an atomic counter of `respond` invocations.
pub struct TestResponder {
    name: String,
    pattern: String,
    kind: ResponderKind,
    permissions: Permissions,
    help: String,
    reply: Option<String>,
    delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
}

impl TestResponder {
    pub fn new(name: &str, pattern: &str, kind: ResponderKind) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            kind,
            permissions: Permissions::BOTH,
            help: format!("help for {}", name),
            reply: Some(format!("{} reply", name)),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Makes `respond` return an error on every invocation.
    pub fn failing(mut self) -> Self {
        self.reply = None;
        self
    }

    /// Makes `respond` sleep before replying (for timeout tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Responder for TestResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn kind(&self) -> ResponderKind {
        self.kind
    }

    fn permissions(&self) -> Permissions {
        self.permissions
    }

    fn help(&self) -> &str {
        &self.help
    }

    async fn respond(
        &self,
        _text: &str,
        _found: &PatternMatch,
        _nick: &str,
    ) -> Result<String, ResponderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ResponderError::Failed("test responder failure".to_string())),
        }
    }
}
