//! Ordered, startup-populated collections of responder units.

use std::sync::Arc;

use mucbot_core::{PatternMatch, Permissions, RegistryError, Responder, ResponderKind};
use regex::{Regex, RegexBuilder};
use tracing::info;

/// A responder unit together with its pattern compiled at registration time.
/// Compiling here keeps pattern failures out of the dispatch path entirely.
pub struct RegisteredResponder {
    responder: Arc<dyn Responder>,
    pattern: Regex,
}

impl RegisteredResponder {
    pub fn name(&self) -> &str {
        self.responder.name()
    }

    pub fn help(&self) -> &str {
        self.responder.help()
    }

    pub fn permissions(&self) -> Permissions {
        self.responder.permissions()
    }

    pub fn responder(&self) -> &Arc<dyn Responder> {
        &self.responder
    }

    /// Unanchored case-insensitive search over `text`; returns an owned match
    /// snapshot on a hit.
    pub fn find(&self, text: &str) -> Option<PatternMatch> {
        self.pattern
            .captures(text)
            .map(|caps| PatternMatch::from_captures(&caps))
    }

    /// True if the compiled pattern matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Two ordered collections of responder units, split by kind. Populated once
/// at startup and read-only afterwards; insertion order is semantically
/// significant (first SingleShot match wins, Broadcast output concatenates in
/// registration order).
#[derive(Default)]
pub struct Registry {
    single_shot: Vec<RegisteredResponder>,
    broadcast: Vec<RegisteredResponder>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a unit to the collection matching its kind.
    ///
    /// Rejects empty names, names already present in either collection
    /// (case-insensitive, matching help lookup), permissions that allow no
    /// context, and patterns that do not compile.
    pub fn register(&mut self, responder: Arc<dyn Responder>) -> Result<(), RegistryError> {
        let name = responder.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.contains(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if responder.permissions().is_empty() {
            return Err(RegistryError::NoContext(name.to_string()));
        }

        let pattern = RegexBuilder::new(responder.pattern())
            .case_insensitive(true)
            .build()
            .map_err(|source| RegistryError::InvalidPattern {
                name: name.to_string(),
                source,
            })?;

        info!(
            responder = name,
            kind = ?responder.kind(),
            pattern = responder.pattern(),
            "registered responder"
        );

        let entry = RegisteredResponder { responder, pattern };
        match entry.responder.kind() {
            ResponderKind::SingleShot => self.single_shot.push(entry),
            ResponderKind::Broadcast => self.broadcast.push(entry),
        }
        Ok(())
    }

    /// True if a unit with `name` (case-insensitive) exists in either collection.
    pub fn contains(&self, name: &str) -> bool {
        self.broadcast
            .iter()
            .chain(self.single_shot.iter())
            .any(|entry| entry.name().eq_ignore_ascii_case(name))
    }

    /// SingleShot units in registration order.
    pub fn single_shot(&self) -> &[RegisteredResponder] {
        &self.single_shot
    }

    /// Broadcast units in registration order.
    pub fn broadcast(&self) -> &[RegisteredResponder] {
        &self.broadcast
    }

    pub fn len(&self) -> usize {
        self.single_shot.len() + self.broadcast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.single_shot.is_empty() && self.broadcast.is_empty()
    }
}
