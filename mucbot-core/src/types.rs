//! Core types: chat scope, permissions, responder kind, match snapshot, inbound message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The context a message arrived in: one-to-one chat or a shared room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Private,
    Group,
}

impl Scope {
    pub fn is_private(self) -> bool {
        matches!(self, Scope::Private)
    }
}

/// The contexts a responder is eligible to run in. At least one flag must be
/// true; the registry rejects a responder that allows neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub private: bool,
    pub group: bool,
}

impl Permissions {
    pub const BOTH: Permissions = Permissions { private: true, group: true };
    pub const PRIVATE_ONLY: Permissions = Permissions { private: true, group: false };
    pub const GROUP_ONLY: Permissions = Permissions { private: false, group: true };

    /// Single eligibility predicate: is the responder allowed in `scope`?
    pub fn allows(&self, scope: Scope) -> bool {
        match scope {
            Scope::Private => self.private,
            Scope::Group => self.group,
        }
    }

    /// True when neither context is allowed (invalid for registration).
    pub fn is_empty(&self) -> bool {
        !self.private && !self.group
    }
}

/// How a responder's output combines with others.
/// Broadcast units all contribute; the first matching SingleShot unit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponderKind {
    SingleShot,
    Broadcast,
}

/// Owned snapshot of a regex match, handed to [`crate::Responder::respond`].
/// Group 0 is the whole match, as with regex capture numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    pub start: usize,
    pub end: usize,
    groups: Vec<Option<String>>,
}

impl PatternMatch {
    pub fn from_captures(caps: &regex::Captures<'_>) -> Self {
        let whole = caps.get(0);
        Self {
            start: whole.map(|m| m.start()).unwrap_or(0),
            end: whole.map(|m| m.end()).unwrap_or(0),
            groups: (0..caps.len())
                .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// The full matched text (group 0).
    pub fn matched(&self) -> &str {
        self.groups
            .first()
            .and_then(|g| g.as_deref())
            .unwrap_or("")
    }

    /// Capture group `i`, if it participated in the match.
    pub fn group(&self, i: usize) -> Option<&str> {
        self.groups.get(i).and_then(|g| g.as_deref())
    }
}

/// A single inbound chat message as handed to the session adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub body: String,
    pub sender: String,
    pub scope: Scope,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(body: impl Into<String>, sender: impl Into<String>, scope: Scope) -> Self {
        Self {
            body: body.into(),
            sender: sender.into(),
            scope,
            received_at: Utc::now(),
        }
    }
}
