//! Session configuration from environment variables with CLI overrides.
//! Interacts with the outside world through MUC_JID, MUC_PASSWORD, MUC_ROOM,
//! MUC_NICK and LOG_FILE.

use std::env;

/// Connection and identity settings for one bot session.
///
/// `jid`, `password` and `room` are only needed by a real chat transport and
/// stay optional; `nick` is always required since self-message suppression
/// depends on it.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub jid: Option<String>,
    pub password: Option<String>,
    pub room: Option<String>,
    pub nick: String,
    pub log_file: Option<String>,
}

impl SessionConfig {
    /// Loads from environment. Each `Some` override wins over its env var;
    /// `nick` falls back to MUC_NICK and then to "anna".
    pub fn from_env(
        jid: Option<String>,
        password: Option<String>,
        room: Option<String>,
        nick: Option<String>,
    ) -> Self {
        Self {
            jid: jid.or_else(|| env::var("MUC_JID").ok()),
            password: password.or_else(|| env::var("MUC_PASSWORD").ok()),
            room: room.or_else(|| env::var("MUC_ROOM").ok()),
            nick: nick
                .or_else(|| env::var("MUC_NICK").ok())
                .unwrap_or_else(|| "anna".to_string()),
            log_file: env::var("LOG_FILE").ok(),
        }
    }

    /// Minimal config for local runs and tests: just a nick.
    pub fn with_nick(nick: impl Into<String>) -> Self {
        Self {
            jid: None,
            password: None,
            room: None,
            nick: nick.into(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: with_nick sets only the nick.**
    #[test]
    fn test_with_nick() {
        let config = SessionConfig::with_nick("anna");
        assert_eq!(config.nick, "anna");
        assert!(config.jid.is_none());
        assert!(config.password.is_none());
        assert!(config.room.is_none());
        assert!(config.log_file.is_none());
    }

    /// **Test: explicit overrides win over the environment.**
    #[test]
    fn test_overrides_win() {
        let config = SessionConfig::from_env(
            Some("bot@example.org".to_string()),
            None,
            Some("lobby@conference.example.org".to_string()),
            Some("anna".to_string()),
        );
        assert_eq!(config.jid.as_deref(), Some("bot@example.org"));
        assert_eq!(config.room.as_deref(), Some("lobby@conference.example.org"));
        assert_eq!(config.nick, "anna");
    }
}
