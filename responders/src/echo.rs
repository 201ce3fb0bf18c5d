//! Echo: repeats the text after `!echo`. Private chat only.

use async_trait::async_trait;
use mucbot_core::{PatternMatch, Permissions, Responder, ResponderError, ResponderKind};

/// SingleShot unit echoing its argument back. Restricted to private chat so
/// the bot cannot be used to spam a room.
pub struct EchoResponder;

#[async_trait]
impl Responder for EchoResponder {
    fn name(&self) -> &str {
        "echo"
    }

    fn pattern(&self) -> &str {
        r"^!echo\s+(\S.*)"
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::SingleShot
    }

    fn permissions(&self) -> Permissions {
        Permissions::PRIVATE_ONLY
    }

    fn help(&self) -> &str {
        "!echo <text> - repeats <text> back to you (private chat only)"
    }

    async fn respond(
        &self,
        _text: &str,
        found: &PatternMatch,
        _nick: &str,
    ) -> Result<String, ResponderError> {
        let echoed = found.group(1).ok_or(ResponderError::MissingCapture(1))?;
        Ok(echoed.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_for(unit: &dyn Responder, text: &str) -> PatternMatch {
        let re = regex::RegexBuilder::new(unit.pattern())
            .case_insensitive(true)
            .build()
            .unwrap();
        PatternMatch::from_captures(&re.captures(text).unwrap())
    }

    /// **Test: `!echo hello world` replies with "hello world".**
    #[tokio::test]
    async fn test_echo_repeats_argument() {
        let unit = EchoResponder;
        let found = match_for(&unit, "!echo hello world");
        let out = unit.respond("!echo hello world", &found, "alice").await.unwrap();
        assert_eq!(out, "hello world");
    }

    /// **Test: the pattern requires an argument; a bare `!echo` does not match.**
    #[test]
    fn test_bare_echo_does_not_match() {
        let unit = EchoResponder;
        let re = regex::RegexBuilder::new(unit.pattern())
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(!re.is_match("!echo"));
        assert!(!re.is_match("!echo   "));
    }

    /// **Test: echo is private-only.**
    #[test]
    fn test_echo_is_private_only() {
        assert_eq!(EchoResponder.permissions(), Permissions::PRIVATE_ONLY);
    }
}
