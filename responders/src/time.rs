//! Current server time: `!time`.

use async_trait::async_trait;
use chrono::Utc;
use mucbot_core::{PatternMatch, Permissions, Responder, ResponderError, ResponderKind};

/// SingleShot unit reporting the current UTC time.
pub struct TimeResponder;

#[async_trait]
impl Responder for TimeResponder {
    fn name(&self) -> &str {
        "time"
    }

    fn pattern(&self) -> &str {
        r"^!time\b"
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::SingleShot
    }

    fn permissions(&self) -> Permissions {
        Permissions::BOTH
    }

    fn help(&self) -> &str {
        "!time - tells the current server time (UTC)"
    }

    async fn respond(
        &self,
        _text: &str,
        _found: &PatternMatch,
        _nick: &str,
    ) -> Result<String, ResponderError> {
        Ok(format!("It is {} UTC", Utc::now().format("%Y-%m-%d %H:%M:%S")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: `!time` reply carries the UTC marker and a date.**
    #[tokio::test]
    async fn test_time_reports_utc() {
        let unit = TimeResponder;
        let re = regex::RegexBuilder::new(unit.pattern())
            .case_insensitive(true)
            .build()
            .unwrap();
        let found = PatternMatch::from_captures(&re.captures("!time").unwrap());

        let out = unit.respond("!time", &found, "alice").await.unwrap();

        assert!(out.starts_with("It is "));
        assert!(out.ends_with(" UTC"));
    }
}
