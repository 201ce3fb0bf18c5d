//! Greeter: waves back at greetings. Broadcast, so it composes with whatever
//! command the same message may also trigger.

use async_trait::async_trait;
use mucbot_core::{PatternMatch, Permissions, Responder, ResponderError, ResponderKind};

pub struct GreeterResponder;

#[async_trait]
impl Responder for GreeterResponder {
    fn name(&self) -> &str {
        "greeter"
    }

    fn pattern(&self) -> &str {
        r"\b(hello|hi|hey)\b"
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Broadcast
    }

    fn permissions(&self) -> Permissions {
        Permissions::BOTH
    }

    fn help(&self) -> &str {
        "greeter - says hello back when greeted"
    }

    async fn respond(
        &self,
        _text: &str,
        found: &PatternMatch,
        nick: &str,
    ) -> Result<String, ResponderError> {
        Ok(format!("{} {}!", capitalized(found.matched()), nick))
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
