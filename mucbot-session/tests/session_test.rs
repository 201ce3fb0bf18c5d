//! Integration tests for [`mucbot_session::SessionAdapter`].
//!
//! Covers: self-message suppression in group scope, empty-reply suppression
//! rules (group replies dropped when empty, private replies always sent), and
//! routing of replies to the right transport primitive.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mucbot_core::{
    InboundMessage, PatternMatch, Permissions, Responder, ResponderError, ResponderKind, Result,
    Scope,
};
use mucbot_session::{ChatTransport, SessionAdapter};
use responder_chain::{DispatchEngine, Registry};

/// Records every outbound send instead of delivering it.
#[derive(Clone, Default)]
struct RecordingTransport {
    private: Arc<Mutex<Vec<(String, String)>>>,
    group: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_private(&self, to: &str, body: &str) -> Result<()> {
        self.private
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }

    async fn send_group(&self, body: &str) -> Result<()> {
        self.group.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Fixed-reply SingleShot responder matching `!hi`.
struct HiResponder;

#[async_trait]
impl Responder for HiResponder {
    fn name(&self) -> &str {
        "hi"
    }
    fn pattern(&self) -> &str {
        "^!hi"
    }
    fn kind(&self) -> ResponderKind {
        ResponderKind::SingleShot
    }
    fn permissions(&self) -> Permissions {
        Permissions::BOTH
    }
    fn help(&self) -> &str {
        "!hi - says hi"
    }
    async fn respond(
        &self,
        _text: &str,
        _found: &PatternMatch,
        nick: &str,
    ) -> std::result::Result<String, ResponderError> {
        Ok(format!("hi {}", nick))
    }
}

fn adapter_with(transport: RecordingTransport) -> SessionAdapter<RecordingTransport> {
    let mut registry = Registry::new();
    registry.register(Arc::new(HiResponder)).unwrap();
    let engine = DispatchEngine::new(Arc::new(registry));
    SessionAdapter::new(engine, transport, "anna")
}

/// **Test: a group message from the bot's own nick is dropped before routing.**
#[tokio::test]
async fn test_own_group_message_is_dropped() {
    let transport = RecordingTransport::default();
    let adapter = adapter_with(transport.clone());

    let inbound = InboundMessage::new("!hi", "anna", Scope::Group);
    adapter.on_message(&inbound).await.unwrap();

    assert!(transport.group.lock().unwrap().is_empty());
    assert!(transport.private.lock().unwrap().is_empty());
}

/// **Test: a private message from the bot's own nick is still routed.**
///
/// Self-suppression applies only to the group echo; a user could never share
/// the bot's nick in a one-to-one chat on a real transport.
#[tokio::test]
async fn test_private_message_from_own_nick_is_routed() {
    let transport = RecordingTransport::default();
    let adapter = adapter_with(transport.clone());

    let inbound = InboundMessage::new("!hi", "anna", Scope::Private);
    adapter.on_message(&inbound).await.unwrap();

    let private = transport.private.lock().unwrap();
    assert_eq!(*private, vec![("anna".to_string(), "hi anna".to_string())]);
}

/// **Test: a matching group message is answered into the room.**
#[tokio::test]
async fn test_group_reply_goes_to_room() {
    let transport = RecordingTransport::default();
    let adapter = adapter_with(transport.clone());

    let inbound = InboundMessage::new("!hi", "bob", Scope::Group);
    adapter.on_message(&inbound).await.unwrap();

    assert_eq!(*transport.group.lock().unwrap(), vec!["hi bob".to_string()]);
    assert!(transport.private.lock().unwrap().is_empty());
}

/// **Test: an empty reply is suppressed in group scope.**
#[tokio::test]
async fn test_empty_group_reply_is_suppressed() {
    let transport = RecordingTransport::default();
    let adapter = adapter_with(transport.clone());

    let inbound = InboundMessage::new("nothing matches this", "bob", Scope::Group);
    adapter.on_message(&inbound).await.unwrap();

    assert!(transport.group.lock().unwrap().is_empty());
}

/// **Test: a private reply is always sent, even when empty.**
#[tokio::test]
async fn test_empty_private_reply_is_sent() {
    let transport = RecordingTransport::default();
    let adapter = adapter_with(transport.clone());

    let inbound = InboundMessage::new("nothing matches this", "bob", Scope::Private);
    adapter.on_message(&inbound).await.unwrap();

    let private = transport.private.lock().unwrap();
    assert_eq!(*private, vec![("bob".to_string(), String::new())]);
}
