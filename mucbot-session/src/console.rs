//! Console transport: a local stand-in for the real chat connection.
//!
//! Reads lines from stdin as if they were room messages (prefix a line with
//! `/msg ` to simulate a private message) and prints the bot's replies to
//! stdout. Useful for trying out responders without any server.

use async_trait::async_trait;
use mucbot_core::{InboundMessage, Result, Scope};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::session::SessionAdapter;
use crate::transport::ChatTransport;

/// Prints outbound messages to stdout.
pub struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_private(&self, to: &str, body: &str) -> Result<()> {
        println!("[pm -> {}] {}", to, body);
        Ok(())
    }

    async fn send_group(&self, body: &str) -> Result<()> {
        println!("[room] {}", body);
        Ok(())
    }
}

/// Reads stdin until EOF, feeding each line to the adapter as `sender_nick`.
/// Lines starting with `/msg ` are treated as private messages. A failed
/// delivery is logged and the loop continues; no single message may kill the
/// session.
pub async fn run_console<T: ChatTransport>(
    adapter: &SessionAdapter<T>,
    sender_nick: &str,
) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (body, scope) = match line.strip_prefix("/msg ") {
            Some(rest) => (rest, Scope::Private),
            None => (line, Scope::Group),
        };

        let inbound = InboundMessage::new(body, sender_nick, scope);
        if let Err(e) = adapter.on_message(&inbound).await {
            warn!(error = %e, "failed to deliver reply");
        }
    }

    Ok(())
}
