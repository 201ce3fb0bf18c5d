//! mucbot: plugin based MUC bot. Registers the bundled responders, then runs
//! a console session standing in for the chat connection (prefix a line with
//! `/msg ` to simulate a private message).

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mucbot_cli::{build_registry, default_level, Cli, Commands};
use mucbot_core::init_tracing;
use mucbot_session::{run_console, ConsoleTransport, SessionAdapter, SessionConfig};
use responder_chain::DispatchEngine;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            jid,
            password,
            room,
            nick,
            quiet,
            debug,
        } => {
            let config = SessionConfig::from_env(jid, password, room, nick);
            init_tracing(config.log_file.as_deref(), default_level(quiet, debug))
                .context("Initialize tracing subscriber")?;

            let registry = build_registry().context("Register bundled responders")?;
            info!(responders = registry.len(), nick = %config.nick, "starting bot");

            let engine = DispatchEngine::new(Arc::new(registry));
            let adapter = SessionAdapter::new(engine, ConsoleTransport, config.nick.clone());

            println!(
                "mucbot console session (nick: {}). Type a message; use '/msg <text>' for private. Ctrl-D to quit.",
                config.nick
            );
            run_console(&adapter, "you").await?;
            Ok(())
        }
    }
}
