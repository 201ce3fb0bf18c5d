//! CLI parser, verbosity mapping and registry construction.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use mucbot_core::RegistryError;
use responder_chain::Registry;
use responders::{EchoResponder, GreeterResponder, PingResponder, TimeResponder};

#[derive(Parser)]
#[command(name = "mucbot")]
#[command(about = "Plugin based MUC bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot on a local console session (config from env; flags override).
    Run {
        /// Account JID (overrides MUC_JID).
        #[arg(short, long)]
        jid: Option<String>,
        /// Account password (overrides MUC_PASSWORD).
        #[arg(short, long)]
        password: Option<String>,
        /// Room to join (overrides MUC_ROOM).
        #[arg(short, long)]
        room: Option<String>,
        /// Bot nickname (overrides MUC_NICK; default "anna").
        #[arg(short, long)]
        nick: Option<String>,
        /// Set logging to error only.
        #[arg(short, long)]
        quiet: bool,
        /// Set logging to debug.
        #[arg(short, long)]
        debug: bool,
    },
}

/// Default log level for the -q/-d flags; RUST_LOG still wins when set.
pub fn default_level(quiet: bool, debug: bool) -> &'static str {
    if quiet {
        "error"
    } else if debug {
        "debug"
    } else {
        "info"
    }
}

/// Builds the registry with the bundled responder set, in a fixed order.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    registry.register(Arc::new(GreeterResponder))?;
    registry.register(Arc::new(PingResponder))?;
    registry.register(Arc::new(EchoResponder))?;
    registry.register(Arc::new(TimeResponder))?;
    Ok(registry)
}
