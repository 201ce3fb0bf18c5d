use std::time::Duration;
use thiserror::Error;

/// Registration-time errors. Fatal to startup: the process refuses to run
/// with a broken registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate responder name: {0}")]
    DuplicateName(String),

    #[error("invalid pattern for responder {name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("responder has an empty name")]
    EmptyName,

    #[error("responder {0} allows neither private nor group context")]
    NoContext(String),
}

/// Dispatch-time failure of a single responder. Caught and logged by the
/// engine, never surfaced to the sender, never aborts dispatch.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("{0}")]
    Failed(String),

    #[error("missing capture group {0}")]
    MissingCapture(usize),

    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Responder error: {0}")]
    Responder(#[from] ResponderError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
