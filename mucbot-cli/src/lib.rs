//! # mucbot-cli
//!
//! CLI foundation: argument parsing, verbosity mapping, bundled registry
//! construction. The binary lives in main.rs.

pub mod cli;

pub use cli::{build_registry, default_level, Cli, Commands};
