//! Tracing initialization: console and optional file output share one fmt layer
//! format (level, target, span, all fields).

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
///
/// Level comes from `RUST_LOG` when set, otherwise `default_level` (which the
/// CLI derives from its -q/-d flags). When `log_file_path` is given the same
/// output is teed to stdout and the file. Load `.env` (dotenvy) before calling
/// this or `RUST_LOG` from the file will not apply.
pub fn init_tracing(log_file_path: Option<&str>, default_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            let writer = io::stdout.and(file);

            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false);

            Registry::default()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
        None => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stdout)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false);

            Registry::default()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
    }

    Ok(())
}
