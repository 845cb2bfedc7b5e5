//! Tracing initialization: fmt layer on stderr with EnvFilter.
//!
//! Logs go to stderr so interactive chat output on stdout stays clean. The level
//! comes from RUST_LOG (e.g. info, debug, trace); unset defaults to info. Load
//! .env (dotenvy::dotenv()) before calling or RUST_LOG from .env has no effect.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the global tracing subscriber. Call once from the binary.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
