//! Tracing setup for programs embedding the resolver.
//!
//! The library only emits events; call [`init`] once at startup to see them.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber with default configuration.
///
/// Reads the level filter from `RUST_LOG`, defaulting to `info`. Resolution
/// details are logged at `debug`, individual field assignments at `trace`
/// (`RUST_LOG=velox_params=trace`).
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
