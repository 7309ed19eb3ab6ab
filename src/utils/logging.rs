//! Structured logging configuration.
//!
//! The host's diagnostic sink is `tracing`; every drop decision in the
//! send path emits an event with the client id and message kind attached
//! as fields. This module only wires up a subscriber for hosts that do
//! not install their own.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{GatewayError, Result};

/// Install a global fmt subscriber honoring `RUST_LOG`, falling back to
/// the level from config.
///
/// # Errors
/// Returns `ConfigError` if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| GatewayError::ConfigError(format!("failed to install subscriber: {e}")))
}
