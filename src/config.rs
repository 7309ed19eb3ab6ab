//! # Configuration Management
//!
//! Centralized configuration for the outbound gateway pipeline.
//!
//! This module provides structured configuration for the send path,
//! including payload guards, diagnostic verbosity, and logging options.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides
//!
//! ## Security Considerations
//! - The payload size guard (16 MB default) bounds per-send allocations
//! - Payload logging is off by default; chat bodies land in logs otherwise

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{GatewayError, Result};

/// Max allowed serialized payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Main gateway configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GatewayConfig {
    /// Outbound pipeline configuration
    #[serde(default)]
    pub outbound: OutboundConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(size) = std::env::var("GATEWAY_PROTOCOL_MAX_PAYLOAD_SIZE") {
            if let Ok(val) = size.parse::<usize>() {
                config.outbound.max_payload_size = val;
            }
        }

        if let Ok(flag) = std::env::var("GATEWAY_PROTOCOL_LOG_PAYLOADS") {
            config.outbound.log_payloads = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        if let Ok(level) = std::env::var("GATEWAY_PROTOCOL_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Check invariants the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if self.outbound.max_payload_size == 0 {
            return Err(GatewayError::ConfigError(
                "outbound.max_payload_size must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Send-path settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutboundConfig {
    /// Upper bound on one serialized message; larger sends are dropped
    pub max_payload_size: usize,

    /// Log full JSON bodies on the success path (diagnostics only)
    pub log_payloads: bool,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
            log_payloads: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.outbound.max_payload_size, MAX_PAYLOAD_SIZE);
        assert!(!config.outbound.log_payloads);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn toml_roundtrip() {
        let toml = r#"
            [outbound]
            max_payload_size = 4096
            log_payloads = true

            [logging]
            level = "debug"
        "#;
        let config = GatewayConfig::from_toml(toml).unwrap();
        assert_eq!(config.outbound.max_payload_size, 4096);
        assert!(config.outbound.log_payloads);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = GatewayConfig::from_toml("[logging]\nlevel = \"trace\"").unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.outbound.max_payload_size, MAX_PAYLOAD_SIZE);
    }

    #[test]
    fn zero_payload_guard_is_rejected() {
        let result = GatewayConfig::from_toml("[outbound]\nmax_payload_size = 0");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_apply() {
        let config = GatewayConfig::default_with_overrides(|c| {
            c.outbound.log_payloads = true;
        });
        assert!(config.outbound.log_payloads);
    }

    #[test]
    fn env_overrides_apply() {
        std::env::set_var("GATEWAY_PROTOCOL_MAX_PAYLOAD_SIZE", "2048");
        std::env::set_var("GATEWAY_PROTOCOL_LOG_PAYLOADS", "true");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.outbound.max_payload_size, 2048);
        assert!(config.outbound.log_payloads);

        std::env::remove_var("GATEWAY_PROTOCOL_MAX_PAYLOAD_SIZE");
        std::env::remove_var("GATEWAY_PROTOCOL_LOG_PAYLOADS");
    }
}
