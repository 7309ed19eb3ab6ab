//! # Error Types
//!
//! Error handling for the outbound gateway pipeline.
//!
//! This module defines all error variants that can occur while preparing or
//! delivering a message to a WebSocket front-end, from missing client state
//! to encryption and transport failures.
//!
//! ## Error Categories
//! - **Readiness Errors**: client not yet authenticated or handshaken
//! - **Resource Errors**: missing transport handle, missing encryption key
//! - **Operation Errors**: encryption failures, transport write failures
//! - **Configuration Errors**: malformed config files or values
//!
//! The send path never surfaces these to its caller — every failure is
//! logged and the single affected delivery is dropped (see
//! `protocol::send`). The variants exist so capability implementors and
//! the internal pipeline stages can report failures precisely.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Readiness errors
    pub const ERR_CLIENT_MISSING: &str = "Client is not present";
    pub const ERR_NOT_READY: &str = "Client not ready for delivery";
    pub const ERR_HANDSHAKE_PENDING: &str = "WebSocket handshake not done";

    /// Resource errors
    pub const ERR_HANDLE_MISSING: &str = "Client transport handle is not bound";
    pub const ERR_KEY_UNAVAILABLE: &str = "Encryption key not available";

    /// Operation errors
    pub const ERR_ENCRYPTION_FAILED: &str = "Encryption failed";
    pub const ERR_SSL_WRITE_FAILED: &str = "SSL write failed";

    /// Payload guards
    pub const ERR_OVERSIZED_PAYLOAD: &str = "Serialized payload exceeds maximum size";
}

// GatewayError is the primary error type for all outbound pipeline operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Client not ready (auth:{authenticated} handshake:{handshake_done})")]
    NotReady {
        authenticated: bool,
        handshake_done: bool,
    },

    #[error("Transport handle is not bound")]
    MissingHandle,

    #[error("Encryption key not available")]
    KeyUnavailable,

    #[error("Encryption failed")]
    EncryptionFailure,

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Payload too large: {0} bytes")]
    OversizedPayload(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;
