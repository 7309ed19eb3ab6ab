//! # Gateway Protocol
//!
//! Outbound message pipeline for bridging an IRC client's event stream to
//! WebSocket-connected front-ends.
//!
//! An internal event becomes a typed [`Message`], is serialized to the
//! canonical wire JSON, optionally encrypted, framed, and delivered to one
//! or many authenticated clients — without blocking the host event loop
//! and without one client's failure affecting another.
//!
//! ## Modules
//! - [`core`]: message model, ID generation, escaping, wire JSON
//! - [`protocol`]: per-client send pipeline and registry fanout
//! - [`transport`]: framing and write capability seams to the host
//! - [`utils`]: crypto, logging, metrics, time
//! - [`config`]: TOML/env configuration
//! - [`error`]: error types
//!
//! ## Example
//! ```rust
//! use gateway_protocol::{Message, MessageIdGenerator, MessageType};
//!
//! let mut ids = MessageIdGenerator::new();
//! let msg = Message::builder(MessageType::Chat)
//!     .id(ids.next_id())
//!     .server("libera")
//!     .target("#rust")
//!     .nick("ferris")
//!     .text("hello from the gateway")
//!     .build();
//!
//! let json = msg.to_json();
//! assert!(json.starts_with("{\"id\":\""));
//! ```
//!
//! ## Boundaries
//! WebSocket handshaking and frame layout, TLS session establishment, and
//! the host's connection lifecycle stay outside this crate; they plug in
//! through the capability traits in [`transport`] and [`utils::crypto`].

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

pub use self::config::GatewayConfig;
pub use self::core::escape::escape_json;
pub use self::core::id::MessageIdGenerator;
pub use self::core::message::{ExtraValue, Message, MessageBuilder, MessageType};
pub use self::error::{GatewayError, Result};
pub use self::protocol::client::{Client, ClientRegistry};
pub use self::protocol::send::Sender;
