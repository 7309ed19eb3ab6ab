//! # Delivery Protocol
//!
//! The gated, failure-tolerant path from a built [`Message`] to one or
//! many connected clients.
//!
//! ## Components
//! - **Client**: per-connection state the pipeline gates on, and the
//!   process-wide registry
//! - **Send**: the single-client pipeline — gate, serialize, encrypt,
//!   frame, transmit, count
//! - **Fanout**: registry traversals with server/broadcast filters
//!
//! ## Failure Policy
//! Fail one, continue all: every per-client failure is logged and dropped
//! inside the send path. Neither [`send::Sender::send`] nor the fanout
//! traversals return errors.
//!
//! [`Message`]: crate::core::message::Message

pub mod client;
pub mod fanout;
pub mod send;


pub use client::{Client, ClientRegistry};
pub use send::Sender;
