//! # Transport Seams
//!
//! Capability traits between the pipeline and the host's connection layer.
//!
//! The pipeline never touches sockets. It frames payloads through
//! [`frame::FrameEncoder`] and hands complete frames to per-client write
//! capabilities: a fire-and-forget [`sink::TransportSink`] for plain
//! connections and a [`sink::SecureChannel`] for SSL ones.
//!
//! ## Components
//! - **Frame**: opcode selection and the framing capability
//! - **Sink**: plain and SSL write capabilities, plus a channel-backed
//!   sink for hosts running the transport on a separate task

pub mod frame;
pub mod sink;

pub use frame::{FrameEncoder, Opcode};
pub use sink::{ChannelSink, SecureChannel, TransportSink};
