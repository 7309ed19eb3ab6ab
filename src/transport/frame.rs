//! WebSocket frame encoding seam.
//!
//! The pipeline decides *what* goes on the wire — text frames for plain
//! JSON, binary frames for ciphertext — while the actual RFC 6455 framing
//! lives with the host's WebSocket layer behind [`FrameEncoder`].

use bytes::Bytes;

/// WebSocket opcodes the outbound pipeline emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Text frame — plaintext JSON payloads.
    Text = 0x1,
    /// Binary frame — encrypted payloads.
    Binary = 0x2,
}

impl Opcode {
    /// The opcode nibble as it appears in the frame header.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Capability: wrap a payload in a WebSocket frame.
///
/// Implementations are expected to be total — framing a server-to-client
/// payload has no failure modes once opcode and payload are fixed.
pub trait FrameEncoder {
    /// Build a complete frame carrying `payload` with the given opcode.
    fn encode(&self, opcode: Opcode, payload: &[u8]) -> Bytes;
}
