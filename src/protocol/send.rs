//! Per-client send pipeline.
//!
//! One call, one client, one message: gate on client readiness, serialize,
//! optionally encrypt, frame, transmit, count. Every failure along the way
//! is terminal for that single delivery only — it logs with the client id
//! and message kind, drops the frame, and returns. Nothing propagates to
//! the caller, so a broken client can never stall a fanout.

use tracing::{debug, error};

use crate::config::OutboundConfig;
use crate::core::message::{Message, MessageType};
use crate::error::constants;
use crate::protocol::client::Client;
use crate::transport::{FrameEncoder, Opcode};
use crate::utils::crypto::MessageCipher;
use crate::utils::metrics::global_metrics;

/// The outbound sender: framing and cipher capabilities plus send-path
/// settings, shared across all clients.
pub struct Sender {
    frames: Box<dyn FrameEncoder>,
    cipher: Box<dyn MessageCipher>,
    max_payload_size: usize,
    log_payloads: bool,
}

impl Sender {
    /// Build a sender with default settings.
    pub fn new(frames: Box<dyn FrameEncoder>, cipher: Box<dyn MessageCipher>) -> Self {
        Self::from_config(frames, cipher, &OutboundConfig::default())
    }

    /// Build a sender honoring `[outbound]` config.
    pub fn from_config(
        frames: Box<dyn FrameEncoder>,
        cipher: Box<dyn MessageCipher>,
        config: &OutboundConfig,
    ) -> Self {
        Self {
            frames,
            cipher,
            max_payload_size: config.max_payload_size,
            log_payloads: config.log_payloads,
        }
    }

    /// Deliver one message to one client.
    ///
    /// Readiness gates, in order:
    /// - the client must be present at all;
    /// - `auth_ok` requires only a completed WebSocket handshake (it is
    ///   the message that establishes `authenticated`, so it cannot
    ///   require it);
    /// - every other kind requires `authenticated` and `handshake_done`;
    /// - the transport handle must be bound.
    ///
    /// After the gates: serialize, encrypt when the client negotiated it
    /// (binary frame) or frame the plaintext (text frame), then write via
    /// the SSL channel when `use_ssl` and one is bound, else the plain
    /// sink. The per-client counter moves only on full success.
    pub fn send(&self, client: Option<&mut Client>, msg: &Message) {
        let metrics = global_metrics();
        let kind = msg.kind().as_str();

        let Some(client) = client else {
            error!(kind, "{}", constants::ERR_CLIENT_MISSING);
            metrics.drop_not_ready();
            return;
        };

        if msg.kind() == MessageType::AuthOk {
            // auth_ok precedes the authenticated flag; only the WebSocket
            // handshake must be done
            if !client.handshake_done {
                error!(client = %client.id, kind, "{}", constants::ERR_HANDSHAKE_PENDING);
                metrics.drop_not_ready();
                return;
            }
        } else if !client.authenticated || !client.handshake_done {
            debug!(
                client = %client.id,
                kind,
                authenticated = client.authenticated,
                handshake_done = client.handshake_done,
                "{}",
                constants::ERR_NOT_READY
            );
            metrics.drop_not_ready();
            return;
        }

        if client.handle.is_none() {
            error!(client = %client.id, kind, "{}", constants::ERR_HANDLE_MISSING);
            metrics.drop_no_handle();
            return;
        }

        let json = msg.to_json();

        if json.len() > self.max_payload_size {
            error!(
                client = %client.id,
                kind,
                bytes = json.len(),
                limit = self.max_payload_size,
                "{}",
                constants::ERR_OVERSIZED_PAYLOAD
            );
            metrics.drop_oversized();
            return;
        }

        if self.log_payloads {
            debug!(client = %client.id, kind, payload = %json, "sending");
        } else {
            debug!(client = %client.id, kind, bytes = json.len(), "sending");
        }

        let frame = if client.encryption_enabled {
            let Some(key) = self.cipher.key() else {
                error!(client = %client.id, kind, "{}", constants::ERR_KEY_UNAVAILABLE);
                metrics.drop_no_key();
                return;
            };

            metrics.encryption_attempt();
            let ciphertext = match self.cipher.encrypt(json.as_bytes(), &key) {
                Ok(ciphertext) => ciphertext,
                Err(e) => {
                    error!(client = %client.id, kind, error = %e, "{}", constants::ERR_ENCRYPTION_FAILED);
                    metrics.encryption_failed();
                    return;
                }
            };
            metrics.encryption_success();
            debug!(
                client = %client.id,
                kind,
                plaintext_bytes = json.len(),
                ciphertext_bytes = ciphertext.len(),
                "encrypted payload"
            );

            self.frames.encode(Opcode::Binary, &ciphertext)
        } else {
            self.frames.encode(Opcode::Text, json.as_bytes())
        };

        match (client.use_ssl, client.ssl_channel.as_mut()) {
            (true, Some(ssl)) => {
                if let Err(e) = ssl.write(&frame) {
                    error!(client = %client.id, kind, error = %e, "{}", constants::ERR_SSL_WRITE_FAILED);
                    metrics.transport_error();
                    return;
                }
            }
            _ => {
                // handle presence was gated above; fire-and-forget
                if let Some(handle) = client.handle.as_mut() {
                    handle.send(&frame);
                }
            }
        }

        debug!(
            client = %client.id,
            kind,
            frame_bytes = frame.len(),
            ssl = client.use_ssl,
            encrypted = client.encryption_enabled,
            "sent"
        );

        client.messages_sent += 1;
        metrics.message_sent(frame.len() as u64);
    }
}

impl std::fmt::Debug for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sender")
            .field("max_payload_size", &self.max_payload_size)
            .field("log_payloads", &self.log_payloads)
            .finish()
    }
}
