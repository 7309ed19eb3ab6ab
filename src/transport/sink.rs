//! Transport write seams.
//!
//! Two write paths exist per client: a plain fire-and-forget sink and an
//! SSL channel whose writes can fail synchronously. Both are capabilities
//! owned by the host's connection layer; the pipeline only pushes bytes.

use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::Result;

/// Capability: unencrypted transport, fire-and-forget.
///
/// The sink owns buffering and asynchronous completion; partial-write
/// handling is its contract, not the pipeline's.
pub trait TransportSink {
    /// Queue a complete frame for delivery.
    fn send(&mut self, frame: &[u8]);
}

/// Capability: SSL-wrapped transport with synchronous failure reporting.
pub trait SecureChannel {
    /// Write a complete frame. `Err` means the write failed and the frame
    /// was not delivered; the pipeline drops the send and does not retry.
    fn write(&mut self, frame: &[u8]) -> Result<usize>;
}

/// [`TransportSink`] backed by an unbounded channel.
///
/// The host's transport task drains the receiver and performs the actual
/// socket writes, keeping the event loop free of I/O waits. Sends never
/// block; if the receiver is gone the frame is dropped and a debug event
/// records it.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Bytes>,
}

impl ChannelSink {
    /// Create a sink plus the receiver the transport task drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl TransportSink for ChannelSink {
    fn send(&mut self, frame: &[u8]) {
        if self.tx.send(Bytes::copy_from_slice(frame)).is_err() {
            debug!(bytes = frame.len(), "transport receiver gone, frame dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sink_enqueues_frames_verbatim() {
        let (mut sink, mut rx) = ChannelSink::new();
        sink.send(b"frame-1");
        sink.send(b"frame-2");

        assert_eq!(rx.try_recv().expect("first frame").as_ref(), b"frame-1");
        assert_eq!(rx.try_recv().expect("second frame").as_ref(), b"frame-2");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let (mut sink, rx) = ChannelSink::new();
        drop(rx);
        sink.send(b"lost");
    }
}
