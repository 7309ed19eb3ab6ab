//! Observability and Metrics
//!
//! This module provides metrics collection for the outbound pipeline:
//! deliveries, bytes on the wire and every distinct drop reason.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Global metrics collector for outbound delivery
#[derive(Debug)]
pub struct Metrics {
    /// Messages delivered to a client
    pub messages_sent: AtomicU64,
    /// Frame bytes written
    pub bytes_sent: AtomicU64,
    /// Sends dropped: client missing or not ready
    pub dropped_not_ready: AtomicU64,
    /// Sends dropped: transport handle not bound
    pub dropped_no_handle: AtomicU64,
    /// Sends dropped: encryption key unavailable
    pub dropped_no_key: AtomicU64,
    /// Sends dropped: payload over the size guard
    pub dropped_oversized: AtomicU64,
    /// Total encryption operations
    pub encryption_total: AtomicU64,
    /// Successful encryption operations
    pub encryption_success: AtomicU64,
    /// Encryption failures
    pub encryption_failed: AtomicU64,
    /// Transport write failures
    pub transport_errors: AtomicU64,
    /// Fanout traversals of the client registry
    pub fanout_total: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            messages_sent: AtomicU64::new(0),
            bytes_sent: AtomicU64::new(0),
            dropped_not_ready: AtomicU64::new(0),
            dropped_no_handle: AtomicU64::new(0),
            dropped_no_key: AtomicU64::new(0),
            dropped_oversized: AtomicU64::new(0),
            encryption_total: AtomicU64::new(0),
            encryption_success: AtomicU64::new(0),
            encryption_failed: AtomicU64::new(0),
            transport_errors: AtomicU64::new(0),
            fanout_total: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a message delivered
    pub fn message_sent(&self, byte_count: u64) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a send dropped at the readiness gate
    pub fn drop_not_ready(&self) {
        self.dropped_not_ready.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a send dropped for a missing transport handle
    pub fn drop_no_handle(&self) {
        self.dropped_no_handle.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a send dropped for a missing encryption key
    pub fn drop_no_key(&self) {
        self.dropped_no_key.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a send dropped by the payload size guard
    pub fn drop_oversized(&self) {
        self.dropped_oversized.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an encryption attempt
    pub fn encryption_attempt(&self) {
        self.encryption_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful encryption
    pub fn encryption_success(&self) {
        self.encryption_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed encryption
    pub fn encryption_failed(&self) {
        self.encryption_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a transport write failure
    pub fn transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fanout traversal
    pub fn fanout_traversal(&self) {
        self.fanout_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            dropped_not_ready: self.dropped_not_ready.load(Ordering::Relaxed),
            dropped_no_handle: self.dropped_no_handle.load(Ordering::Relaxed),
            dropped_no_key: self.dropped_no_key.load(Ordering::Relaxed),
            dropped_oversized: self.dropped_oversized.load(Ordering::Relaxed),
            encryption_total: self.encryption_total.load(Ordering::Relaxed),
            encryption_success: self.encryption_success.load(Ordering::Relaxed),
            encryption_failed: self.encryption_failed.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            fanout_total: self.fanout_total.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            messages_sent = snapshot.messages_sent,
            bytes_sent = snapshot.bytes_sent,
            dropped_not_ready = snapshot.dropped_not_ready,
            dropped_no_handle = snapshot.dropped_no_handle,
            dropped_no_key = snapshot.dropped_no_key,
            dropped_oversized = snapshot.dropped_oversized,
            encryption_total = snapshot.encryption_total,
            encryption_success = snapshot.encryption_success,
            encryption_failed = snapshot.encryption_failed,
            transport_errors = snapshot.transport_errors,
            fanout_total = snapshot.fanout_total,
            uptime_seconds = snapshot.uptime_seconds,
            "Outbound metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub messages_sent: u64,
    pub bytes_sent: u64,
    pub dropped_not_ready: u64,
    pub dropped_no_handle: u64,
    pub dropped_no_key: u64,
    pub dropped_oversized: u64,
    pub encryption_total: u64,
    pub encryption_success: u64,
    pub encryption_failed: u64,
    pub transport_errors: u64,
    pub fanout_total: u64,
    pub uptime_seconds: u64,
}

/// Global metrics instance (lazy static for simplicity)
static METRICS: once_cell::sync::Lazy<Metrics> = once_cell::sync::Lazy::new(Metrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}
