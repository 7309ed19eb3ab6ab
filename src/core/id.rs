//! Message ID generation.
//!
//! IDs are `"<unix-seconds>-<counter>"` where the counter is four
//! zero-padded digits wrapping back to 0 at 10000. Uniqueness therefore
//! holds only within one wall-clock second and only for the first 10000
//! IDs issued in that second. That weak contract is deliberate — front-end
//! clients use IDs to correlate responses, not as global keys.

use crate::utils::time::unix_now;

/// Default counter wrap boundary — keeps the counter at four digits.
pub const COUNTER_WRAP: u32 = 10_000;

/// Stateful generator for outbound message IDs.
///
/// The counter is explicit state owned by the host (typically one
/// generator per process), not a hidden static, so tests and embedders
/// control initialization and reset.
#[derive(Debug)]
pub struct MessageIdGenerator {
    counter: u32,
    wrap: u32,
}

impl MessageIdGenerator {
    /// Create a generator with the counter at zero.
    pub fn new() -> Self {
        Self::with_wrap(COUNTER_WRAP)
    }

    /// Create a generator with a custom wrap boundary.
    ///
    /// The wire contract fixes this at 10000; other values exist for tests.
    pub fn with_wrap(wrap: u32) -> Self {
        Self { counter: 0, wrap }
    }

    /// Produce the next ID using the current wall clock.
    pub fn next_id(&mut self) -> String {
        self.next_id_at(unix_now())
    }

    /// Produce the next ID for an explicit timestamp.
    ///
    /// Deterministic variant used by `next_id` and by tests that need to
    /// pin the wall-clock second.
    pub fn next_id_at(&mut self, now: i64) -> String {
        let id = format!("{}-{:04}", now, self.counter);

        self.counter += 1;
        if self.counter >= self.wrap {
            self.counter = 0;
        }

        id
    }

    /// Reset the counter to zero.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

impl Default for MessageIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_timestamp_dash_counter() {
        let mut gen = MessageIdGenerator::new();
        assert_eq!(gen.next_id_at(1700000000), "1700000000-0000");
        assert_eq!(gen.next_id_at(1700000000), "1700000000-0001");
        assert_eq!(gen.next_id_at(1700000001), "1700000001-0002");
    }

    #[test]
    fn counter_wraps_at_boundary() {
        let mut gen = MessageIdGenerator::with_wrap(3);
        assert_eq!(gen.next_id_at(42), "42-0000");
        assert_eq!(gen.next_id_at(42), "42-0001");
        assert_eq!(gen.next_id_at(42), "42-0002");
        // wrapped — collides with the first ID of this second
        assert_eq!(gen.next_id_at(42), "42-0000");
    }

    #[test]
    fn reset_restarts_the_counter() {
        let mut gen = MessageIdGenerator::new();
        let first = gen.next_id_at(7);
        gen.next_id_at(7);
        gen.reset();
        assert_eq!(gen.next_id_at(7), first);
    }

    #[test]
    fn wall_clock_ids_parse_back() {
        let mut gen = MessageIdGenerator::new();
        let id = gen.next_id();
        let (secs, counter) = id.split_once('-').expect("dash separator");
        assert!(secs.parse::<i64>().is_ok());
        assert_eq!(counter.len(), 4);
        assert!(counter.parse::<u32>().is_ok());
    }
}
