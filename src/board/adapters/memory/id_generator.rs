//! Task identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Generates random version 4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIdGenerator;

impl TaskIdGenerator for UuidTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::new()
    }
}

/// Generates identifiers from a monotonic counter.
///
/// Identifiers are dense and strictly increasing, which keeps test output
/// and logs reproducible. The counter never wraps: once sequence number
/// `u64::MAX - 1` has been issued, further identifiers are random version 4
/// UUIDs, which lie outside the sequence range.
#[derive(Debug)]
pub struct SequentialTaskIdGenerator {
    next: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier is sequence number 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier is sequence number `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_or_else(|_| TaskId::new(), TaskId::from_sequence)
    }
}
