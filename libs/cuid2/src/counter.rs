//! Per-instance monotonic counter with wraparound.
//!
//! The counter is the only shared mutable state in the generator. Every
//! call to [`CounterService::next`] observes a distinct pre-increment value
//! until the counter wraps past [`COUNTER_MAX`] back to zero.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

/// Largest value the counter yields before wrapping back to zero.
pub const COUNTER_MAX: u64 = 1_000_000;

/// Atomic get-and-increment counter.
#[derive(Debug, Default)]
pub struct CounterService {
    value: AtomicU64,
}

impl CounterService {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter starting at `initial`, clamped to [`COUNTER_MAX`].
    #[must_use]
    pub fn starting_at(initial: u64) -> Self {
        Self {
            value: AtomicU64::new(initial.min(COUNTER_MAX)),
        }
    }

    /// Returns the current value and advances the counter.
    ///
    /// After [`COUNTER_MAX`] has been returned the next value is zero.
    pub fn next(&self) -> u64 {
        let previous = self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(advance(current))
            })
            // The closure always returns Some, so fetch_update cannot fail.
            .unwrap_or_else(|current| current);

        if previous == COUNTER_MAX {
            trace!(counter_max = COUNTER_MAX, "counter wrapped around");
        }

        previous
    }

    /// Returns the value the next call to [`next`](Self::next) will yield.
    pub fn peek(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

fn advance(current: u64) -> u64 {
    if current < COUNTER_MAX {
        current + 1
    } else {
        0
    }
}
