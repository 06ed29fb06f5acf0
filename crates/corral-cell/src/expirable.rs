#![forbid(unsafe_code)]

//! Cell whose value expires after a time-to-live.

use std::cell::RefCell;
use std::time::{Duration, Instant};

/// A value that reads back as `None` once `ttl` has elapsed since the last
/// write.
///
/// The cell starts empty. Expiry is checked lazily on read against a
/// monotonic clock; an expired slot is cleared by the read that observes the
/// expiry, so the stale value is dropped rather than retained indefinitely.
/// No notification channel — expiry is observable only by reading.
pub struct Expirable<T> {
    slot: RefCell<Option<(T, Instant)>>,
    ttl: Duration,
}

impl<T: Clone> Expirable<T> {
    /// Create an empty cell whose values live for `ttl` after each write.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RefCell::new(None),
            ttl,
        }
    }

    /// The stored value, or `None` if nothing was written or the last write
    /// has expired.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        let mut slot = self.slot.borrow_mut();
        let expired = matches!(&*slot, Some((_, written)) if written.elapsed() > self.ttl);
        if expired {
            *slot = None;
            return None;
        }
        slot.as_ref().map(|(value, _)| value.clone())
    }

    /// Store `value`, restarting the expiry clock.
    pub fn set(&mut self, value: T) {
        *self.slot.get_mut() = Some((value, Instant::now()));
    }

    /// Drop the stored value, if any, without waiting for expiry.
    pub fn clear(&mut self) {
        *self.slot.get_mut() = None;
    }

    /// The configured time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
