#![forbid(unsafe_code)]

//! Synchronous broadcast of written values to registered observers.
//!
//! # Design
//!
//! [`Notifier<T>`] keeps an ordered registry of subscriber callbacks in
//! shared, reference-counted storage. [`publish()`](Notifier::publish)
//! invokes every live callback in subscription order and returns only after
//! the last one has returned — delivery is synchronous and in-thread with the
//! publisher, never queued.
//!
//! Each callback is paired with a `Weak` liveness token whose strong half
//! lives inside the returned [`Subscription`]. Dropping the subscription
//! kills the token; dead registry entries are skipped at delivery time and
//! pruned lazily during publish.
//!
//! # Invariants
//!
//! 1. Callbacks are invoked in subscription order.
//! 2. A subscriber registered after N publishes observes publishes N+1
//!    onward only (no replay buffer).
//! 3. Once `Subscription::cancel()` (or drop) returns, the callback is never
//!    invoked for any later publish. A cancellation that lands mid-publish
//!    also suppresses the in-flight delivery to that subscriber if its turn
//!    has not yet come.
//! 4. Callbacks may reentrantly subscribe or cancel without corrupting the
//!    registry; a subscriber added during a publish first hears the *next*
//!    publish.
//!
//! # Failure Modes
//!
//! - **Slow callback**: blocks the publisher for its full duration. There is
//!   no backpressure or timeout; keeping callbacks short is the caller's
//!   responsibility.
//! - **Callback panics**: the panic propagates to the publisher;
//!   later subscribers in the same publish are not invoked, and the registry
//!   is left intact (un-pruned) for the next publish.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Entry<T> {
    /// Dead once the owning [`Subscription`] has been dropped.
    alive: Weak<()>,
    callback: Callback<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            alive: Weak::clone(&self.alive),
            callback: Rc::clone(&self.callback),
        }
    }
}

/// An in-process broadcast channel delivering each published value to every
/// live subscriber, in subscription order.
///
/// Cloning a `Notifier` creates a new handle to the **same** registry.
pub struct Notifier<T> {
    subscribers: Rc<RefCell<Vec<Entry<T>>>>,
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T> Notifier<T> {
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register an observer. It is invoked, in registration order relative to
    /// other subscribers, for every value published while the returned
    /// [`Subscription`] is alive.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let token = Rc::new(());
        self.subscribers.borrow_mut().push(Entry {
            alive: Rc::downgrade(&token),
            callback: Rc::new(observer),
        });
        Subscription { _token: token }
    }

    /// Deliver `value` to every live subscriber, in subscription order.
    ///
    /// Returns only after all callbacks invoked for this value have
    /// returned. The registry is snapshotted up front, so callbacks may
    /// subscribe or cancel reentrantly; liveness is re-checked immediately
    /// before each delivery.
    pub fn publish(&self, value: &T) {
        let snapshot: Vec<Entry<T>> = self.subscribers.borrow().clone();
        for entry in &snapshot {
            if entry.alive.strong_count() > 0 {
                (entry.callback)(value);
            }
        }
        self.subscribers
            .borrow_mut()
            .retain(|entry| entry.alive.strong_count() > 0);
    }

    /// Number of currently live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|entry| entry.alive.strong_count() > 0)
            .count()
    }
}

/// RAII cancellation handle for one subscriber.
///
/// Dropping the handle cancels the subscription: no delivery happens for any
/// value published after the drop returns. In-flight deliveries already
/// dispatched are unaffected.
#[must_use = "dropping a Subscription immediately cancels it"]
pub struct Subscription {
    _token: Rc<()>,
}

impl Subscription {
    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
