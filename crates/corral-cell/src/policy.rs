#![forbid(unsafe_code)]

//! The shared write-policy core every policy cell instantiates.
//!
//! # Design
//!
//! [`PolicyCell<T>`] owns the current value, an immutable policy function,
//! and a [`Notifier`]. A write runs the policy over the incoming value,
//! stores whatever the policy yields, then publishes the stored value.
//!
//! The policy receives the *current* value alongside the incoming one and
//! always yields the value to store **and** publish. This single shape covers
//! accepting policies (clamp, round, transform ignore the current value)
//! and rejecting ones (validation yields the unchanged current value), so a
//! vetoed write still publishes: observers hear the outcome of every write
//! attempt, not just state changes.
//!
//! # Invariants
//!
//! 1. The stored value is either the constructor-supplied initial value or
//!    a policy output; after the first write, always the latter.
//! 2. `set()` publishes exactly once per call, after the store completes.
//! 3. Publish order equals write order.

use crate::notify::{Notifier, Subscription};

type Policy<T> = Box<dyn Fn(&T, T) -> T>;

/// A value cell that filters every write through a fixed policy and
/// broadcasts the stored result.
///
/// The concrete cells in this crate (`Clamped`, `Validated`, ...) wrap a
/// `PolicyCell` together with their immutable configuration. The policy is
/// expected to be pure; initial-value handling is the wrapping cell's
/// responsibility (see [`new()`](PolicyCell::new)).
pub struct PolicyCell<T> {
    value: T,
    policy: Policy<T>,
    notifier: Notifier<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for PolicyCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyCell")
            .field("value", &self.value)
            .field("subscribers", &self.notifier.subscriber_count())
            .finish()
    }
}

impl<T> PolicyCell<T> {
    /// Create a cell storing `initial` as-is.
    ///
    /// Callers are responsible for initial-value handling — the per-policy
    /// cells differ here (clamp/round/transform apply their policy first,
    /// validate/normalize assert a precondition instead), so no policy is run
    /// by this constructor.
    pub fn new(initial: T, policy: impl Fn(&T, T) -> T + 'static) -> Self {
        Self {
            value: initial,
            policy: Box::new(policy),
            notifier: Notifier::new(),
        }
    }

    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }

    /// Run the policy over `incoming`, store the result, publish it.
    pub fn set(&mut self, incoming: T) {
        self.set_observed(incoming, |_| {});
    }

    /// Like [`set()`](Self::set), with a hook invoked after the store and
    /// before the publish. Used by `Logged` for its write observer.
    pub(crate) fn set_observed(&mut self, incoming: T, after_store: impl FnOnce(&T)) {
        self.value = (self.policy)(&self.value, incoming);
        after_store(&self.value);
        self.notifier.publish(&self.value);
    }

    /// Register an observer for every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        self.notifier.subscribe(observer)
    }

    /// Number of live subscriptions on this cell's channel.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.notifier.subscriber_count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn policy_runs_on_every_write() {
        let mut cell = PolicyCell::new(0, |_, v: i32| v * 2);
        cell.set(3);
        assert_eq!(cell.get(), 6);
        cell.set(-4);
        assert_eq!(cell.get(), -8);
    }

    #[test]
    fn rejecting_policy_republishes_current_value() {
        // A veto policy yields the unchanged current value, which must still
        // be published.
        let mut cell = PolicyCell::new(
            10,
            |current: &i32, incoming| if incoming > 0 { incoming } else { *current },
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| s.borrow_mut().push(*v));

        cell.set(-1);
        cell.set(5);

        assert_eq!(cell.get(), 5);
        assert_eq!(*seen.borrow(), vec![10, 5]);
    }

    #[test]
    fn with_borrows_without_cloning() {
        let cell = PolicyCell::new(vec![1, 2, 3], |_, v: Vec<i32>| v);
        let sum: i32 = cell.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn late_subscriber_misses_earlier_writes() {
        let mut cell = PolicyCell::new(0, |_, v: i32| v);
        cell.set(1);
        cell.set(2);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| s.borrow_mut().push(*v));

        cell.set(3);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn debug_format() {
        let cell = PolicyCell::new(42, |_, v: i32| v);
        let dbg = format!("{cell:?}");
        assert!(dbg.contains("PolicyCell"));
        assert!(dbg.contains("42"));
    }
}
