#![forbid(unsafe_code)]

//! Cell that vetoes writes failing a predicate.

use crate::error::CellError;
use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// Stores a write only if it passes the validation predicate.
///
/// A rejected write leaves the stored value unchanged — and **still
/// publishes** that unchanged value to subscribers. This is deliberate:
/// observers hear the outcome of every write attempt, not just state
/// changes, so a sequence of writes `0, -1, 1` against `v >= 0` is observed
/// as `0, 0, 1`. Callers expecting rejection to be silent should compare
/// against the previous value in their observer.
///
/// The writer is never told about the rejection; write-time veto is a
/// defined outcome, not an error.
pub struct Validated<T> {
    cell: PolicyCell<T>,
}

impl<T: Clone + 'static> Validated<T> {
    /// Create a cell whose writes must satisfy `validator`.
    ///
    /// # Panics
    ///
    /// Panics if `initial` fails the predicate — the cell's invariant cannot
    /// be established.
    pub fn new(initial: T, validator: impl Fn(&T) -> bool + 'static) -> Self {
        match Self::try_new(initial, validator) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`new()`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InitialRejected`] if `initial` fails the
    /// predicate.
    pub fn try_new(
        initial: T,
        validator: impl Fn(&T) -> bool + 'static,
    ) -> Result<Self, CellError> {
        if !validator(&initial) {
            return Err(CellError::InitialRejected);
        }
        let cell = PolicyCell::new(initial, move |current: &T, incoming| {
            if validator(&incoming) {
                incoming
            } else {
                current.clone()
            }
        });
        Ok(Self { cell })
    }

    /// The stored value. Always satisfies the predicate.
    #[must_use]
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Borrow the stored value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }

    /// Store `value` if it passes validation; either way, publish the value
    /// that is stored afterwards.
    pub fn set(&mut self, value: T) {
        self.cell.set(value);
    }

    /// Observe the stored value after every write attempt.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        self.cell.subscribe(observer)
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
    fn rejected_writes_leave_the_value_unchanged() {
        let mut value = Validated::new(0, |v: &i32| *v >= 0);
        assert_eq!(value.get(), 0);

        value.set(-1);
        assert_eq!(value.get(), 0);

        value.set(1);
        assert_eq!(value.get(), 1);
    }

    #[test]
    fn rejected_writes_republish_the_retained_value() {
        let mut value = Validated::new(0, |v: &i32| *v >= 0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = value.subscribe(move |v| s.borrow_mut().push(*v));

        value.set(0);
        value.set(-1);
        value.set(1);

        assert_eq!(*seen.borrow(), vec![0, 0, 1]);
    }

    #[test]
    fn invalid_initial_is_a_precondition_failure() {
        assert_eq!(
            Validated::try_new(-1, |v: &i32| *v >= 0).err(),
            Some(CellError::InitialRejected)
        );
    }

    #[test]
    #[should_panic(expected = "rejected")]
    fn invalid_initial_panics() {
        let _ = Validated::new(-1, |v: &i32| *v >= 0);
    }

    #[test]
    fn non_copy_payloads_validate_by_reference() {
        let mut name = Validated::new("ok".to_string(), |s: &String| !s.is_empty());
        name.set(String::new());
        assert_eq!(name.get(), "ok");
        name.set("renamed".to_string());
        assert_eq!(name.get(), "renamed");
    }
}
