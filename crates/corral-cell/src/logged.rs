#![forbid(unsafe_code)]

//! Cell with observer hooks on both reads and writes.

use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// A hook invoked with the cell's value on read or write.
pub type Observer<T> = Box<dyn Fn(&T)>;

/// Stores writes unchanged while invoking observer hooks around access.
///
/// The write observer runs after the value is stored and before it is
/// published to channel subscribers; the read observer runs before
/// [`get()`](Logged::get) returns. Both hooks are independent of the
/// notification channel — use them for access logging, the channel for value
/// propagation.
pub struct Logged<T> {
    cell: PolicyCell<T>,
    read_observer: Option<Observer<T>>,
    write_observer: Option<Observer<T>>,
}

impl<T: std::fmt::Debug + 'static> Logged<T> {
    /// Create a cell with the default hooks: no read observer, and a write
    /// observer emitting a `tracing::debug!` event per write.
    pub fn new(initial: T) -> Self {
        Self::with_observers(
            initial,
            None,
            Some(Box::new(|value: &T| {
                tracing::debug!(?value, "cell written");
            })),
        )
    }
}

impl<T: 'static> Logged<T> {
    /// Create a cell with explicit hooks; `None` disables that hook.
    pub fn with_observers(
        initial: T,
        read: Option<Observer<T>>,
        write: Option<Observer<T>>,
    ) -> Self {
        Self {
            cell: PolicyCell::new(initial, |_, v| v),
            read_observer: read,
            write_observer: write,
        }
    }

    /// Invoke the read observer (if any), then return the stored value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.with(|value| {
            if let Some(observer) = &self.read_observer {
                observer(value);
            }
            value.clone()
        })
    }

    /// Store `value`, invoke the write observer (if any), publish.
    pub fn set(&mut self, value: T) {
        let observer = &self.write_observer;
        self.cell.set_observed(value, |stored| {
            if let Some(observer) = observer {
                observer(stored);
            }
        });
    }

    /// Observe every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
