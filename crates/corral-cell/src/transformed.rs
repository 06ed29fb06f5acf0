#![forbid(unsafe_code)]

//! Cell that pipes every write through a caller-supplied pure function.

use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// Applies an arbitrary transform to the initial value and to every write.
///
/// The transform is expected to be pure; it runs once per write, and its
/// output is what gets stored and published.
pub struct Transformed<T> {
    cell: PolicyCell<T>,
}

impl<T: 'static> Transformed<T> {
    /// Create a cell storing `transform(initial)`.
    pub fn new(initial: T, transform: impl Fn(T) -> T + 'static) -> Self {
        let first = transform(initial);
        Self {
            cell: PolicyCell::new(first, move |_, v| transform(v)),
        }
    }

    /// The stored value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.get()
    }

    /// Borrow the stored value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }

    /// Transform `value`, store the result, publish it.
    pub fn set(&mut self, value: T) {
        self.cell.set(value);
    }

    /// Observe every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
