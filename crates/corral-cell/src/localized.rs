#![forbid(unsafe_code)]

//! String cell that resolves written keys through a lookup function.

use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// Treats every written string as a key and stores `lookup(key)`.
///
/// The lookup itself — a localization catalog, a template table, whatever —
/// is supplied by the caller as an opaque function; this cell only wires it
/// into the write path. The initial value is stored as supplied, not
/// resolved. Every write publishes the stored (resolved) value.
pub struct Localized {
    cell: PolicyCell<String>,
}

impl Localized {
    /// Create a cell resolving keys through `lookup`.
    pub fn new(initial: impl Into<String>, lookup: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            cell: PolicyCell::new(initial.into(), move |_, key| lookup(&key)),
        }
    }

    /// The stored (resolved) value.
    #[must_use]
    pub fn get(&self) -> String {
        self.cell.get()
    }

    /// Borrow the stored value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.cell.with(|s| f(s))
    }

    /// Resolve `key`, store the result, publish it.
    pub fn set(&mut self, key: impl Into<String>) {
        self.cell.set(key.into());
    }

    /// Observe every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&String) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
