#![forbid(unsafe_code)]

//! The guarded cell and its shared lock domain.
//!
//! # Design
//!
//! A [`LockDomain`] is a cloneable handle to one mutual-exclusion domain.
//! [`Guarded<T>`] pairs a domain with a value slot; every accessor first
//! enters the domain, so cells built from clones of the same domain never
//! run their critical sections concurrently. The slot itself sits in a
//! second, per-cell mutex that is only ever locked while the domain is held,
//! which keeps the shared-domain capability in entirely safe code — the slot
//! lock is never contended.
//!
//! [`mutate()`](Guarded::mutate) holds the domain for the whole closure, so
//! compound read-modify-write sequences execute as one atomic step. A
//! separate `get()` followed by `set()` would not be atomic with respect to
//! other threads; `mutate` is the reason this type exists.
//!
//! # Failure Modes
//!
//! - **Reentrancy**: the domain mutex is non-reentrant. An accessor called
//!   from inside a `mutate` body on the same domain deadlocks. Documented
//!   hazard of the single-lock design, not corrected here.
//! - **Poisoning**: a panic inside a critical section poisons the domain.
//!   Every later access observes [`GuardError::Poisoned`] (the `try_`
//!   accessors) or panics (the plain ones); an error event is traced when
//!   the poisoning is observed.

use std::sync::{Arc, Mutex};

use crate::error::GuardError;

/// A cloneable mutual-exclusion domain.
///
/// Every [`Guarded`] cell belongs to exactly one domain. A cell created with
/// [`Guarded::new`] owns a fresh domain exclusively; passing clones of one
/// `LockDomain` to [`Guarded::with_domain`] makes the cells serialize
/// against each other — useful when an invariant spans several values and
/// their critical sections must never interleave.
#[derive(Clone, Default)]
pub struct LockDomain {
    mutex: Arc<Mutex<()>>,
}

impl LockDomain {
    /// Create a fresh, unshared domain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for LockDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockDomain")
            .field("poisoned", &self.mutex.is_poisoned())
            .finish()
    }
}

/// A value whose every access runs inside a mutual-exclusion domain.
///
/// Reads and writes block the calling thread until the domain is free; there
/// is no cooperative suspension and no notification side channel. Share
/// across threads as `Arc<Guarded<T>>`.
pub struct Guarded<T> {
    domain: LockDomain,
    slot: Mutex<T>,
}

impl<T> Guarded<T> {
    /// Create a cell owning a fresh, exclusive lock domain.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_domain(value, LockDomain::new())
    }

    /// Create a cell inside an externally supplied domain.
    ///
    /// All cells holding clones of `domain` serialize against each other.
    #[must_use]
    pub fn with_domain(value: T, domain: LockDomain) -> Self {
        Self {
            domain,
            slot: Mutex::new(value),
        }
    }

    /// The domain this cell serializes on.
    #[must_use]
    pub fn domain(&self) -> &LockDomain {
        &self.domain
    }

    /// Whether the domain has been poisoned by a panicking critical section.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.domain.mutex.is_poisoned() || self.slot.is_poisoned()
    }

    /// Copy out the current value.
    ///
    /// # Panics
    ///
    /// Panics if the domain is poisoned.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Replace the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the domain is poisoned.
    pub fn set(&self, value: T) {
        if let Err(err) = self.try_set(value) {
            panic!("{err}");
        }
    }

    /// Run `body` over the value with the domain held for the whole call,
    /// making compound read-modify-write sequences atomic.
    ///
    /// # Panics
    ///
    /// Panics if the domain is poisoned. Calling any accessor of a cell on
    /// the *same* domain from inside `body` deadlocks.
    pub fn mutate<R>(&self, body: impl FnOnce(&mut T) -> R) -> R {
        match self.try_mutate(body) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`get()`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Poisoned`] if a previous critical section
    /// panicked.
    pub fn try_get(&self) -> Result<T, GuardError>
    where
        T: Clone,
    {
        self.try_mutate(|value| value.clone())
    }

    /// Fallible twin of [`set()`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Poisoned`] if a previous critical section
    /// panicked.
    pub fn try_set(&self, value: T) -> Result<(), GuardError> {
        self.try_mutate(|slot| *slot = value)
    }

    /// Fallible twin of [`mutate()`](Self::mutate).
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Poisoned`] if a previous critical section
    /// panicked.
    pub fn try_mutate<R>(&self, body: impl FnOnce(&mut T) -> R) -> Result<R, GuardError> {
        let _domain = self.domain.mutex.lock().map_err(|_| poisoned())?;
        let mut slot = self.slot.lock().map_err(|_| poisoned())?;
        Ok(body(&mut *slot))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Guarded<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Guarded");
        match self.try_mutate(|value| format!("{value:?}")) {
            Ok(value) => s.field("value", &value),
            Err(_) => s.field("poisoned", &true),
        }
        .finish()
    }
}

impl<T: Default> Default for Guarded<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

fn poisoned() -> GuardError {
    tracing::error!("lock domain poisoned by a panic inside a critical section");
    GuardError::Poisoned
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn get_set_round_trip() {
        let cell = Guarded::new(1);
        assert_eq!(cell.get(), 1);
        cell.set(2);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn mutate_returns_the_body_result() {
        let cell = Guarded::new(vec![1, 2, 3]);
        let len = cell.mutate(|v| {
            v.push(4);
            v.len()
        });
        assert_eq!(len, 4);
        assert_eq!(cell.get(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn default_constructs_the_default_value() {
        let cell: Guarded<u64> = Guarded::default();
        assert_eq!(cell.get(), 0);
    }

    #[test]
    fn panicking_mutation_poisons_the_domain() {
        let cell = Arc::new(Guarded::new(0));

        let poisoner = Arc::clone(&cell);
        let result = thread::spawn(move || {
            poisoner.mutate(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        assert!(cell.is_poisoned());
        assert_eq!(cell.try_get(), Err(GuardError::Poisoned));
        assert_eq!(cell.try_set(1), Err(GuardError::Poisoned));
    }

    #[test]
    #[should_panic(expected = "poisoned")]
    fn plain_accessors_panic_once_poisoned() {
        let cell = Arc::new(Guarded::new(0));
        let poisoner = Arc::clone(&cell);
        let _ = thread::spawn(move || {
            poisoner.mutate(|_| panic!("boom"));
        })
        .join();
        let _ = cell.get();
    }

    #[test]
    fn cells_on_one_domain_share_its_poison() {
        let domain = LockDomain::new();
        let a = Arc::new(Guarded::with_domain(0, domain.clone()));
        let b = Guarded::with_domain(0, domain);

        let poisoner = Arc::clone(&a);
        let _ = thread::spawn(move || {
            poisoner.mutate(|_| panic!("boom"));
        })
        .join();

        assert_eq!(b.try_get(), Err(GuardError::Poisoned));
    }

    #[test]
    fn debug_format_shows_the_value() {
        let cell = Guarded::new(42);
        let dbg = format!("{cell:?}");
        assert!(dbg.contains("Guarded"));
        assert!(dbg.contains("42"));
    }
}
