#![forbid(unsafe_code)]

//! Mutual-exclusion guarded value cell.
//!
//! [`Guarded<T>`] owns a value and a [`LockDomain`]; every read, write, and
//! compound mutation executes inside the domain's critical section. Several
//! cells constructed from clones of one domain serialize against each other,
//! trading isolation for coordinated atomicity across cells.
//!
//! This crate is the concurrency-safe counterpart to `corral-cell`'s
//! single-threaded policy cells: no policy, no notification channel, just
//! exclusion. Share a cell across threads as `Arc<Guarded<T>>`.
//!
//! # Invariants
//!
//! 1. The value is never observed or mutated outside the domain's critical
//!    section.
//! 2. Two racing operations on one domain are totally ordered; which one
//!    wins is unspecified, but no update is lost or torn.
//! 3. Poisoning (a panic inside a critical section) is never swallowed:
//!    subsequent access fails with [`GuardError::Poisoned`] (or panics, for
//!    the non-`try` accessors) rather than returning a possibly-inconsistent
//!    value.
//!
//! # Failure Modes
//!
//! - **Reentrant acquisition deadlocks.** Calling any accessor from inside a
//!   [`mutate()`](Guarded::mutate) body on the same domain blocks forever.
//!   The domain is a plain non-reentrant mutex by design; see the type docs.

pub mod error;
pub mod guarded;

pub use error::GuardError;
pub use guarded::{Guarded, LockDomain};
