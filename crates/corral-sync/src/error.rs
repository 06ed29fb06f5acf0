#![forbid(unsafe_code)]

//! Error type for guarded-cell access.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuardError>;

/// Failure to enter a cell's critical section.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    /// A previous critical section panicked while holding the lock. The
    /// value may be mid-mutation, so access is refused from then on.
    #[error("lock domain poisoned by a panic inside a critical section")]
    Poisoned,
}
