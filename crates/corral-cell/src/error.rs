#![forbid(unsafe_code)]

//! Error types for cell construction.
//!
//! Cells whose invariant cannot be established from the supplied initial
//! value refuse to construct. The panicking constructors surface this as a
//! panic (the precondition is the caller's bug); the `try_new` twins return
//! [`CellError`] instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CellError>;

/// A construction-time precondition violation.
///
/// There is no recovery path: the cell's invariant cannot be established, so
/// no cell is produced. Write-time policy rejection is *not* an error and
/// never surfaces here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    /// The initial value failed the cell's validation predicate.
    #[error("initial value rejected by the cell's validator")]
    InitialRejected,

    /// The initial value lies outside the cell's declared range.
    #[error("initial value lies outside the cell's declared range")]
    OutOfRange,
}
