#![forbid(unsafe_code)]

//! Cell that normalizes writes from a declared range into `[0, 1]`.

use std::ops::RangeInclusive;

use num_traits::Float;

use crate::error::CellError;
use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// Normalizes every write from `[min, max]` to the unit interval.
///
/// A write of `v` stores `(v - min) / (max - min)`; writing `min` reads back
/// as `0`, writing `max` as `1`. The initial value must lie within the
/// declared range (a construction precondition, not a runtime error) and
/// is stored as supplied. Every write publishes the stored
/// (normalized) value to subscribers.
pub struct UnitInterval<V> {
    cell: PolicyCell<V>,
    min: V,
    max: V,
}

impl<V: Float + 'static> UnitInterval<V> {
    /// Create a cell normalizing from `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `initial` lies outside `[min, max]`.
    pub fn new(initial: V, min: V, max: V) -> Self {
        match Self::try_new(initial, min, max) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`new()`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`CellError::OutOfRange`] if `initial` lies outside
    /// `[min, max]` (including the case of NaN bounds or value).
    pub fn try_new(initial: V, min: V, max: V) -> Result<Self, CellError> {
        if !(min <= initial && initial <= max) {
            return Err(CellError::OutOfRange);
        }
        let (lo, span) = (min, max - min);
        let cell = PolicyCell::new(initial, move |_, v| (v - lo) / span);
        Ok(Self { cell, min, max })
    }

    /// Range-based twin of [`new()`](Self::new).
    ///
    /// # Panics
    ///
    /// Panics if `initial` lies outside the range.
    pub fn from_range(initial: V, range: RangeInclusive<V>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(initial, min, max)
    }

    /// The stored value.
    #[must_use]
    pub fn get(&self) -> V {
        self.cell.get()
    }

    /// Normalize `value`, store it, publish the stored value.
    pub fn set(&mut self, value: V) {
        self.cell.set(value);
    }

    /// Observe every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&V) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }

    /// Lower bound of the declared range.
    #[must_use]
    pub fn min(&self) -> V {
        self.min
    }

    /// Upper bound of the declared range.
    #[must_use]
    pub fn max(&self) -> V {
        self.max
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
