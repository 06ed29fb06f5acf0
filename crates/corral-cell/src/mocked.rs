#![forbid(unsafe_code)]

//! Cell whose reads are answered by a mock closure.

/// Always reads the value produced by the mock closure.
///
/// Assignments do not affect what reads return; they land in a side slot
/// reachable through [`assigned()`](Mocked::assigned). The point is to
/// inject a stand-in (a fake repository, a canned response) at one
/// declaration site while the code writing to the cell stays untouched.
pub struct Mocked<T> {
    assigned: T,
    mock: Box<dyn Fn() -> T>,
}

impl<T> Mocked<T> {
    /// Create a cell answering reads with `mock()`; `initial` seeds the
    /// side slot.
    pub fn new(initial: T, mock: impl Fn() -> T + 'static) -> Self {
        Self {
            assigned: initial,
            mock: Box::new(mock),
        }
    }

    /// The mock's current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.mock)()
    }

    /// Store `value` in the side slot; reads are unaffected.
    pub fn set(&mut self, value: T) {
        self.assigned = value;
    }

    /// The most recently assigned value (or the initial one).
    #[must_use]
    pub fn assigned(&self) -> &T {
        &self.assigned
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
