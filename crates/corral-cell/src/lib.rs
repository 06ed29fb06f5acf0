#![forbid(unsafe_code)]

//! Policy-applying value cells with synchronous change notification.
//!
//! A *cell* owns a value and intercepts access to it. The cells in this crate
//! run a deterministic *write policy* over every incoming value before storing
//! it, then broadcast the stored value to zero or more subscribers:
//!
//! - [`Clamped`]: keeps the value inside an inclusive range.
//! - [`Rounded`]: rounds floats to a fixed number of decimal places under a
//!   configurable [`RoundingRule`].
//! - [`UnitInterval`]: normalizes writes from a declared range into `[0, 1]`.
//! - [`Transformed`]: applies an arbitrary caller-supplied pure function.
//! - [`Validated`]: vetoes writes that fail a predicate, retaining (and
//!   republishing) the previous value.
//! - [`Logged`]: identity policy with optional read/write observer hooks.
//! - [`Localized`]: maps written keys through a caller-supplied lookup.
//!
//! Two further cells have no policy or notification obligations:
//!
//! - [`Expirable`]: the stored value reads back as `None` once a
//!   time-to-live has elapsed.
//! - [`Mocked`]: reads are answered by a mock closure; assignments land in a
//!   side slot.
//!
//! The shared machinery lives in [`policy::PolicyCell`] (policy + storage +
//! publish) and [`notify::Notifier`] (the broadcast channel). Subscribing
//! yields a [`Subscription`] guard; dropping it cancels delivery.
//!
//! # Architecture
//!
//! Cells are single-threaded by construction: the subscriber registry uses
//! `Rc` internally, so none of the channel-carrying cells is `Send`. Writers
//! that need cross-thread exclusion want `corral-sync`'s guarded cell
//! instead — the two families deliberately do not share a synchronization
//! story.
//!
//! # Invariants
//!
//! 1. At every moment observable by a reader, the stored value already
//!    satisfies the cell's policy: applied to the initial value at
//!    construction by the clamp/round/transform cells, asserted as a
//!    precondition by the validate/normalize cells.
//! 2. Every write publishes exactly one value, the value actually stored,
//!    even when a rejecting policy stores the old value unchanged.
//! 3. Subscribers observe values in write order.
//! 4. A subscriber added after some writes sees only later writes (no replay).

pub mod clamped;
pub mod error;
pub mod expirable;
pub mod localized;
pub mod logged;
pub mod mocked;
pub mod notify;
pub mod policy;
pub mod rounded;
pub mod transformed;
pub mod unit_interval;
pub mod validated;

pub use clamped::Clamped;
pub use error::CellError;
pub use expirable::Expirable;
pub use localized::Localized;
pub use logged::{Logged, Observer};
pub use mocked::Mocked;
pub use notify::{Notifier, Subscription};
pub use policy::PolicyCell;
pub use rounded::{Rounded, RoundingRule};
pub use transformed::Transformed;
pub use unit_interval::UnitInterval;
pub use validated::Validated;
