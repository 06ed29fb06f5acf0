#![forbid(unsafe_code)]

//! Corral public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.

pub mod prelude {
    pub use corral_cell as cell;
    pub use corral_sync as sync;

    pub use corral_cell::{
        Clamped, Expirable, Localized, Logged, Mocked, Notifier, Rounded, RoundingRule,
        Subscription, Transformed, UnitInterval, Validated,
    };
    pub use corral_sync::{Guarded, LockDomain};
}
