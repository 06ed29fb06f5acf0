#![forbid(unsafe_code)]

//! Cell that rounds floats to a fixed number of decimal places.

use num_traits::Float;

use crate::notify::Subscription;
use crate::policy::PolicyCell;

/// How a scaled value is rounded to an integer.
///
/// The default is banker's rounding ([`HalfToEven`](RoundingRule::HalfToEven)),
/// which avoids the upward drift of always rounding halves away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingRule {
    /// Round to the nearest integer; ties go to the even neighbor.
    #[default]
    HalfToEven,
    /// Round to the nearest integer; ties go away from zero.
    HalfAwayFromZero,
    /// Round toward zero (truncate).
    TowardZero,
    /// Round away from zero.
    AwayFromZero,
    /// Round toward positive infinity.
    Up,
    /// Round toward negative infinity.
    Down,
}

impl RoundingRule {
    fn apply<V: Float>(self, v: V) -> V {
        match self {
            Self::HalfToEven => half_to_even(v),
            Self::HalfAwayFromZero => v.round(),
            Self::TowardZero => v.trunc(),
            Self::AwayFromZero => {
                if v >= V::zero() {
                    v.ceil()
                } else {
                    v.floor()
                }
            }
            Self::Up => v.ceil(),
            Self::Down => v.floor(),
        }
    }
}

/// Nearest-integer rounding with ties to the even neighbor.
///
/// `num_traits::Float` only exposes ties-away-from-zero (`round`), so the
/// tie case is resolved by hand.
fn half_to_even<V: Float>(v: V) -> V {
    let floor = v.floor();
    let frac = v - floor;
    let half = V::from(0.5).expect("0.5 is representable in any float type");
    if frac < half {
        floor
    } else if frac > half {
        floor + V::one()
    } else {
        let two = V::one() + V::one();
        // `floor` is even iff halving and re-doubling reproduces it.
        if (floor / two).floor() * two == floor {
            floor
        } else {
            floor + V::one()
        }
    }
}

/// Keeps the stored float rounded to `places` decimal places.
///
/// Writes (and the initial value) are scaled by `10^places`, rounded to an
/// integer under the configured [`RoundingRule`], and scaled back. Every
/// write publishes the stored (rounded) value to subscribers.
pub struct Rounded<V> {
    cell: PolicyCell<V>,
    places: u32,
    rule: RoundingRule,
}

impl<V: Float + 'static> Rounded<V> {
    /// Round to `places` decimal places under the default
    /// [`RoundingRule::HalfToEven`].
    pub fn new(initial: V, places: u32) -> Self {
        Self::with_rule(initial, places, RoundingRule::default())
    }

    /// Round to `places` decimal places under an explicit rule.
    pub fn with_rule(initial: V, places: u32, rule: RoundingRule) -> Self {
        let multiplier = pow10::<V>(places);
        let cell = PolicyCell::new(round_to(initial, multiplier, rule), move |_, v| {
            round_to(v, multiplier, rule)
        });
        Self { cell, places, rule }
    }

    /// The stored value. Always rounded to `places` decimal places.
    #[must_use]
    pub fn get(&self) -> V {
        self.cell.get()
    }

    /// Round `value`, store it, publish the stored value.
    pub fn set(&mut self, value: V) {
        self.cell.set(value);
    }

    /// Observe every subsequently stored value.
    pub fn subscribe(&self, observer: impl Fn(&V) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }

    /// Number of decimal places kept.
    #[must_use]
    pub fn places(&self) -> u32 {
        self.places
    }

    /// The rounding rule in effect.
    #[must_use]
    pub fn rule(&self) -> RoundingRule {
        self.rule
    }
}

fn pow10<V: Float>(places: u32) -> V {
    V::from(10).expect("10 is representable in any float type").powi(places as i32)
}

fn round_to<V: Float>(v: V, multiplier: V, rule: RoundingRule) -> V {
    rule.apply(v * multiplier) / multiplier
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
