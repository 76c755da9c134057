//! Raw token amount with checked arithmetic.

use core::fmt;

/// A raw token amount in the asset's smallest unit.
///
/// All `u128` values are valid amounts. Arithmetic is checked: every
/// operation returns `None` on overflow, underflow or division by zero
/// instead of panicking or wrapping. Division truncates towards zero,
/// which in every pool formula rounds in the pool's favour.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::Amount;
///
/// let a = Amount::new(7);
/// let b = Amount::new(2);
/// assert_eq!(a.checked_div(&b), Some(Amount::new(3)));
/// assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked truncating division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        match self.0.checked_div(divisor.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Fused `self * mul / div` with truncating division.
    ///
    /// This is the shape of every pricing and share computation in the
    /// pool. Returns `None` if the intermediate product overflows or
    /// `div` is zero.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self) -> Option<Self> {
        if div.0 == 0 {
            return None;
        }
        match self.0.checked_mul(mul.0) {
            Some(product) => Some(Self(product / div.0)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
