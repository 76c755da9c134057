//! Chain-agnostic account and asset identity.

use core::fmt;

/// Identity of an account or a pooled asset.
///
/// Wraps a fixed 32-byte value. The pool uses the same identity space for
/// asset ids, liquidity-provider accounts and its own ledger account; any
/// 32-byte value except the all-zero sentinel is considered a live
/// identity.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::Address;
///
/// let alice = Address::from_bytes([7u8; 32]);
/// assert!(!alice.is_zero());
/// assert!(Address::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero sentinel. Never a valid asset or holder identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the zero sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Address {
    /// Hex rendering of the first four bytes, enough to tell identities
    /// apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
