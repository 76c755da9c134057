//! The pooled pair of asset identities.

use super::{Address, SwapDirection};
use crate::error::{PoolError, Result};

/// The two pooled asset identities, in creation order.
///
/// The order is fixed when the pool is created and never changes: the
/// first argument is token A, the second token B. The pair deliberately
/// does **not** canonicalize the order — reserves, events and swap
/// directions are all expressed relative to the creator's (A, B).
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Address, TokenPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let pair = TokenPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.token_a(), a);
/// assert_eq!(pair.token_b(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: Address,
    token_b: Address,
}

impl TokenPair {
    /// Creates a pair from two distinct, non-zero asset identities.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAddress`] if either identity is the zero
    ///   sentinel.
    /// - [`PoolError::IdenticalAssets`] if both identities are equal.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self> {
        if token_a.is_zero() || token_b.is_zero() {
            return Err(PoolError::ZeroAddress);
        }
        if token_a == token_b {
            return Err(PoolError::IdenticalAssets);
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns token A (the first asset given at creation).
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.token_a
    }

    /// Returns token B (the second asset given at creation).
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.token_b
    }

    /// Returns `true` if `token` is one of the pooled assets.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        *token == self.token_a || *token == self.token_b
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidTokenPair`] if `token` is not pooled.
    pub fn other(&self, token: &Address) -> Result<Address> {
        if *token == self.token_a {
            Ok(self.token_b)
        } else if *token == self.token_b {
            Ok(self.token_a)
        } else {
            Err(PoolError::InvalidTokenPair)
        }
    }

    /// Resolves an `(input, output)` ordering into a [`SwapDirection`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidTokenPair`] unless the ordering is
    /// exactly `(A, B)` or `(B, A)`.
    pub fn direction(&self, input: &Address, output: &Address) -> Result<SwapDirection> {
        if *input == self.token_a && *output == self.token_b {
            Ok(SwapDirection::AToB)
        } else if *input == self.token_b && *output == self.token_a {
            Ok(SwapDirection::BToA)
        } else {
            Err(PoolError::InvalidTokenPair)
        }
    }
}
