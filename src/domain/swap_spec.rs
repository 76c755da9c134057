//! Validated swap request.

use super::{Address, Amount, Timestamp};
use crate::error::{PoolError, Result};

/// A validated exact-input swap request.
///
/// Carries everything the pool needs besides the caller identity: the
/// input amount, the slippage bound, the trade path, the payout recipient
/// and the deadline. Construction performs the caller-side validation so
/// a `SwapSpec` that exists is structurally sound; economic checks
/// (reserves, output minimum) happen inside the pool.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Address, Amount, SwapSpec, Timestamp};
///
/// let token_a = Address::from_bytes([1u8; 32]);
/// let token_b = Address::from_bytes([2u8; 32]);
/// let trader = Address::from_bytes([9u8; 32]);
///
/// let spec = SwapSpec::new(
///     Amount::new(10),
///     Amount::new(9),
///     &[token_a, token_b],
///     trader,
///     Timestamp::from_secs(2_000),
/// )
/// .expect("valid swap request");
/// assert_eq!(spec.input_token(), token_a);
/// assert_eq!(spec.output_token(), token_b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapSpec {
    amount_in: Amount,
    amount_out_min: Amount,
    input_token: Address,
    output_token: Address,
    recipient: Address,
    deadline: Timestamp,
}

impl SwapSpec {
    /// Creates a swap request from a two-entry path.
    ///
    /// The path names the trade direction: `path[0]` is sold, `path[1]`
    /// is bought. Whether the path matches the pooled pair is decided by
    /// the pool, not here.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidPath`] if `path` does not contain exactly
    ///   two entries.
    /// - [`PoolError::ZeroAddress`] if the recipient is the zero
    ///   sentinel.
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        path: &[Address],
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<Self> {
        let [input_token, output_token] = *path else {
            return Err(PoolError::InvalidPath);
        };
        if recipient.is_zero() {
            return Err(PoolError::ZeroAddress);
        }
        Ok(Self {
            amount_in,
            amount_out_min,
            input_token,
            output_token,
            recipient,
            deadline,
        })
    }

    /// The exact amount of the input asset to sell.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// The minimum acceptable output, checked before any mutation.
    #[must_use]
    pub const fn amount_out_min(&self) -> Amount {
        self.amount_out_min
    }

    /// The asset being sold (`path[0]`).
    #[must_use]
    pub const fn input_token(&self) -> Address {
        self.input_token
    }

    /// The asset being bought (`path[1]`).
    #[must_use]
    pub const fn output_token(&self) -> Address {
        self.output_token
    }

    /// Where the output is paid.
    #[must_use]
    pub const fn recipient(&self) -> Address {
        self.recipient
    }

    /// The request's expiry timestamp.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}
