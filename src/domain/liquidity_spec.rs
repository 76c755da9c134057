//! Validated liquidity provision and redemption requests.

use super::{Address, Amount, Liquidity, Timestamp};
use crate::error::{PoolError, Result};

/// A validated add-liquidity request.
///
/// `amount_a_desired` / `amount_b_desired` are upper bounds: the pool
/// accepts whatever combination matches the current reserve ratio, and
/// the `*_min` fields bound how far below the desired amounts the
/// accepted ones may fall.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Address, AddLiquiditySpec, Amount, Timestamp};
///
/// let provider = Address::from_bytes([9u8; 32]);
/// let spec = AddLiquiditySpec::new(
///     Amount::new(100),
///     Amount::new(100),
///     Amount::ZERO,
///     Amount::ZERO,
///     provider,
///     Timestamp::from_secs(2_000),
/// )
/// .expect("valid request");
/// assert_eq!(spec.amount_a_desired(), Amount::new(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquiditySpec {
    amount_a_desired: Amount,
    amount_b_desired: Amount,
    amount_a_min: Amount,
    amount_b_min: Amount,
    recipient: Address,
    deadline: Timestamp,
}

impl AddLiquiditySpec {
    /// Creates an add-liquidity request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAddress`] if the recipient is the zero
    /// sentinel.
    pub fn new(
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<Self> {
        if recipient.is_zero() {
            return Err(PoolError::ZeroAddress);
        }
        Ok(Self {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        })
    }

    /// Upper bound on the token-A deposit.
    #[must_use]
    pub const fn amount_a_desired(&self) -> Amount {
        self.amount_a_desired
    }

    /// Upper bound on the token-B deposit.
    #[must_use]
    pub const fn amount_b_desired(&self) -> Amount {
        self.amount_b_desired
    }

    /// Lower bound on the accepted token-A amount.
    #[must_use]
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Lower bound on the accepted token-B amount.
    #[must_use]
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// The account credited with the minted LP shares.
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

/// A validated remove-liquidity request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquiditySpec {
    liquidity: Liquidity,
    amount_a_min: Amount,
    amount_b_min: Amount,
    recipient: Address,
    deadline: Timestamp,
}

impl RemoveLiquiditySpec {
    /// Creates a remove-liquidity request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAddress`] if the recipient is the zero
    /// sentinel.
    pub fn new(
        liquidity: Liquidity,
        amount_a_min: Amount,
        amount_b_min: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<Self> {
        if recipient.is_zero() {
            return Err(PoolError::ZeroAddress);
        }
        Ok(Self {
            liquidity,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        })
    }

    /// LP shares to burn from the caller's balance.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Lower bound on the token-A payout.
    #[must_use]
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Lower bound on the token-B payout.
    #[must_use]
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// The account receiving both payouts.
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

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    #[test]
    fn add_spec_accessors() {
        let Ok(spec) = AddLiquiditySpec::new(
            Amount::new(100),
            Amount::new(60),
            Amount::new(90),
            Amount::new(50),
            addr(9),
            Timestamp::from_secs(1_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.amount_a_desired(), Amount::new(100));
        assert_eq!(spec.amount_b_desired(), Amount::new(60));
        assert_eq!(spec.amount_a_min(), Amount::new(90));
        assert_eq!(spec.amount_b_min(), Amount::new(50));
        assert_eq!(spec.recipient(), addr(9));
        assert_eq!(spec.deadline(), Timestamp::from_secs(1_000));
    }

    #[test]
    fn add_spec_rejects_zero_recipient() {
        let result = AddLiquiditySpec::new(
            Amount::new(1),
            Amount::new(1),
            Amount::ZERO,
            Amount::ZERO,
            Address::zero(),
            Timestamp::from_secs(1),
        );
        assert_eq!(result, Err(PoolError::ZeroAddress));
    }

    #[test]
    fn remove_spec_accessors() {
        let Ok(spec) = RemoveLiquiditySpec::new(
            Liquidity::new(50),
            Amount::new(49),
            Amount::new(48),
            addr(9),
            Timestamp::from_secs(1_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.liquidity(), Liquidity::new(50));
        assert_eq!(spec.amount_a_min(), Amount::new(49));
        assert_eq!(spec.amount_b_min(), Amount::new(48));
        assert_eq!(spec.recipient(), addr(9));
    }

    #[test]
    fn remove_spec_rejects_zero_recipient() {
        let result = RemoveLiquiditySpec::new(
            Liquidity::new(1),
            Amount::ZERO,
            Amount::ZERO,
            Address::zero(),
            Timestamp::from_secs(1),
        );
        assert_eq!(result, Err(PoolError::ZeroAddress));
    }
}
