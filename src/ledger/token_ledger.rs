//! The external asset-ledger capability consumed by the pool.

use thiserror::Error;

use crate::domain::{Address, Amount};

/// Failure reported by an asset ledger.
///
/// Propagated through the pool verbatim; the pool never retries and
/// never translates these into its own error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debited account does not hold `amount`.
    #[error("ledger: insufficient balance")]
    InsufficientBalance,

    /// The owner has not approved the spender for `amount`.
    #[error("ledger: insufficient allowance")]
    InsufficientAllowance,
}

/// Balance storage and transfer capability of one pooled asset.
///
/// This is the seam between the pool and the outside world: the pool
/// holds one implementation per pooled asset and drives all token
/// movement through it. The pool never uses [`TokenLedger::balance_of`]
/// for its own reserve bookkeeping — reserves are tracked from the
/// transferred amounts, so tokens donated directly to the pool account
/// are simply not counted.
///
/// # Contract
///
/// Implementations must fail atomically: a call that returns an error
/// must leave ledger state untouched, and a call that returns `Ok` must
/// have moved exactly `amount`. Balances reported must be truthful.
pub trait TokenLedger {
    /// Moves `amount` from `owner` to `recipient`, consuming `owner`'s
    /// allowance towards the recipient.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] or
    /// [`LedgerError::InsufficientAllowance`]; either leaves the ledger
    /// unchanged.
    fn transfer_from(
        &mut self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `sender`'s own balance to `recipient`.
    ///
    /// Unlike [`TokenLedger::transfer_from`] this spends the sender's own
    /// funds and consumes no allowance. The pool calls it with its own
    /// account as `sender` to pay out swaps and redemptions.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`], leaving the ledger
    /// unchanged.
    fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Current balance of `account`.
    ///
    /// Used by tests and external verification only, never for reserve
    /// bookkeeping.
    fn balance_of(&self, account: Address) -> Amount;
}
