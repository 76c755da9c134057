//! Unified error type for the pool.
//!
//! Every fallible operation in the crate returns [`PoolError`]. Failures
//! are synchronous and non-retryable: a failed call leaves the pool
//! exactly as it was, and the same error kinds are surfaced verbatim to
//! the caller — there is no translation layer. Transfer failures reported
//! by the external asset ledger are wrapped in [`PoolError::Ledger`]
//! without modification.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Convenience alias for results carrying a [`PoolError`].
pub type Result<T> = core::result::Result<T, PoolError>;

/// All failure modes of pool construction, liquidity accounting, swaps
/// and quotes.
///
/// Errors are `Clone + PartialEq` so tests can compare them structurally.
/// None of them poisons the pool: after any `Err` the pool remains usable
/// with reserves and liquidity unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The caller-supplied deadline is in the past.
    #[error("transaction deadline has passed")]
    Expired,

    /// An asset or holder identity is the zero address.
    #[error("zero address is not a valid identity")]
    ZeroAddress,

    /// Pool construction was attempted with the same asset twice.
    #[error("pooled assets must be distinct")]
    IdenticalAssets,

    /// The swap path does not contain exactly two entries.
    #[error("swap path must contain exactly two tokens")]
    InvalidPath,

    /// The swap path or quote token does not match the pooled pair.
    #[error("token pair does not match the pool")]
    InvalidTokenPair,

    /// A swap or quote was requested with a zero input amount.
    #[error("input amount must be greater than zero")]
    InsufficientInputAmount,

    /// The computed swap output is below the caller's minimum.
    #[error("output amount is below the requested minimum")]
    InsufficientOutputAmount,

    /// Reserves are empty, or the caller holds fewer LP shares than
    /// requested for redemption.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit would mint zero LP shares.
    #[error("deposit too small to mint liquidity")]
    InsufficientLiquidityMinted,

    /// The accepted token-A amount is below the caller's minimum.
    #[error("token A amount is below the requested minimum")]
    InsufficientAAmount,

    /// The accepted token-B amount is below the caller's minimum.
    #[error("token B amount is below the requested minimum")]
    InsufficientBAmount,

    /// A mutating operation was entered while another one was still
    /// executing.
    #[error("reentrant call rejected")]
    ReentrantCall,

    /// Arithmetic overflow. Overflow is fatal for the failing call and
    /// never wraps; the payload names the computation that overflowed.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A transfer failure reported by the external asset ledger,
    /// propagated as-is.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
