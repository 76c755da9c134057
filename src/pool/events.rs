//! State-change notifications emitted by the pool.

use crate::domain::{Address, Amount, Liquidity};

/// Observable side effect of a mutating pool operation.
///
/// Events are appended to the pool's internal buffer in emission order
/// and drained by the embedding layer via `PairPool::take_events`. Every
/// reserve mutation is followed by a [`PoolEvent::Sync`] carrying the
/// post-operation reserves in canonical A/B order, regardless of swap
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    /// Liquidity was deposited and LP shares minted.
    AddLiquidity {
        /// Account that supplied the deposit.
        provider: Address,
        /// Accepted token-A amount.
        amount_a: Amount,
        /// Accepted token-B amount.
        amount_b: Amount,
        /// LP shares minted to the recipient.
        liquidity: Liquidity,
    },
    /// LP shares were burned and reserves paid out.
    RemoveLiquidity {
        /// Account whose shares were burned.
        provider: Address,
        /// Token-A amount paid out.
        amount_a: Amount,
        /// Token-B amount paid out.
        amount_b: Amount,
        /// LP shares burned.
        liquidity: Liquidity,
    },
    /// A swap was executed.
    Swap {
        /// Account that initiated the swap.
        sender: Address,
        /// Account that received the output.
        recipient: Address,
        /// Input amount pulled from the sender.
        amount_in: Amount,
        /// Output amount paid to the recipient.
        amount_out: Amount,
        /// Asset sold to the pool.
        token_in: Address,
        /// Asset bought from the pool.
        token_out: Address,
    },
    /// Post-operation reserve snapshot, always in A/B order.
    Sync {
        /// Token-A reserve after the operation.
        reserve_a: Amount,
        /// Token-B reserve after the operation.
        reserve_b: Amount,
    },
}
