//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pair_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AddLiquiditySpec, Address, Amount, Liquidity, RemoveLiquiditySpec, SwapDirection, SwapSpec,
    Timestamp, TokenPair,
};

// Re-export the ledger seam
pub use crate::ledger::{LedgerError, MemoryLedger, TokenLedger};

// Re-export the pool
pub use crate::pool::{PairPool, PoolEvent};

// Re-export error types
pub use crate::error::{PoolError, Result};
