//! External asset-ledger seam.
//!
//! The pool treats each pooled asset's balance storage as an external
//! collaborator reached through the [`TokenLedger`] trait. The crate
//! ships [`MemoryLedger`] as a reference implementation with the exact
//! atomic-failure semantics the trait demands.

mod memory;
mod token_ledger;

pub use memory::MemoryLedger;
pub use token_ledger::{LedgerError, TokenLedger};
