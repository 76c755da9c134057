//! # Pair Pool
//!
//! A single-pair constant-product market maker with liquidity-provider
//! share accounting, written as a plain library: the pool is an explicit
//! state value, the asset ledgers are trait objects supplied by the
//! caller, and time enters as an argument.
//!
//! The pool holds reserves of two assets, prices swaps with the no-fee
//! constant-product formula
//!
//! ```text
//! amount_out = reserve_out × amount_in / (reserve_in + amount_in)
//! ```
//!
//! and issues LP shares representing proportional claims on both
//! reserves. All arithmetic is exact checked `u128`; overflow surfaces
//! as an error, never as wrapping or a panic.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_pool::domain::{
//!     AddLiquiditySpec, Address, Amount, SwapSpec, Timestamp,
//! };
//! use pair_pool::ledger::MemoryLedger;
//! use pair_pool::PairPool;
//!
//! // 1. Identities: two assets, the pool's own account, a user.
//! let gold = Address::from_bytes([1u8; 32]);
//! let silver = Address::from_bytes([2u8; 32]);
//! let pool_account = Address::from_bytes([3u8; 32]);
//! let alice = Address::from_bytes([9u8; 32]);
//!
//! // 2. One ledger per asset; fund and approve the user.
//! let mut gold_ledger = MemoryLedger::new();
//! let mut silver_ledger = MemoryLedger::new();
//! gold_ledger.mint(alice, Amount::new(2_000));
//! silver_ledger.mint(alice, Amount::new(2_000));
//! gold_ledger.approve(alice, pool_account, Amount::new(2_000));
//! silver_ledger.approve(alice, pool_account, Amount::new(2_000));
//!
//! // 3. Create the pool and seed it.
//! let mut pool = PairPool::create(gold, silver, pool_account).expect("distinct assets");
//! let deposit = AddLiquiditySpec::new(
//!     Amount::new(1_000),
//!     Amount::new(1_000),
//!     Amount::ZERO,
//!     Amount::ZERO,
//!     alice,
//!     Timestamp::from_secs(2_000),
//! )
//! .expect("valid request");
//! let now = Timestamp::from_secs(1_000);
//! pool.add_liquidity(&mut gold_ledger, &mut silver_ledger, alice, &deposit, now)
//!     .expect("first deposit");
//!
//! // 4. Swap 10 gold for silver.
//! let swap = SwapSpec::new(
//!     Amount::new(10),
//!     Amount::new(9),
//!     &[gold, silver],
//!     alice,
//!     Timestamp::from_secs(2_000),
//! )
//! .expect("valid request");
//! let out = pool
//!     .swap_exact_tokens_for_tokens(&mut gold_ledger, &mut silver_ledger, alice, &swap, now)
//!     .expect("swap succeeded");
//!
//! assert_eq!(out, Amount::new(9)); // 1000 × 10 / 1010, truncated
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  owns the pool and both ledgers, drives operations
//! └──────┬──────┘
//!        │ &mut pool, &mut ledgers, caller, spec, now
//!        ▼
//! ┌─────────────┐
//! │   PairPool   │  deadline → lock → validate → transfer → account → emit
//! └──────┬──────┘
//!        │ TokenLedger trait
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  external balance stores, one per pooled asset
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Address`](domain::Address), validated request specs |
//! | [`ledger`] | The [`TokenLedger`](ledger::TokenLedger) seam and the [`MemoryLedger`](ledger::MemoryLedger) reference implementation |
//! | [`pool`] | [`PairPool`] itself plus [`PoolEvent`](pool::PoolEvent) |
//! | [`math`] | Integer square root for the genesis liquidity mint |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;

pub use error::{PoolError, Result};
pub use pool::{PairPool, PoolEvent};
