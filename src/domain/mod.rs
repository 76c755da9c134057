//! Fundamental domain value types for the pool.
//!
//! Newtypes with validated constructors: identities, amounts, LP shares,
//! timestamps, the pooled pair, and the per-call request specs. All
//! arithmetic on these types is checked; nothing here wraps or panics.

mod address;
mod amount;
mod liquidity;
mod liquidity_spec;
mod swap_direction;
mod swap_spec;
mod timestamp;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use liquidity::Liquidity;
pub use liquidity_spec::{AddLiquiditySpec, RemoveLiquiditySpec};
pub use swap_direction::SwapDirection;
pub use swap_spec::SwapSpec;
pub use timestamp::Timestamp;
pub use token_pair::TokenPair;
