//! Exact integer arithmetic helpers.
//!
//! The pool's pricing and share math runs entirely on `u128` with
//! checked operations; the only non-trivial primitive is the integer
//! square root used to value the very first deposit.

mod isqrt;

pub use isqrt::integer_sqrt;
