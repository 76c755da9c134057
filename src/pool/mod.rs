//! The pool itself: state struct, execution lock and emitted events.
//!
//! [`PairPool`] is the single entry point for every operation; the
//! submodules hold its collaborators. The lock is an implementation
//! detail and stays private, the event type is part of the public
//! surface.

mod events;
mod guard;
mod pair_pool;

#[cfg(test)]
mod proptest_properties;

pub use events::PoolEvent;
pub use pair_pool::PairPool;
