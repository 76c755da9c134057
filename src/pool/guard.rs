//! Mutual-exclusion flag around the pool's critical sections.

use core::cell::Cell;

use crate::error::{PoolError, Result};

/// Non-reentrant execution lock.
///
/// Every mutating pool operation acquires the guard before its first
/// external transfer and holds it until after its last state write and
/// event emission. Acquisition returns an RAII [`LockHold`] whose `Drop`
/// clears the flag, so the lock is released on every exit path —
/// including `?` early returns — and a failed call can never leave the
/// pool permanently locked.
///
/// The flag lives in a `Cell` so the hold can borrow the guard while the
/// rest of the pool struct stays mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReentrancyGuard {
    held: Cell<bool>,
}

impl ReentrancyGuard {
    /// A released guard.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock, failing fast if it is already held.
    ///
    /// # Errors
    ///
    /// [`PoolError::ReentrantCall`] if a mutating operation is already
    /// executing.
    pub(crate) fn try_acquire(&self) -> Result<LockHold<'_>> {
        if self.held.replace(true) {
            return Err(PoolError::ReentrantCall);
        }
        Ok(LockHold { flag: &self.held })
    }

    /// Marks the guard held without producing a hold, simulating a call
    /// in flight.
    #[cfg(test)]
    pub(crate) fn seize_for_test(&self) {
        self.held.set(true);
    }

    /// Force-releases the guard.
    #[cfg(test)]
    pub(crate) fn release_for_test(&self) {
        self.held.set(false);
    }
}

/// Proof that the lock is held; releases it on drop.
#[derive(Debug)]
pub(crate) struct LockHold<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for LockHold<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
