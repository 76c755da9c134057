//! In-memory reference implementation of [`TokenLedger`].

use std::collections::BTreeMap;

use super::{LedgerError, TokenLedger};
use crate::domain::{Address, Amount};

/// A self-contained single-asset ledger with balances and allowances.
///
/// Mirrors the mintable mock token the original test-bench deploys: mint
/// funds into existence, approve a spender, and move funds with the same
/// atomic-failure semantics the pool's [`TokenLedger`] contract demands.
/// Useful both for the crate's own tests and as a template for real
/// ledger adapters.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Address, Amount};
/// use pair_pool::ledger::{MemoryLedger, TokenLedger};
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let bob = Address::from_bytes([2u8; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(alice, Amount::new(100));
/// ledger.approve(alice, bob, Amount::new(40));
///
/// ledger.transfer_from(alice, bob, Amount::new(40)).expect("approved");
/// assert_eq!(ledger.balance_of(bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: BTreeMap<Address, u128>,
    /// Keyed by `(owner, spender)`.
    allowances: BTreeMap<(Address, Address), u128>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `account` out of thin air.
    ///
    /// Test-bench primitive; saturates at the type limit.
    pub fn mint(&mut self, account: Address, amount: Amount) {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount.get());
    }

    /// Grants `spender` the right to pull up to `amount` from `owner`.
    ///
    /// Overwrites any previous allowance, like the original `approve`.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((owner, spender), amount.get());
    }

    /// Remaining allowance of `spender` over `owner`'s funds.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        Amount::new(*self.allowances.get(&(owner, spender)).unwrap_or(&0))
    }
}

impl TokenLedger for MemoryLedger {
    fn transfer_from(
        &mut self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowance = *self.allowances.get(&(owner, recipient)).unwrap_or(&0);
        if allowance < amount.get() {
            return Err(LedgerError::InsufficientAllowance);
        }
        let owner_balance = *self.balances.get(&owner).unwrap_or(&0);
        if owner_balance < amount.get() {
            return Err(LedgerError::InsufficientBalance);
        }

        // All checks passed; the mutation below cannot fail part-way.
        self.allowances
            .insert((owner, recipient), allowance - amount.get());
        self.balances.insert(owner, owner_balance - amount.get());
        let recipient_balance = self.balances.entry(recipient).or_insert(0);
        *recipient_balance = recipient_balance.saturating_add(amount.get());
        Ok(())
    }

    fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let sender_balance = *self.balances.get(&sender).unwrap_or(&0);
        if sender_balance < amount.get() {
            return Err(LedgerError::InsufficientBalance);
        }
        self.balances.insert(sender, sender_balance - amount.get());
        let recipient_balance = self.balances.entry(recipient).or_insert(0);
        *recipient_balance = recipient_balance.saturating_add(amount.get());
        Ok(())
    }

    fn balance_of(&self, account: Address) -> Amount {
        Amount::new(*self.balances.get(&account).unwrap_or(&0))
    }
}
