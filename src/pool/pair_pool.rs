//! The constant-product pool over one ordered token pair.
//!
//! `PairPool` combines the three responsibilities of the system over one
//! shared state: the reserve ledger (the pool's own record of both asset
//! balances), liquidity accounting (per-holder LP shares and their
//! total), and the swap engine (constant-product pricing).
//!
//! # Swap formula (no fee)
//!
//! For the traded direction with reserves `(reserve_in, reserve_out)`:
//!
//! ```text
//! amount_out = reserve_out × amount_in / (reserve_in + amount_in)
//! ```
//!
//! with truncating division, so `reserve_in × reserve_out` never
//! decreases across a swap.
//!
//! # Operation shape
//!
//! Every mutating operation runs the same sequence: deadline check →
//! lock acquisition → validation and amount computation → external
//! transfers → liquidity accounting → reserve update → event emission.
//! Validation completes before the first transfer, so a precondition
//! failure never touches state. Reserves are recomputed from the
//! transferred amounts, never by re-querying the external ledger —
//! tokens donated straight to the pool account are not absorbed into
//! pricing.

use std::collections::BTreeMap;

use crate::domain::{
    AddLiquiditySpec, Address, Amount, Liquidity, RemoveLiquiditySpec, SwapDirection, SwapSpec,
    Timestamp, TokenPair,
};
use crate::error::{PoolError, Result};
use crate::ledger::TokenLedger;
use crate::math::integer_sqrt;

use super::events::PoolEvent;
use super::guard::ReentrancyGuard;

/// A single-pair constant-product AMM pool with LP share accounting.
///
/// The pool is an explicit state struct owned by the embedding layer and
/// passed by `&mut` into each operation together with the two asset
/// ledgers; there is no ambient global. It persists indefinitely — even
/// after reserves return to zero it remains usable.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{AddLiquiditySpec, Address, Amount, Timestamp};
/// use pair_pool::ledger::MemoryLedger;
/// use pair_pool::PairPool;
///
/// let token_a = Address::from_bytes([1u8; 32]);
/// let token_b = Address::from_bytes([2u8; 32]);
/// let pool_account = Address::from_bytes([3u8; 32]);
/// let alice = Address::from_bytes([9u8; 32]);
///
/// let mut pool = PairPool::create(token_a, token_b, pool_account).expect("valid pair");
/// let (mut ledger_a, mut ledger_b) = (MemoryLedger::new(), MemoryLedger::new());
/// ledger_a.mint(alice, Amount::new(100));
/// ledger_b.mint(alice, Amount::new(100));
/// ledger_a.approve(alice, pool_account, Amount::new(100));
/// ledger_b.approve(alice, pool_account, Amount::new(100));
///
/// let spec = AddLiquiditySpec::new(
///     Amount::new(100),
///     Amount::new(100),
///     Amount::ZERO,
///     Amount::ZERO,
///     alice,
///     Timestamp::from_secs(1_000),
/// )
/// .expect("valid request");
/// let (a, b, minted) = pool
///     .add_liquidity(&mut ledger_a, &mut ledger_b, alice, &spec, Timestamp::from_secs(0))
///     .expect("first deposit");
/// assert_eq!((a, b), (Amount::new(100), Amount::new(100)));
/// assert_eq!(minted.get(), 100); // isqrt(100 × 100)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PairPool {
    pair: TokenPair,
    account: Address,
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    balances: BTreeMap<Address, Liquidity>,
    lock: ReentrancyGuard,
    events: Vec<PoolEvent>,
}

impl PairPool {
    /// Creates an empty pool over two distinct assets.
    ///
    /// `pool_account` is the pool's own identity on both asset ledgers;
    /// all inbound transfers land there and all payouts are drawn from
    /// it.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAddress`] if any identity is the zero
    ///   sentinel.
    /// - [`PoolError::IdenticalAssets`] if both assets are equal.
    pub fn create(token_a: Address, token_b: Address, pool_account: Address) -> Result<Self> {
        let pair = TokenPair::new(token_a, token_b)?;
        if pool_account.is_zero() {
            return Err(PoolError::ZeroAddress);
        }
        Ok(Self {
            pair,
            account: pool_account,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_liquidity: Liquidity::ZERO,
            balances: BTreeMap::new(),
            lock: ReentrancyGuard::new(),
            events: Vec::new(),
        })
    }

    // -- Read accessors -----------------------------------------------------

    /// Identity of token A.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.pair.token_a()
    }

    /// Identity of token B.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.pair.token_b()
    }

    /// The pool's own account on the asset ledgers.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.account
    }

    /// Current reserves, in canonical `(A, B)` order.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Outstanding LP shares across all holders.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// LP shares held by `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> Liquidity {
        self.balances.get(holder).copied().unwrap_or(Liquidity::ZERO)
    }

    /// Events emitted since the last [`PairPool::take_events`], oldest
    /// first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the buffered events.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    // -- Liquidity issuance -------------------------------------------------

    /// Deposits both assets and mints LP shares to the request's
    /// recipient.
    ///
    /// The first deposit sets the price ratio and mints
    /// `isqrt(amount_a × amount_b)` shares. Subsequent deposits are
    /// clamped to the current reserve ratio (truncating) and mint the
    /// smaller of the two proportional shares, so a disproportionate
    /// deposit is never over-credited.
    ///
    /// Returns the accepted `(amount_a, amount_b)` and the minted
    /// shares.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `now` is past the deadline.
    /// - [`PoolError::ReentrantCall`] if another operation is in flight.
    /// - [`PoolError::InsufficientBAmount`] /
    ///   [`PoolError::InsufficientAAmount`] if the ratio-clamped amount
    ///   falls below the request's minimum.
    /// - [`PoolError::InsufficientLiquidityMinted`] if the mint would be
    ///   zero.
    /// - [`PoolError::Overflow`] on any overflowing computation.
    /// - [`PoolError::Ledger`] if a transfer is rejected; an already
    ///   executed first pull is refunded.
    pub fn add_liquidity<LA, LB>(
        &mut self,
        ledger_a: &mut LA,
        ledger_b: &mut LB,
        caller: Address,
        spec: &AddLiquiditySpec,
        now: Timestamp,
    ) -> Result<(Amount, Amount, Liquidity)>
    where
        LA: TokenLedger,
        LB: TokenLedger,
    {
        if spec.deadline().is_expired_at(now) {
            return Err(PoolError::Expired);
        }
        let _hold = self.lock.try_acquire()?;

        let (amount_a, amount_b) = if self.total_liquidity.is_zero() {
            // First deposit: taken exactly as desired, price set by the
            // depositor.
            (spec.amount_a_desired(), spec.amount_b_desired())
        } else {
            let b_optimal = spec
                .amount_a_desired()
                .checked_mul_div(&self.reserve_b, &self.reserve_a)
                .ok_or(PoolError::Overflow("optimal token B amount"))?;
            if b_optimal <= spec.amount_b_desired() {
                if b_optimal < spec.amount_b_min() {
                    return Err(PoolError::InsufficientBAmount);
                }
                (spec.amount_a_desired(), b_optimal)
            } else {
                // b_optimal > amount_b_desired implies the symmetric
                // quotient cannot exceed amount_a_desired.
                let a_optimal = spec
                    .amount_b_desired()
                    .checked_mul_div(&self.reserve_a, &self.reserve_b)
                    .ok_or(PoolError::Overflow("optimal token A amount"))?;
                if a_optimal < spec.amount_a_min() {
                    return Err(PoolError::InsufficientAAmount);
                }
                (a_optimal, spec.amount_b_desired())
            }
        };

        let minted = if self.total_liquidity.is_zero() {
            let product = amount_a
                .checked_mul(&amount_b)
                .ok_or(PoolError::Overflow("initial share product"))?;
            Liquidity::new(integer_sqrt(product.get()))
        } else {
            let share_a = amount_a
                .checked_mul_div(&self.total_liquidity.as_amount(), &self.reserve_a)
                .ok_or(PoolError::Overflow("token A share"))?;
            let share_b = amount_b
                .checked_mul_div(&self.total_liquidity.as_amount(), &self.reserve_b)
                .ok_or(PoolError::Overflow("token B share"))?;
            Liquidity::new(share_a.min(share_b).get())
        };
        if minted.is_zero() {
            return Err(PoolError::InsufficientLiquidityMinted);
        }

        // All post-transfer writes are computed (and overflow-checked)
        // up front so the transfers commit into a state that cannot fail.
        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::Overflow("reserve A update"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::Overflow("reserve B update"))?;
        let new_total = self
            .total_liquidity
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("total liquidity update"))?;
        let new_recipient_balance = self
            .balance_of(&spec.recipient())
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("recipient share balance"))?;

        ledger_a.transfer_from(caller, self.account, amount_a)?;
        if let Err(err) = ledger_b.transfer_from(caller, self.account, amount_b) {
            // Token A is already pulled; hand it back so the failed call
            // is all-or-nothing from the caller's side.
            if ledger_a.transfer(self.account, caller, amount_a).is_err() {
                tracing::warn!(provider = %caller, amount = %amount_a, "token A refund rejected by ledger");
            }
            return Err(err.into());
        }

        self.balances.insert(spec.recipient(), new_recipient_balance);
        self.total_liquidity = new_total;
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;

        self.events.push(PoolEvent::AddLiquidity {
            provider: caller,
            amount_a,
            amount_b,
            liquidity: minted,
        });
        self.events.push(PoolEvent::Sync {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
        });
        tracing::debug!(
            provider = %caller,
            %amount_a,
            %amount_b,
            minted = %minted,
            "liquidity added"
        );

        Ok((amount_a, amount_b, minted))
    }

    // -- Liquidity redemption -----------------------------------------------

    /// Burns `liquidity` shares from the caller and pays out the
    /// proportional slice of both reserves to the request's recipient.
    ///
    /// Payouts truncate, so rounding always favours the pool. Returns
    /// the paid `(amount_a, amount_b)`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `now` is past the deadline.
    /// - [`PoolError::ReentrantCall`] if another operation is in flight.
    /// - [`PoolError::InsufficientLiquidity`] if the caller holds fewer
    ///   shares than requested, or the pool has none outstanding.
    /// - [`PoolError::InsufficientAAmount`] /
    ///   [`PoolError::InsufficientBAmount`] if a payout falls below its
    ///   minimum.
    /// - [`PoolError::Overflow`] on any overflowing computation.
    /// - [`PoolError::Ledger`] if the ledger rejects a payout; the
    ///   pool's own bookkeeping is restored before the error surfaces.
    pub fn remove_liquidity<LA, LB>(
        &mut self,
        ledger_a: &mut LA,
        ledger_b: &mut LB,
        caller: Address,
        spec: &RemoveLiquiditySpec,
        now: Timestamp,
    ) -> Result<(Amount, Amount)>
    where
        LA: TokenLedger,
        LB: TokenLedger,
    {
        if spec.deadline().is_expired_at(now) {
            return Err(PoolError::Expired);
        }
        let _hold = self.lock.try_acquire()?;

        if self.total_liquidity.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        let held = self.balance_of(&caller);
        let Some(remaining) = held.checked_sub(&spec.liquidity()) else {
            return Err(PoolError::InsufficientLiquidity);
        };

        let amount_a = spec
            .liquidity()
            .as_amount()
            .checked_mul_div(&self.reserve_a, &self.total_liquidity.as_amount())
            .ok_or(PoolError::Overflow("token A payout"))?;
        let amount_b = spec
            .liquidity()
            .as_amount()
            .checked_mul_div(&self.reserve_b, &self.total_liquidity.as_amount())
            .ok_or(PoolError::Overflow("token B payout"))?;
        if amount_a < spec.amount_a_min() {
            return Err(PoolError::InsufficientAAmount);
        }
        if amount_b < spec.amount_b_min() {
            return Err(PoolError::InsufficientBAmount);
        }

        // Proportional payouts never exceed reserves or total supply.
        let new_total = self
            .total_liquidity
            .checked_sub(&spec.liquidity())
            .ok_or(PoolError::Overflow("total liquidity update"))?;
        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve A update"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve B update"))?;

        // Burn first, pay second; a rejected payout restores the books.
        let previous = (
            self.total_liquidity,
            self.reserve_a,
            self.reserve_b,
            held,
        );
        if remaining.is_zero() {
            self.balances.remove(&caller);
        } else {
            self.balances.insert(caller, remaining);
        }
        self.total_liquidity = new_total;
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;

        let payout = ledger_a
            .transfer(self.account, spec.recipient(), amount_a)
            .and_then(|()| ledger_b.transfer(self.account, spec.recipient(), amount_b));
        if let Err(err) = payout {
            // A truthful ledger cannot reject these: reserves never
            // exceed the pool's actual holdings. Restore the books and
            // surface the ledger's failure verbatim.
            let (total, reserve_a, reserve_b, held) = previous;
            self.total_liquidity = total;
            self.reserve_a = reserve_a;
            self.reserve_b = reserve_b;
            self.balances.insert(caller, held);
            tracing::warn!(provider = %caller, "payout rejected by ledger, bookkeeping restored");
            return Err(err.into());
        }

        self.events.push(PoolEvent::RemoveLiquidity {
            provider: caller,
            amount_a,
            amount_b,
            liquidity: spec.liquidity(),
        });
        self.events.push(PoolEvent::Sync {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
        });
        tracing::debug!(
            provider = %caller,
            %amount_a,
            %amount_b,
            burned = %spec.liquidity(),
            "liquidity removed"
        );

        Ok((amount_a, amount_b))
    }

    // -- Swap engine --------------------------------------------------------

    /// Sells an exact input amount along the request's path and pays the
    /// constant-product output to the recipient.
    ///
    /// The trade direction is resolved once from the path; the `Sync`
    /// event afterwards always reports reserves in canonical A/B order.
    /// Returns the output amount.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `now` is past the deadline.
    /// - [`PoolError::ReentrantCall`] if another operation is in flight.
    /// - [`PoolError::InvalidTokenPair`] if the path does not match the
    ///   pooled pair in either direction.
    /// - [`PoolError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is
    ///   empty.
    /// - [`PoolError::InsufficientOutputAmount`] if the output falls
    ///   below the request's minimum.
    /// - [`PoolError::Overflow`] on any overflowing computation.
    /// - [`PoolError::Ledger`] if a transfer is rejected; a pulled input
    ///   is refunded when the payout fails.
    pub fn swap_exact_tokens_for_tokens<LA, LB>(
        &mut self,
        ledger_a: &mut LA,
        ledger_b: &mut LB,
        caller: Address,
        spec: &SwapSpec,
        now: Timestamp,
    ) -> Result<Amount>
    where
        LA: TokenLedger,
        LB: TokenLedger,
    {
        if spec.deadline().is_expired_at(now) {
            return Err(PoolError::Expired);
        }
        let _hold = self.lock.try_acquire()?;

        let direction = self
            .pair
            .direction(&spec.input_token(), &spec.output_token())?;
        if spec.amount_in().is_zero() {
            return Err(PoolError::InsufficientInputAmount);
        }
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        };
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let denominator = reserve_in
            .checked_add(&spec.amount_in())
            .ok_or(PoolError::Overflow("swap denominator"))?;
        let amount_out = reserve_out
            .checked_mul_div(&spec.amount_in(), &denominator)
            .ok_or(PoolError::Overflow("swap output"))?;
        if amount_out < spec.amount_out_min() {
            return Err(PoolError::InsufficientOutputAmount);
        }

        let new_reserve_in = denominator;
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("output reserve update"))?;

        match direction {
            SwapDirection::AToB => {
                ledger_a.transfer_from(caller, self.account, spec.amount_in())?;
                if let Err(err) = ledger_b.transfer(self.account, spec.recipient(), amount_out) {
                    if ledger_a
                        .transfer(self.account, caller, spec.amount_in())
                        .is_err()
                    {
                        tracing::warn!(sender = %caller, "input refund rejected by ledger");
                    }
                    return Err(err.into());
                }
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
            }
            SwapDirection::BToA => {
                ledger_b.transfer_from(caller, self.account, spec.amount_in())?;
                if let Err(err) = ledger_a.transfer(self.account, spec.recipient(), amount_out) {
                    if ledger_b
                        .transfer(self.account, caller, spec.amount_in())
                        .is_err()
                    {
                        tracing::warn!(sender = %caller, "input refund rejected by ledger");
                    }
                    return Err(err.into());
                }
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
            }
        }

        self.events.push(PoolEvent::Swap {
            sender: caller,
            recipient: spec.recipient(),
            amount_in: spec.amount_in(),
            amount_out,
            token_in: spec.input_token(),
            token_out: spec.output_token(),
        });
        self.events.push(PoolEvent::Sync {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
        });
        tracing::debug!(
            sender = %caller,
            %direction,
            amount_in = %spec.amount_in(),
            %amount_out,
            "swap executed"
        );

        Ok(amount_out)
    }

    // -- Read-only pricing --------------------------------------------------

    /// Quotes the amount of the *other* pooled asset obtained for
    /// selling `amount_to_change` of `token`, using the swap formula
    /// without mutating state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidTokenPair`] if `token` is not pooled.
    /// - [`PoolError::InsufficientInputAmount`] if the amount is zero.
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is
    ///   empty.
    /// - [`PoolError::Overflow`] on an overflowing computation.
    pub fn amount_by_token_to_change(
        &self,
        token: Address,
        amount_to_change: Amount,
    ) -> Result<Amount> {
        if !self.pair.contains(&token) {
            return Err(PoolError::InvalidTokenPair);
        }
        if amount_to_change.is_zero() {
            return Err(PoolError::InsufficientInputAmount);
        }
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let (reserve_token, reserve_other) = if token == self.pair.token_a() {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        };
        let denominator = reserve_token
            .checked_add(&amount_to_change)
            .ok_or(PoolError::Overflow("quote denominator"))?;
        reserve_other
            .checked_mul_div(&amount_to_change, &denominator)
            .ok_or(PoolError::Overflow("quote output"))
    }

    /// Sum of all per-holder balances; equals
    /// [`PairPool::total_liquidity`] at all times.
    #[cfg(test)]
    pub(crate) fn balance_sum(&self) -> Liquidity {
        self.balances
            .values()
            .fold(Liquidity::ZERO, |acc, held| {
                Liquidity::new(acc.get() + held.get())
            })
    }

    /// Simulates an operation already in flight.
    #[cfg(test)]
    pub(crate) fn seize_lock_for_test(&self) {
        self.lock.seize_for_test();
    }

    /// Releases a lock seized by [`PairPool::seize_lock_for_test`].
    #[cfg(test)]
    pub(crate) fn release_lock_for_test(&self) {
        self.lock.release_for_test();
    }
}
