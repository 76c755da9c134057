//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the pool-level invariants that hold for *any* reserve and
//! input sizes, not just the hand-picked vectors in the unit tests:
//!
//! 1. **Product preservation** — `reserve_a × reserve_b` never
//!    decreases across a swap.
//! 2. **Round-trip loss** — swapping A→B and back B→A never returns
//!    more than the original input.
//! 3. **Liquidity conservation** — add then remove returns at most the
//!    deposited amounts, and share balances always sum to the total.
//! 4. **Quote consistency** — the read-only quote equals what the swap
//!    actually pays.
//! 5. **Genesis mint bound** — the first mint `m` satisfies
//!    `m² ≤ a·b < (m+1)²`.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::domain::{
    AddLiquiditySpec, Address, Amount, Liquidity, RemoveLiquiditySpec, SwapSpec, Timestamp,
};
use crate::ledger::MemoryLedger;
use crate::pool::PairPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn token_a() -> Address {
    Address::from_bytes([1u8; 32])
}

fn token_b() -> Address {
    Address::from_bytes([2u8; 32])
}

fn pool_account() -> Address {
    Address::from_bytes([3u8; 32])
}

fn provider() -> Address {
    Address::from_bytes([10u8; 32])
}

fn trader() -> Address {
    Address::from_bytes([11u8; 32])
}

fn far_deadline() -> Timestamp {
    Timestamp::from_secs(u64::MAX)
}

fn now() -> Timestamp {
    Timestamp::from_secs(0)
}

/// Pool seeded with `(reserve_a, reserve_b)` plus ledgers where both
/// accounts hold and approve ample funds.
fn seeded_pool(reserve_a: u128, reserve_b: u128) -> (PairPool, MemoryLedger, MemoryLedger) {
    let Ok(mut pool) = PairPool::create(token_a(), token_b(), pool_account()) else {
        panic!("valid pool");
    };
    let mut ledger_a = MemoryLedger::new();
    let mut ledger_b = MemoryLedger::new();
    let ample = Amount::new(u128::MAX / 4);
    for account in [provider(), trader()] {
        ledger_a.mint(account, ample);
        ledger_b.mint(account, ample);
        ledger_a.approve(account, pool_account(), ample);
        ledger_b.approve(account, pool_account(), ample);
    }
    let Ok(spec) = AddLiquiditySpec::new(
        Amount::new(reserve_a),
        Amount::new(reserve_b),
        Amount::ZERO,
        Amount::ZERO,
        provider(),
        far_deadline(),
    ) else {
        panic!("valid spec");
    };
    let Ok(_) = pool.add_liquidity(&mut ledger_a, &mut ledger_b, provider(), &spec, now()) else {
        panic!("seed deposit");
    };
    pool.take_events();
    (pool, ledger_a, ledger_b)
}

fn swap(
    pool: &mut PairPool,
    ledger_a: &mut MemoryLedger,
    ledger_b: &mut MemoryLedger,
    amount_in: u128,
    path: [Address; 2],
) -> Amount {
    let Ok(spec) = SwapSpec::new(
        Amount::new(amount_in),
        Amount::ZERO,
        &path,
        trader(),
        far_deadline(),
    ) else {
        panic!("valid spec");
    };
    let Ok(out) = pool.swap_exact_tokens_for_tokens(ledger_a, ledger_b, trader(), &spec, now())
    else {
        panic!("swap");
    };
    out
}

// Reserve and trade sizes stay well below the u128 overflow region so
// every intermediate product fits.
const RESERVE_RANGE: core::ops::RangeInclusive<u128> = 1..=1_000_000_000_000;
const INPUT_RANGE: core::ops::RangeInclusive<u128> = 1..=1_000_000_000;

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Property 1: the reserve product never decreases across a swap.
    #[test]
    fn swap_never_decreases_product(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        amount_in in INPUT_RANGE,
    ) {
        let (mut pool, mut la, mut lb) = seeded_pool(ra, rb);
        let (before_a, before_b) = pool.reserves();
        let k_before = before_a.get() * before_b.get();

        swap(&mut pool, &mut la, &mut lb, amount_in, [token_a(), token_b()]);

        let (after_a, after_b) = pool.reserves();
        prop_assert!(after_a.get() * after_b.get() >= k_before);
    }

    /// Property 2: a round trip A→B→A never yields more than went in.
    #[test]
    fn round_trip_swap_never_profits(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        amount_in in INPUT_RANGE,
    ) {
        let (mut pool, mut la, mut lb) = seeded_pool(ra, rb);

        let out = swap(&mut pool, &mut la, &mut lb, amount_in, [token_a(), token_b()]);
        prop_assume!(!out.is_zero());
        let back = swap(&mut pool, &mut la, &mut lb, out.get(), [token_b(), token_a()]);

        prop_assert!(back.get() <= amount_in);
    }

    /// Property 3a: add then remove returns at most the deposit.
    #[test]
    fn add_remove_never_profits(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        deposit in INPUT_RANGE,
    ) {
        let (mut pool, mut la, mut lb) = seeded_pool(ra, rb);

        let Ok(add) = AddLiquiditySpec::new(
            Amount::new(deposit),
            Amount::MAX,
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        ) else {
            panic!("valid spec");
        };
        let result = pool.add_liquidity(&mut la, &mut lb, trader(), &add, now());
        // Tiny deposits against large reserves can round to a zero mint.
        prop_assume!(result.is_ok());
        let Ok((put_a, put_b, minted)) = result else {
            panic!("checked above");
        };

        let Ok(remove) = RemoveLiquiditySpec::new(
            minted,
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        ) else {
            panic!("valid spec");
        };
        let Ok((got_a, got_b)) =
            pool.remove_liquidity(&mut la, &mut lb, trader(), &remove, now())
        else {
            panic!("remove");
        };

        prop_assert!(got_a <= put_a);
        prop_assert!(got_b <= put_b);
    }

    /// Property 3b: per-holder balances sum to the outstanding total
    /// after any add/remove sequence.
    #[test]
    fn balances_sum_to_total(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        deposit in INPUT_RANGE,
        burn_fraction in 1u128..=100,
    ) {
        let (mut pool, mut la, mut lb) = seeded_pool(ra, rb);

        let Ok(add) = AddLiquiditySpec::new(
            Amount::new(deposit),
            Amount::MAX,
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        ) else {
            panic!("valid spec");
        };
        let _ = pool.add_liquidity(&mut la, &mut lb, trader(), &add, now());
        prop_assert_eq!(pool.balance_sum(), pool.total_liquidity());

        let burn = pool.balance_of(&provider()).get() * burn_fraction / 100;
        prop_assume!(burn > 0);
        let Ok(remove) = RemoveLiquiditySpec::new(
            Liquidity::new(burn),
            Amount::ZERO,
            Amount::ZERO,
            provider(),
            far_deadline(),
        ) else {
            panic!("valid spec");
        };
        let Ok(_) = pool.remove_liquidity(&mut la, &mut lb, provider(), &remove, now()) else {
            panic!("remove");
        };
        prop_assert_eq!(pool.balance_sum(), pool.total_liquidity());
    }

    /// Property 4: the read-only quote equals the executed swap output.
    #[test]
    fn quote_matches_execution(
        ra in RESERVE_RANGE,
        rb in RESERVE_RANGE,
        amount_in in INPUT_RANGE,
    ) {
        let (mut pool, mut la, mut lb) = seeded_pool(ra, rb);

        let Ok(quote) = pool.amount_by_token_to_change(token_a(), Amount::new(amount_in)) else {
            panic!("quote");
        };
        let out = swap(&mut pool, &mut la, &mut lb, amount_in, [token_a(), token_b()]);
        prop_assert_eq!(quote, out);
    }

    /// Property 5: the genesis mint is the integer square root of the
    /// deposited product.
    #[test]
    fn genesis_mint_is_isqrt(
        a in RESERVE_RANGE,
        b in RESERVE_RANGE,
    ) {
        let (pool, _la, _lb) = seeded_pool(a, b);
        let minted = pool.total_liquidity().get();
        let product = a * b;
        prop_assert!(minted * minted <= product);
        prop_assert!((minted + 1) * (minted + 1) > product);
    }
}
