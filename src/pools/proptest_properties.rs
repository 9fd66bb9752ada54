//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Invariant preservation**: `k` never decreases across swaps and the
//!    new reserves are exactly the old ones shifted by the traded amounts.
//! 2. **Floor rounding**: the output is the floor of the exact solution.
//! 3. **Symmetry**: the reverse direction reads the reserves swapped, and a
//!    round trip never gains.
//! 4. **Share proportionality**: depositing then burning the minted shares
//!    never returns more than was deposited, and returns it exactly for
//!    ratio-aligned deposits.
//! 5. **Share conservation**: positions always sum to the total.

use proptest::prelude::*;

use super::{ConstantProductPool, LiquidityLedger, ReservePair};
use crate::domain::{Address, Amount, Direction, Shares, SwapRequest};
use crate::math::{full_mul, U256};
use crate::pricing::output_amount;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn provider(i: u8) -> Address {
    Address::from_bytes([i; 32])
}

fn seeded(token: u128, ether: u128) -> ConstantProductPool {
    let mut pool = ConstantProductPool::default();
    let Ok(_) =
        pool.add_liquidity(Amount::from_u128(token), Amount::from_u128(ether), &provider(0))
    else {
        panic!("seeding succeeds");
    };
    pool
}

fn direction(a_to_b: bool) -> Direction {
    if a_to_b {
        Direction::AToB
    } else {
        Direction::BToA
    }
}

/// Reserves in the 18-decimal range, 1e15 to 1e27 raw units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000u128
}

fn input_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariant_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in input_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let mut pool = seeded(ra, rb);
        let before = pool.reserves();
        let k_before = pool.reserve_pair().invariant();

        let dir = direction(a_to_b);
        let request = SwapRequest::new(Amount::from_u128(input), Amount::ZERO, dir);
        let Ok(out) = pool.swap(&request) else {
            return Ok(());
        };
        let after = pool.reserves();

        prop_assert!(pool.reserve_pair().invariant() >= k_before);

        let (in_before, out_before) = before.oriented(dir);
        let (in_after, out_after) = after.oriented(dir);
        prop_assert_eq!(in_before.checked_add(&Amount::from_u128(input)), Some(in_after));
        prop_assert_eq!(out_before.checked_sub(&out), Some(out_after));
        prop_assert!(!out_after.is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Floor rounding
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_is_floor_of_exact(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        input in input_strategy(),
    ) {
        let x = Amount::from_u128(input);
        let (r_in, r_out) = (Amount::from_u128(rin), Amount::from_u128(rout));
        let Ok(out) = output_amount(x, r_in, r_out) else {
            return Ok(());
        };
        let Some(denominator) = r_in.checked_add(&x) else {
            return Ok(());
        };
        let Some(next) = out.checked_add(&Amount::from_u128(1)) else {
            return Ok(());
        };

        let exact = full_mul(x.get(), r_out.get());
        prop_assert!(full_mul(out.get(), denominator.get()) <= exact);
        prop_assert!(full_mul(next.get(), denominator.get()) > exact);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reverse_direction_swaps_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in input_strategy(),
    ) {
        let pool = seeded(ra, rb);
        let x = Amount::from_u128(input);
        let (a, b) = (Amount::from_u128(ra), Amount::from_u128(rb));

        prop_assert_eq!(
            pool.quote(&SwapRequest::new(x, Amount::ZERO, Direction::AToB)),
            output_amount(x, a, b)
        );
        prop_assert_eq!(
            pool.quote(&SwapRequest::new(x, Amount::ZERO, Direction::BToA)),
            output_amount(x, b, a)
        );
    }

    #[test]
    fn prop_round_trip_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in input_strategy(),
    ) {
        let mut pool = seeded(ra, rb);
        let x = Amount::from_u128(input);
        let Ok(mid) = pool.swap(&SwapRequest::token_to_ether(x, Amount::ZERO)) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(&SwapRequest::ether_to_token(mid, Amount::ZERO)) else {
            return Ok(());
        };
        prop_assert!(back <= x, "round trip gained: {} > {}", back, x);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Share proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ether in reserve_strategy(),
    ) {
        let mut pool = seeded(ra, rb);
        let lp = provider(1);
        let Ok(dep) = pool.add_liquidity(Amount::MAX, Amount::from_u128(ether), &lp) else {
            return Ok(());
        };
        let Ok(w) = pool.remove_liquidity(dep.shares(), &lp) else {
            return Err(TestCaseError::fail("minted shares must be redeemable"));
        };
        prop_assert!(w.token() <= dep.token());
        prop_assert!(w.ether() <= dep.ether());
        prop_assert_eq!(pool.shares_of(&lp), Shares::ZERO);
    }

    #[test]
    fn prop_aligned_deposit_recovers_exactly(
        ra in 1u128..=1_000_000_000_000_000_000_000u128,
        rb in 1u128..=1_000_000_000_000_000_000_000u128,
        multiple in 1u128..=16u128,
    ) {
        let mut pool = seeded(ra, rb);
        let lp = provider(1);
        let Ok(dep) = pool.add_liquidity(Amount::MAX, Amount::from_u128(rb * multiple), &lp) else {
            return Err(TestCaseError::fail("aligned deposit must succeed"));
        };
        prop_assert_eq!(dep.token(), Amount::from_u128(ra * multiple));

        let Ok(w) = pool.remove_liquidity(dep.shares(), &lp) else {
            return Err(TestCaseError::fail("minted shares must be redeemable"));
        };
        prop_assert_eq!(w.token(), dep.token());
        prop_assert_eq!(w.ether(), dep.ether());
        prop_assert_eq!(pool.reserves().token, Amount::from_u128(ra));
        prop_assert_eq!(pool.reserves().ether, Amount::from_u128(rb));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Share conservation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, ether: u128 },
    Remove { who: u8, percent: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, 1u128..=1_000_000_000_000_000_000u128)
            .prop_map(|(who, ether)| Op::Add { who, ether }),
        (0u8..4, 1u8..=100).prop_map(|(who, percent)| Op::Remove { who, percent }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_positions_sum_to_total(ops in proptest::collection::vec(op_strategy(), 1..32)) {
        let mut ledger = LiquidityLedger::default();
        let mut reserves = ReservePair::empty();

        for op in ops {
            match op {
                Op::Add { who, ether } => {
                    let _ = ledger.add_liquidity(
                        &mut reserves,
                        Amount::from_u128(ether.saturating_mul(2)),
                        Amount::from_u128(ether),
                        &provider(who),
                    );
                }
                Op::Remove { who, percent } => {
                    let held = ledger.shares_of(&provider(who)).get();
                    let burn = held * U256::from(percent) / U256::from(100u8);
                    let _ = ledger.remove_liquidity(
                        &mut reserves,
                        Shares::new(burn),
                        &provider(who),
                    );
                }
            }

            let sum = ledger
                .positions()
                .try_fold(Shares::ZERO, |acc, (_, s)| acc.checked_add(&s));
            prop_assert_eq!(sum, Some(ledger.total_shares()));
            prop_assert_eq!(ledger.total_shares().is_zero(), reserves.is_empty());
            prop_assert!(reserves.is_empty() || reserves.is_seeded());
        }
    }
}
