//! Integration tests exercising the exchange end to end through the public
//! API: seeding, price queries, quotes, both swap directions, slippage and
//! zero-amount swaps, liquidity removal, and rollback when the transfer
//! collaborator fails.

#![allow(clippy::panic)]

use cp_exchange::config::ExchangeConfig;
use cp_exchange::domain::{Address, Amount, Asset, Decimals, Direction, Shares};
use cp_exchange::error::{AmmError, ErrorKind, TransferError};
use cp_exchange::math::U256;
use cp_exchange::pools::{Exchange, SharedExchange};
use cp_exchange::traits::AssetTransfer;
use cp_exchange::vault::InMemoryVault;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn wei(text: &str) -> Amount {
    let Ok(v) = Decimals::ETHER.parse_units(text) else {
        panic!("valid decimal literal: {text}");
    };
    v
}

fn fmt(amount: Amount) -> String {
    Decimals::ETHER.format_units(amount)
}

fn owner() -> Address {
    Address::from_bytes([0x01; 32])
}

fn other() -> Address {
    Address::from_bytes([0x02; 32])
}

fn custody() -> Address {
    Address::from_bytes([0xEE; 32])
}

/// Owner holds 1 000 000 token and 10 000 ether; `other` holds 10 000
/// ether and 2 token.
fn deploy() -> Exchange<InMemoryVault> {
    let mut vault = InMemoryVault::new(custody());
    for (asset, who, amount) in [
        (Asset::Token, owner(), wei("1000000")),
        (Asset::Ether, owner(), wei("10000")),
        (Asset::Ether, other(), wei("10000")),
        (Asset::Token, other(), wei("2")),
    ] {
        let Ok(()) = vault.mint(asset, &who, amount) else {
            panic!("mint succeeds");
        };
    }
    let Ok(exchange) = Exchange::new(&ExchangeConfig::default(), vault) else {
        panic!("valid config");
    };
    exchange
}

/// Pool seeded with 2000 token / 1000 ether by the owner.
fn seeded() -> Exchange<InMemoryVault> {
    let mut ex = deploy();
    let Ok(_) = ex.add_liquidity(&owner(), wei("2000"), wei("1000")) else {
        panic!("seeding succeeds");
    };
    ex
}

fn custody_balance(ex: &Exchange<InMemoryVault>, asset: Asset) -> Amount {
    ex.vault().balance_of(asset, &custody())
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

#[test]
fn adds_liquidity() {
    let mut ex = deploy();
    let Ok(dep) = ex.add_liquidity(&owner(), wei("200"), wei("100")) else {
        panic!("deposit succeeds");
    };
    assert_eq!(custody_balance(&ex, Asset::Ether), wei("100"));
    assert_eq!(ex.token_reserve(), wei("200"));
    assert!(!dep.shares().is_zero());
    assert_eq!(ex.shares_of(&owner()), dep.shares());
}

#[test]
fn seeding_fixes_reserves_exactly() {
    let ex = seeded();
    assert_eq!(ex.token_reserve(), wei("2000"));
    assert_eq!(ex.ether_reserve(), wei("1000"));
    assert_eq!(custody_balance(&ex, Asset::Token), wei("2000"));
    assert!(!ex.total_shares().is_zero());
}

#[test]
fn second_provider_pays_matching_ratio() {
    let mut ex = seeded();
    let Ok(()) = ex.vault_mut().mint(Asset::Token, &other(), wei("500")) else {
        panic!("mint succeeds");
    };
    let Ok(dep) = ex.add_liquidity(&other(), wei("500"), wei("10")) else {
        panic!("deposit succeeds");
    };
    assert_eq!(dep.token(), wei("20"));
    assert_eq!(ex.vault().balance_of(Asset::Token, &other()), wei("482"));
    assert_eq!(ex.reserves().token, wei("2020"));
}

#[test]
fn ratio_mismatch_is_reported() {
    let mut ex = seeded();
    let Err(err) = ex.add_liquidity(&other(), wei("1"), wei("10")) else {
        panic!("expected RatioMismatch");
    };
    assert_eq!(err.kind(), ErrorKind::RatioMismatch);
    assert_eq!(ex.reserves().ether, wei("1000"));
}

#[test]
fn removing_liquidity_is_proportional() {
    let mut ex = seeded();
    let half = Shares::new(ex.shares_of(&owner()).get() / U256::from(2u8));
    let Ok(w) = ex.remove_liquidity(&owner(), half) else {
        panic!("removal succeeds");
    };
    assert_eq!(w.token(), wei("1000"));
    assert_eq!(w.ether(), wei("500"));
    assert_eq!(ex.reserves().token, wei("1000"));
    assert_eq!(ex.reserves().ether, wei("500"));
}

#[test]
fn draining_all_shares_empties_pool() {
    let mut ex = seeded();
    let all = ex.shares_of(&owner());
    let Ok(_) = ex.remove_liquidity(&owner(), all) else {
        panic!("removal succeeds");
    };
    assert!(ex.reserves().is_empty());
    assert!(ex.total_shares().is_zero());
    assert_eq!(ex.vault().balance_of(Asset::Token, &owner()), wei("1000000"));
    assert_eq!(ex.vault().balance_of(Asset::Ether, &owner()), wei("10000"));
}

#[test]
fn add_then_remove_returns_deposit() {
    let mut ex = seeded();
    let Ok(()) = ex.vault_mut().mint(Asset::Token, &other(), wei("300")) else {
        panic!("mint succeeds");
    };
    let Ok(dep) = ex.add_liquidity(&other(), wei("300"), wei("150")) else {
        panic!("deposit succeeds");
    };
    let Ok(w) = ex.remove_liquidity(&other(), dep.shares()) else {
        panic!("removal succeeds");
    };
    assert_eq!(w.token(), dep.token());
    assert_eq!(w.ether(), dep.ether());
    assert_eq!(ex.vault().balance_of(Asset::Token, &other()), wei("302"));
}

#[test]
fn burning_foreign_shares_is_rejected() {
    let mut ex = seeded();
    let Err(AmmError::InsufficientShares { available, .. }) =
        ex.remove_liquidity(&other(), Shares::from_u128(1))
    else {
        panic!("expected InsufficientShares");
    };
    assert!(available.is_zero());
}

// ---------------------------------------------------------------------------
// Prices and quotes
// ---------------------------------------------------------------------------

#[test]
fn returns_correct_prices() {
    let ex = seeded();
    let (tokens, ether) = (ex.token_reserve(), ex.ether_reserve());

    let Ok(ether_per_token) = ex.price(ether, tokens) else {
        panic!("price exists");
    };
    let Ok(token_per_ether) = ex.price(tokens, ether) else {
        panic!("price exists");
    };
    assert_eq!(ether_per_token.value(), U256::from(500u64));
    assert_eq!(token_per_ether.value(), U256::from(2_000u64));
}

#[test]
fn price_with_zero_denominator() {
    let ex = seeded();
    assert_eq!(ex.price(wei("1"), Amount::ZERO), Err(AmmError::DivisionByZero));
}

#[test]
fn returns_correct_token_amount() {
    let ex = seeded();
    let quote = |ether: &str| {
        let Ok(v) = ex.token_amount(wei(ether)) else {
            panic!("quote succeeds");
        };
        fmt(v)
    };
    assert_eq!(quote("1"), "1.998001998001998001");
    assert_eq!(quote("100"), "181.818181818181818181");
    assert_eq!(quote("1000"), "1000.0");
}

#[test]
fn returns_correct_ether_amount() {
    let ex = seeded();
    let quote = |tokens: &str| {
        let Ok(v) = ex.ether_amount(wei(tokens)) else {
            panic!("quote succeeds");
        };
        fmt(v)
    };
    assert_eq!(quote("2"), "0.999000999000999");
    assert_eq!(quote("100"), "47.619047619047619047");
    assert_eq!(quote("2000"), "500.0");
}

#[test]
fn exact_output_quote_rounds_up() {
    let ex = seeded();
    let Ok(needed) = ex.input_amount(wei("1"), Direction::BToA) else {
        panic!("quote succeeds");
    };
    let Ok(got) = ex.token_amount(needed) else {
        panic!("quote succeeds");
    };
    assert!(got >= wei("1"));
    let Err(AmmError::InsufficientReserve(_)) = ex.input_amount(wei("2000"), Direction::BToA) else {
        panic!("cannot buy the whole reserve");
    };
}

#[test]
fn empty_pool_rejects_quotes() {
    let ex = deploy();
    assert_eq!(ex.token_amount(wei("1")), Err(AmmError::EmptyPool));
    assert_eq!(ex.ether_amount(wei("1")), Err(AmmError::EmptyPool));
}

// ---------------------------------------------------------------------------
// Ether -> token
// ---------------------------------------------------------------------------

#[test]
fn ether_to_token_transfers_at_least_min_amount() {
    let mut ex = seeded();
    let Ok(out) = ex.ether_to_token_swap(&other(), wei("1"), wei("1.99")) else {
        panic!("swap succeeds");
    };
    assert_eq!(fmt(out), "1.998001998001998001");
    assert_eq!(ex.vault().balance_of(Asset::Ether, &other()), wei("9999"));
    assert_eq!(
        fmt(ex.vault().balance_of(Asset::Token, &other())),
        "3.998001998001998001"
    );
    assert_eq!(fmt(custody_balance(&ex, Asset::Ether)), "1001.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Token)), "1998.001998001998001999");
}

#[test]
fn ether_to_token_below_minimum_fails() {
    let mut ex = seeded();
    let Err(AmmError::SlippageExceeded { .. }) =
        ex.ether_to_token_swap(&other(), wei("1"), wei("2"))
    else {
        panic!("expected SlippageExceeded");
    };
    assert_eq!(ex.reserves().token, wei("2000"));
    assert_eq!(ex.reserves().ether, wei("1000"));
}

#[test]
fn ether_to_token_allows_zero_swaps() {
    let mut ex = seeded();
    assert_eq!(ex.ether_to_token_swap(&other(), Amount::ZERO, Amount::ZERO), Ok(Amount::ZERO));
    assert_eq!(fmt(ex.vault().balance_of(Asset::Token, &other())), "2.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Ether)), "1000.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Token)), "2000.0");
}

// ---------------------------------------------------------------------------
// Token -> ether
// ---------------------------------------------------------------------------

#[test]
fn token_to_ether_transfers_at_least_min_amount() {
    let mut ex = seeded();
    let Ok(out) = ex.token_to_ether_swap(&other(), wei("2"), wei("0.9")) else {
        panic!("swap succeeds");
    };
    assert_eq!(fmt(out), "0.999000999000999");
    assert_eq!(fmt(ex.vault().balance_of(Asset::Token, &other())), "0.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Ether)), "999.000999000999001");
    assert_eq!(fmt(custody_balance(&ex, Asset::Token)), "2002.0");
}

#[test]
fn token_to_ether_below_minimum_fails() {
    let mut ex = seeded();
    let Err(AmmError::SlippageExceeded { output, min_output }) =
        ex.token_to_ether_swap(&other(), wei("2"), wei("1"))
    else {
        panic!("expected SlippageExceeded");
    };
    assert!(output < min_output);
    assert_eq!(fmt(ex.vault().balance_of(Asset::Token, &other())), "2.0");
}

#[test]
fn token_to_ether_allows_zero_swaps() {
    let mut ex = seeded();
    assert_eq!(ex.token_to_ether_swap(&other(), Amount::ZERO, Amount::ZERO), Ok(Amount::ZERO));
    assert_eq!(fmt(ex.vault().balance_of(Asset::Token, &other())), "2.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Ether)), "1000.0");
    assert_eq!(fmt(custody_balance(&ex, Asset::Token)), "2000.0");
}

#[test]
fn swap_against_empty_pool() {
    let mut ex = deploy();
    assert_eq!(
        ex.ether_to_token_swap(&other(), wei("1"), Amount::ZERO),
        Err(AmmError::EmptyPool)
    );
}

// ---------------------------------------------------------------------------
// Rollback
// ---------------------------------------------------------------------------

/// Accepts every inbound transfer and rejects every payout.
#[derive(Debug)]
struct NoPayouts(InMemoryVault);

impl AssetTransfer for NoPayouts {
    fn can_transfer_in(
        &self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.0.can_transfer_in(asset, from, amount)
    }

    fn can_transfer_out(&self, _: Asset, _: &Address, _: Amount) -> Result<(), TransferError> {
        Err(TransferError::Rejected("payouts disabled".into()))
    }

    fn transfer_in(
        &mut self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.0.transfer_in(asset, from, amount)
    }

    fn transfer_out(&mut self, _: Asset, _: &Address, _: Amount) -> Result<(), TransferError> {
        Err(TransferError::Rejected("payouts disabled".into()))
    }
}

fn assert_custody_matches_reserves<V: AssetTransfer>(ex: &Exchange<V>, vault: &InMemoryVault) {
    assert_eq!(vault.balance_of(Asset::Token, &custody()), ex.token_reserve());
    assert_eq!(vault.balance_of(Asset::Ether, &custody()), ex.ether_reserve());
}

#[test]
fn failed_payout_restores_pool_and_moves_nothing() {
    let (pool, vault) = seeded().into_parts();
    let mut ex = Exchange::from_parts(pool, NoPayouts(vault));

    let Err(err) = ex.ether_to_token_swap(&other(), wei("1"), Amount::ZERO) else {
        panic!("expected TransferFailed");
    };
    assert_eq!(err.kind(), ErrorKind::TransferFailed);
    assert_eq!(ex.reserves().token, wei("2000"));
    assert_eq!(ex.reserves().ether, wei("1000"));
    assert_eq!(ex.vault().0.balance_of(Asset::Ether, &other()), wei("10000"));
    assert_custody_matches_reserves(&ex, &ex.vault().0);

    let Err(AmmError::TransferFailed(TransferError::Rejected(_))) =
        ex.remove_liquidity(&owner(), Shares::from(wei("200")))
    else {
        panic!("expected TransferFailed");
    };
    assert_eq!(ex.total_shares(), Shares::from(wei("2000")));
    assert_custody_matches_reserves(&ex, &ex.vault().0);
}

#[test]
fn underfunded_caller_leaves_pool_untouched() {
    let mut ex = seeded();
    let Err(AmmError::TransferFailed(TransferError::InsufficientBalance { requested, .. })) =
        ex.token_to_ether_swap(&other(), wei("3"), Amount::ZERO)
    else {
        panic!("expected InsufficientBalance");
    };
    assert_eq!(requested, wei("3"));
    assert_eq!(ex.reserves().token, wei("2000"));
    assert_custody_matches_reserves(&ex, ex.vault());
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

#[test]
fn shared_handle_sees_mutations_from_clones() {
    let shared = SharedExchange::new(seeded());
    let clone = shared.clone();
    let Ok(_) = clone.ether_to_token_swap(&other(), wei("1"), Amount::ZERO) else {
        panic!("swap succeeds");
    };
    assert_eq!(fmt(shared.reserves().ether), "1001.0");
    assert_eq!(shared.total_shares(), clone.total_shares());
}
