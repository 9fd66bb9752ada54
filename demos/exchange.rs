//! Token/ether exchange walkthrough.
//!
//! Seeds a pool, quotes prices, swaps in both directions, shows a rejected
//! trade, and withdraws liquidity.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cp_exchange=debug cargo run --example exchange
//! ```

use cp_exchange::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let units = Decimals::ETHER;
    let owner = Address::from_bytes([1u8; 32]);
    let trader = Address::from_bytes([2u8; 32]);

    println!("=== Constant-product exchange (token / ether) ===\n");

    // ── 1. Fund accounts ────────────────────────────────────────────────
    let mut vault = InMemoryVault::new(Address::from_bytes([0xEE; 32]));
    vault.mint(Asset::Token, &owner, units.parse_units("1000000")?)?;
    vault.mint(Asset::Ether, &owner, units.parse_units("10000")?)?;
    vault.mint(Asset::Ether, &trader, units.parse_units("10")?)?;

    // ── 2. Seed the pool ────────────────────────────────────────────────
    let mut exchange = Exchange::new(&ExchangeConfig::default(), vault)?;
    let deposit = exchange.add_liquidity(
        &owner,
        units.parse_units("2000")?,
        units.parse_units("1000")?,
    )?;
    println!("Seeded: {deposit}");
    println!("Reserves: {}", exchange.reserves());

    // ── 3. Prices and quotes ────────────────────────────────────────────
    let (tokens, ether) = (exchange.token_reserve(), exchange.ether_reserve());
    println!("\nEther per token: {}", exchange.price(ether, tokens)?);
    println!("Token per ether: {}", exchange.price(tokens, ether)?);
    for sold in ["1", "100", "1000"] {
        let out = exchange.token_amount(units.parse_units(sold)?)?;
        println!("  {sold} ether buys {} token", units.format_units(out));
    }

    // ── 4. Swaps ────────────────────────────────────────────────────────
    let bought = exchange.ether_to_token_swap(
        &trader,
        units.parse_units("1")?,
        units.parse_units("1.99")?,
    )?;
    println!("\nTrader bought {} token for 1 ether", units.format_units(bought));

    let sold_back = exchange.token_to_ether_swap(&trader, bought, Amount::ZERO)?;
    println!("Trader sold them back for {} ether", units.format_units(sold_back));

    match exchange.ether_to_token_swap(&trader, units.parse_units("1")?, units.parse_units("5")?) {
        Err(e) => println!("Rejected as expected: {e}"),
        Ok(out) => println!("Unexpected fill: {out}"),
    }

    // ── 5. Withdraw ─────────────────────────────────────────────────────
    let shares = exchange.shares_of(&owner);
    let withdrawal = exchange.remove_liquidity(&owner, shares)?;
    println!("\nOwner withdrew {withdrawal}");
    println!("Reserves: {}", exchange.reserves());

    Ok(())
}
