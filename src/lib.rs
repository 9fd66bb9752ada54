//! # cp-exchange
//!
//! Two-asset constant-product exchange engine: one token traded against
//! ether through a shared liquidity pool, with exact 256-bit integer
//! arithmetic and no fee.
//!
//! The engine keeps `token_reserve × ether_reserve` non-decreasing across
//! swaps, issues liquidity shares that preserve the reserve ratio for
//! existing providers, and rejects trades below a caller-supplied minimum.
//! Every rejection is a distinct [`AmmError`](error::AmmError) variant and
//! leaves the pool untouched.
//!
//! ## Seed a pool and swap
//!
//! ```rust
//! use cp_exchange::prelude::*;
//!
//! let owner = Address::from_bytes([1u8; 32]);
//! let user = Address::from_bytes([2u8; 32]);
//! let units = Decimals::ETHER;
//!
//! let mut vault = InMemoryVault::new(Address::from_bytes([0xEE; 32]));
//! vault.mint(Asset::Token, &owner, units.parse_units("2000")?)?;
//! vault.mint(Asset::Ether, &owner, units.parse_units("1000")?)?;
//! vault.mint(Asset::Ether, &user, units.parse_units("1")?)?;
//!
//! let mut exchange = Exchange::new(&ExchangeConfig::default(), vault)?;
//! exchange.add_liquidity(&owner, units.parse_units("2000")?, units.parse_units("1000")?)?;
//!
//! let tokens = exchange.ether_to_token_swap(
//!     &user,
//!     units.parse_units("1")?,
//!     units.parse_units("1.99")?,
//! )?;
//! assert_eq!(units.format_units(tokens), "1.998001998001998001");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ SharedExchange │  one RwLock per exchange
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │    Exchange    │  pool + AssetTransfer, rollback on failed transfer
//! └───────┬────────┘
//!         ▼
//! ┌─────────────────────┐
//! │ ConstantProductPool │  SwapPool + LiquidityPool
//! └───────┬─────────────┘
//!         ▼
//! ┌──────────────────────────────┐
//! │ executor / LiquidityLedger   │  read pricing, mutate ReservePair
//! └───────┬──────────────────────┘
//!         ▼
//! ┌────────────────┐
//! │    pricing     │  pure functions over reserves
//! └────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`SwapRequest`](domain::SwapRequest), etc. |
//! | [`math`] | 256/512-bit integers, [`mul_div`](math::mul_div), [`CheckedArithmetic`](math::CheckedArithmetic) |
//! | [`pricing`] | [`output_amount`](pricing::output_amount), [`input_amount`](pricing::input_amount), [`spot_price`](pricing::spot_price) |
//! | [`pools`] | Reserves, ledger, swap executor, pool, exchange, shared handle |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`AssetTransfer`](traits::AssetTransfer), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`vault`] | [`InMemoryVault`](vault::InMemoryVault) |
//! | [`error`] | [`AmmError`](error::AmmError), [`TransferError`](error::TransferError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod traits;
pub mod vault;
