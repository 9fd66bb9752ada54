//! Liquidity management trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! [`LiquidityPool::total_shares`] only changes through
//! [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`], and always equals the sum of every
//! provider's balance:
//!
//! ```text
//! total_shares = Σ shares_of(provider)
//! ```
//!
//! # Pool States
//!
//! A pool is either **Empty** (no shares, both reserves zero) or **Seeded**
//! (shares outstanding, both reserves positive). The first deposit seeds
//! it; burning the last share empties both reserves exactly.

use super::SwapPool;
use crate::domain::{Address, Amount, Deposit, Shares, Withdrawal};
use crate::error::AmmError;

/// Trait for pools that issue and redeem liquidity shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits both assets and mints shares to `provider`.
    ///
    /// On an empty pool both amounts are accepted as-is. On a seeded pool
    /// `ether` is exact and `max_token` is an upper bound: only the
    /// ratio-matching `⌊ether × reserve_token / reserve_ether⌋` is taken.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if seeding with a zero side, or if the
    ///   deposit would mint zero shares.
    /// - [`AmmError::RatioMismatch`] if `max_token` is below the required
    ///   matching amount.
    /// - [`AmmError::ArithmeticOverflow`] on 256-bit overflow.
    fn add_liquidity(
        &mut self,
        max_token: Amount,
        ether: Amount,
        provider: &Address,
    ) -> Result<Deposit, AmmError>;

    /// Burns `shares` from `provider` and releases the proportional share of
    /// both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `provider` holds fewer than
    ///   `shares`.
    fn remove_liquidity(
        &mut self,
        shares: Shares,
        provider: &Address,
    ) -> Result<Withdrawal, AmmError>;

    /// Total outstanding shares.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Shares held by `provider` (zero if unknown).
    #[must_use]
    fn shares_of(&self, provider: &Address) -> Shares;
}
