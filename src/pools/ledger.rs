//! Liquidity share accounting.
//!
//! The ledger converts deposits and withdrawals into shares while keeping
//! the reserve ratio seen by existing providers unchanged.
//!
//! # Deposit (seeded pool)
//!
//! ```text
//! required_a = ⌊ amount_b · reserve_a / reserve_b ⌋
//! shares     = ⌊ total_shares · amount_b / reserve_b ⌋
//! ```
//!
//! # Withdrawal
//!
//! ```text
//! amount_x = ⌊ reserve_x · shares / total_shares ⌋
//! ```
//!
//! Every step computes its results first, then commits the reserve update
//! and only then the share update, so an error at any point leaves both
//! untouched.

use std::collections::BTreeMap;

use tracing::debug;

use super::ReservePair;
use crate::config::ShareSeed;
use crate::domain::{Address, Amount, Delta, Deposit, Rounding, Shares, Withdrawal};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};

/// Outstanding shares and the per-provider positions that sum to them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiquidityLedger {
    total_shares: Shares,
    positions: BTreeMap<Address, Shares>,
    seed: ShareSeed,
}

impl LiquidityLedger {
    /// An empty ledger using `seed` for the first deposit.
    #[must_use]
    pub const fn new(seed: ShareSeed) -> Self {
        Self {
            total_shares: Shares::ZERO,
            positions: BTreeMap::new(),
            seed,
        }
    }

    /// Total outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Shares held by `provider`.
    #[must_use]
    pub fn shares_of(&self, provider: &Address) -> Shares {
        self.positions.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Non-empty positions in address order.
    pub fn positions(&self) -> impl Iterator<Item = (&Address, Shares)> + '_ {
        self.positions.iter().map(|(addr, shares)| (addr, *shares))
    }

    /// Number of providers holding a non-zero position.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.positions.len()
    }

    /// Seeding convention applied to the first deposit.
    #[must_use]
    pub const fn seed(&self) -> ShareSeed {
        self.seed
    }

    /// Deposits into `reserves` and credits shares to `provider`.
    ///
    /// `max_a` is taken as-is when seeding and as an upper bound otherwise.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if seeding with a zero side, or if the
    ///   deposit would mint zero shares.
    /// - [`AmmError::RatioMismatch`] if `max_a` is below the required
    ///   matching amount.
    /// - [`AmmError::ArithmeticOverflow`] on 256-bit overflow.
    pub fn add_liquidity(
        &mut self,
        reserves: &mut ReservePair,
        max_a: Amount,
        amount_b: Amount,
        provider: &Address,
    ) -> Result<Deposit, AmmError> {
        let (amount_a, minted) = if self.total_shares.is_zero() {
            self.seeding_terms(reserves, max_a, amount_b)?
        } else {
            self.proportional_terms(reserves, max_a, amount_b)?
        };

        let total = self.total_shares.safe_add(&minted)?;
        let held = self.shares_of(provider).safe_add(&minted)?;

        reserves.apply_delta(Delta::Credit(amount_a), Delta::Credit(amount_b))?;
        self.total_shares = total;
        self.positions.insert(*provider, held);

        debug!(
            %provider,
            token = %amount_a,
            ether = %amount_b,
            minted = %minted,
            total_shares = %total,
            "liquidity added"
        );
        Ok(Deposit::new(amount_a, amount_b, minted))
    }

    /// Burns `shares` from `provider` and debits the proportional amounts
    /// from `reserves`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `provider` holds fewer than
    ///   `shares`.
    pub fn remove_liquidity(
        &mut self,
        reserves: &mut ReservePair,
        shares: Shares,
        provider: &Address,
    ) -> Result<Withdrawal, AmmError> {
        if self.total_shares.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount("cannot burn zero shares"));
        }
        let held = self.shares_of(provider);
        if shares > held {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available: held,
            });
        }

        let (reserve_a, reserve_b) = reserves.current_reserves();
        let total = self.total_shares.get();
        let amount_a = Amount::new(mul_div(reserve_a.get(), shares.get(), total, Rounding::Down)?);
        let amount_b = Amount::new(mul_div(reserve_b.get(), shares.get(), total, Rounding::Down)?);

        let remaining_total = self.total_shares.safe_sub(&shares)?;
        let remaining_held = held.safe_sub(&shares)?;

        reserves.apply_delta(Delta::Debit(amount_a), Delta::Debit(amount_b))?;
        self.total_shares = remaining_total;
        if remaining_held.is_zero() {
            self.positions.remove(provider);
        } else {
            self.positions.insert(*provider, remaining_held);
        }
        debug_assert!(!remaining_total.is_zero() || reserves.is_empty());

        debug!(
            %provider,
            token = %amount_a,
            ether = %amount_b,
            burned = %shares,
            total_shares = %remaining_total,
            "liquidity removed"
        );
        Ok(Withdrawal::new(amount_a, amount_b))
    }

    /// Resets the total and, if given, one provider's position to earlier
    /// values.
    pub(crate) fn rewind(&mut self, total_shares: Shares, position: Option<(Address, Shares)>) {
        self.total_shares = total_shares;
        if let Some((provider, shares)) = position {
            if shares.is_zero() {
                self.positions.remove(&provider);
            } else {
                self.positions.insert(provider, shares);
            }
        }
    }

    fn seeding_terms(
        &self,
        reserves: &ReservePair,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(Amount, Shares), AmmError> {
        if !reserves.is_empty() {
            return Err(AmmError::InsufficientReserve(
                "reserves present without outstanding shares",
            ));
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroAmount("seeding requires both assets"));
        }
        Ok((amount_a, self.seed.initial_shares(amount_a, amount_b)))
    }

    fn proportional_terms(
        &self,
        reserves: &ReservePair,
        max_a: Amount,
        amount_b: Amount,
    ) -> Result<(Amount, Shares), AmmError> {
        let (reserve_a, reserve_b) = reserves.current_reserves();
        if reserve_b.is_zero() {
            return Err(AmmError::EmptyPool);
        }

        let required_a = amount_b.safe_mul_div(&reserve_a, &reserve_b, Rounding::Down)?;
        if max_a < required_a {
            return Err(AmmError::RatioMismatch {
                required: required_a,
                offered: max_a,
            });
        }

        let minted = Shares::new(mul_div(
            self.total_shares.get(),
            amount_b.get(),
            reserve_b.get(),
            Rounding::Down,
        )?);
        if minted.is_zero() {
            return Err(AmmError::ZeroAmount("deposit too small to mint shares"));
        }
        Ok((required_a, minted))
    }
}
