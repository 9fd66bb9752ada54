//! Constant-product pool aggregate.
//!
//! [`ConstantProductPool`] owns exactly one [`ReservePair`] and one
//! [`LiquidityLedger`] and exposes them through [`SwapPool`] and
//! [`LiquidityPool`]. Asset A is the token, asset B is ether.
//!
//! # Invariant
//!
//! `total_shares == 0 ⟺ reserves empty`. The only Empty → Seeded
//! transition is the first deposit; Seeded → Empty happens only when the
//! last share is burned.

use core::fmt;

use super::{executor, LiquidityLedger, ReservePair};
use crate::config::ExchangeConfig;
use crate::domain::{
    Address, Amount, Asset, Deposit, Direction, Price, Reserves, Shares, SwapRequest, Withdrawal,
};
use crate::error::AmmError;
use crate::pricing::{input_amount, spot_price};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A two-asset constant-product pool with no fee.
///
/// Created from an [`ExchangeConfig`] via [`FromConfig`]. The pool starts
/// empty; the first [`add_liquidity`](LiquidityPool::add_liquidity) seeds
/// it.
///
/// # Example
///
/// ```rust
/// use cp_exchange::config::ExchangeConfig;
/// use cp_exchange::domain::{Address, Amount, SwapRequest};
/// use cp_exchange::pools::ConstantProductPool;
/// use cp_exchange::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let mut pool = ConstantProductPool::from_config(&ExchangeConfig::default())?;
/// let lp = Address::from_bytes([1u8; 32]);
/// pool.add_liquidity(Amount::from_u128(2_000_000), Amount::from_u128(1_000_000), &lp)?;
///
/// let out = pool.swap(&SwapRequest::ether_to_token(Amount::from_u128(1_000), Amount::ZERO))?;
/// assert_eq!(out, Amount::from_u128(1_998));
/// # Ok::<(), cp_exchange::error::AmmError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    config: ExchangeConfig,
    reserves: ReservePair,
    ledger: LiquidityLedger,
}

/// Pool state captured before a mutation so it can be restored.
///
/// Holds the reserves, the share total and at most one provider's
/// position: every mutation touches at most one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    reserves: ReservePair,
    total_shares: Shares,
    position: Option<(Address, Shares)>,
}

impl ConstantProductPool {
    /// Pool parameters.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// The reserve pair.
    #[must_use]
    pub const fn reserve_pair(&self) -> &ReservePair {
        &self.reserves
    }

    /// The share ledger.
    #[must_use]
    pub const fn ledger(&self) -> &LiquidityLedger {
        &self.ledger
    }

    /// Token reserve.
    pub const fn token_reserve(&self) -> Amount {
        self.reserves.reserve_a()
    }

    /// Ether reserve.
    pub const fn ether_reserve(&self) -> Amount {
        self.reserves.reserve_b()
    }

    /// Input needed in `direction` to receive exactly `output`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::InsufficientReserve`] if `output` would drain the
    ///   output reserve.
    /// - [`AmmError::ArithmeticOverflow`] if the input exceeds 256 bits.
    pub fn quote_input(&self, output: Amount, direction: Direction) -> Result<Amount, AmmError> {
        let (input_reserve, output_reserve) = self.reserves.snapshot().oriented(direction);
        input_amount(output, input_reserve, output_reserve)
    }

    /// Scaled ratio of two arbitrary reserve values using the pool's price
    /// scale.
    ///
    /// # Errors
    ///
    /// [`AmmError::DivisionByZero`] if `denominator_reserve` is zero.
    pub fn price(
        &self,
        numerator_reserve: Amount,
        denominator_reserve: Amount,
    ) -> Result<Price, AmmError> {
        spot_price(numerator_reserve, denominator_reserve, self.config.price_scale())
    }

    /// Captures the state needed to undo one mutation on behalf of
    /// `provider` (or a swap, when `None`).
    #[must_use]
    pub fn checkpoint(&self, provider: Option<&Address>) -> Checkpoint {
        Checkpoint {
            reserves: self.reserves,
            total_shares: self.ledger.total_shares(),
            position: provider.map(|p| (*p, self.ledger.shares_of(p))),
        }
    }

    /// Restores a [`Checkpoint`] taken on this pool.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.reserves = checkpoint.reserves;
        self.ledger.rewind(checkpoint.total_shares, checkpoint.position);
    }
}

impl Default for ConstantProductPool {
    fn default() -> Self {
        let config = ExchangeConfig::default();
        Self {
            config,
            reserves: ReservePair::empty(),
            ledger: LiquidityLedger::new(config.share_seed()),
        }
    }
}

impl FromConfig<ExchangeConfig> for ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ExchangeConfig::validate`].
    fn from_config(config: &ExchangeConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            reserves: ReservePair::empty(),
            ledger: LiquidityLedger::new(config.share_seed()),
        })
    }
}

impl SwapPool for ConstantProductPool {
    fn swap(&mut self, request: &SwapRequest) -> Result<Amount, AmmError> {
        executor::execute(&mut self.reserves, request)
    }

    fn quote(&self, request: &SwapRequest) -> Result<Amount, AmmError> {
        executor::quote(&self.reserves, request)
    }

    /// `counterpart_reserve × scale / base_reserve`.
    fn spot_price(&self, base: Asset) -> Result<Price, AmmError> {
        let snapshot = self.reserves.snapshot();
        self.price(snapshot.of(base.counterpart()), snapshot.of(base))
    }

    fn reserves(&self) -> Reserves {
        self.reserves.snapshot()
    }
}

impl LiquidityPool for ConstantProductPool {
    fn add_liquidity(
        &mut self,
        max_token: Amount,
        ether: Amount,
        provider: &Address,
    ) -> Result<Deposit, AmmError> {
        self.ledger
            .add_liquidity(&mut self.reserves, max_token, ether, provider)
    }

    fn remove_liquidity(
        &mut self,
        shares: Shares,
        provider: &Address,
    ) -> Result<Withdrawal, AmmError> {
        self.ledger
            .remove_liquidity(&mut self.reserves, shares, provider)
    }

    fn total_shares(&self) -> Shares {
        self.ledger.total_shares()
    }

    fn shares_of(&self, provider: &Address) -> Shares {
        self.ledger.shares_of(provider)
    }
}

impl fmt::Display for ConstantProductPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstantProductPool(token={}, ether={}, shares={})",
            self.reserves.reserve_a(),
            self.reserves.reserve_b(),
            self.ledger.total_shares()
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ShareSeed;
    use crate::math::U256;

    const WEI: u128 = 1_000_000_000_000_000_000;

    fn eth(units: u128) -> Amount {
        Amount::from_u128(units * WEI)
    }

    fn lp() -> Address {
        Address::from_bytes([7u8; 32])
    }

    fn seeded() -> ConstantProductPool {
        let mut pool = ConstantProductPool::default();
        let Ok(_) = pool.add_liquidity(eth(2_000), eth(1_000), &lp()) else {
            panic!("seeding succeeds");
        };
        pool
    }

    #[test]
    fn from_config_starts_empty() {
        let cfg = ExchangeConfig::default().with_share_seed(ShareSeed::Ether);
        let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("valid config");
        };
        assert!(pool.reserves().is_empty());
        assert!(pool.total_shares().is_zero());
        assert_eq!(pool.ledger().seed(), ShareSeed::Ether);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = ExchangeConfig::default().with_price_scale(U256::zero());
        let Err(AmmError::InvalidConfiguration(_)) = ConstantProductPool::from_config(&cfg) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn spot_prices_in_both_directions() {
        let pool = seeded();
        let Ok(token_price) = pool.spot_price(Asset::Token) else {
            panic!("seeded pool has a price");
        };
        let Ok(ether_price) = pool.spot_price(Asset::Ether) else {
            panic!("seeded pool has a price");
        };
        assert_eq!(token_price.value(), U256::from(500u64));
        assert_eq!(ether_price.value(), U256::from(2_000u64));
    }

    #[test]
    fn empty_pool_has_no_price() {
        let pool = ConstantProductPool::default();
        assert_eq!(pool.spot_price(Asset::Token), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn custom_price_scale() {
        let cfg = ExchangeConfig::default().with_price_scale(U256::from(1_000_000u64));
        let Ok(mut pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("valid config");
        };
        let Ok(_) = pool.add_liquidity(eth(3), eth(1), &lp()) else {
            panic!("seeding succeeds");
        };
        let Ok(p) = pool.spot_price(Asset::Token) else {
            panic!("seeded pool has a price");
        };
        assert_eq!(p.value(), U256::from(333_333u64));
    }

    #[test]
    fn quote_input_covers_requested_output() {
        let pool = seeded();
        let want = eth(10);
        let Ok(needed) = pool.quote_input(want, Direction::BToA) else {
            panic!("quote succeeds");
        };
        let Ok(got) = pool.quote(&SwapRequest::ether_to_token(needed, Amount::ZERO)) else {
            panic!("quote succeeds");
        };
        assert!(got >= want);
    }

    #[test]
    fn checkpoint_restores_liquidity_change() {
        let mut pool = seeded();
        let other = Address::from_bytes([9u8; 32]);
        let cp = pool.checkpoint(Some(&other));
        let Ok(_) = pool.add_liquidity(eth(20), eth(10), &other) else {
            panic!("deposit succeeds");
        };
        assert!(!pool.shares_of(&other).is_zero());
        pool.restore(cp);
        assert_eq!(pool, seeded());
    }

    #[test]
    fn checkpoint_restores_swap() {
        let mut pool = seeded();
        let cp = pool.checkpoint(None);
        let Ok(_) = pool.swap(&SwapRequest::token_to_ether(eth(5), Amount::ZERO)) else {
            panic!("swap succeeds");
        };
        pool.restore(cp);
        assert_eq!(pool.reserves(), seeded().reserves());
    }

    #[test]
    fn display() {
        let s = seeded().to_string();
        assert!(s.starts_with("ConstantProductPool(token=2000000000000000000000"));
    }
}
