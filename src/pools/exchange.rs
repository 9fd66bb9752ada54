//! Token/ether exchange: a pool plus the collaborator that moves assets.
//!
//! Every operation mutates the pool first, then settles the asset
//! movements with the [`AssetTransfer`] collaborator. All movements are
//! checked before any of them runs. If one is refused the pool is restored
//! from a [`Checkpoint`] and [`AmmError::TransferFailed`] is returned with
//! no balance changed.

use tracing::{debug, error, instrument, warn};

use super::{Checkpoint, ConstantProductPool};
use crate::config::ExchangeConfig;
use crate::domain::{
    Address, Amount, Asset, Deposit, Direction, Price, Reserves, Shares, SwapRequest, Withdrawal,
};
use crate::error::{AmmError, TransferError};
use crate::traits::{AssetTransfer, FromConfig, LiquidityPool, SwapPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    In,
    Out,
}

/// One asset movement between an account and pool custody.
#[derive(Debug, Clone, Copy)]
struct Leg {
    flow: Flow,
    asset: Asset,
    account: Address,
    amount: Amount,
}

impl Leg {
    const fn pull(asset: Asset, account: Address, amount: Amount) -> Self {
        Self {
            flow: Flow::In,
            asset,
            account,
            amount,
        }
    }

    const fn pay(asset: Asset, account: Address, amount: Amount) -> Self {
        Self {
            flow: Flow::Out,
            asset,
            account,
            amount,
        }
    }

    fn check<V: AssetTransfer>(&self, vault: &V) -> Result<(), TransferError> {
        match self.flow {
            Flow::In => vault.can_transfer_in(self.asset, &self.account, self.amount),
            Flow::Out => vault.can_transfer_out(self.asset, &self.account, self.amount),
        }
    }

    fn run<V: AssetTransfer>(&self, vault: &mut V, flow: Flow) -> Result<(), TransferError> {
        match flow {
            Flow::In => vault.transfer_in(self.asset, &self.account, self.amount),
            Flow::Out => vault.transfer_out(self.asset, &self.account, self.amount),
        }
    }

    const fn reverse_flow(&self) -> Flow {
        match self.flow {
            Flow::In => Flow::Out,
            Flow::Out => Flow::In,
        }
    }
}

/// A constant-product token/ether exchange bound to an asset-transfer
/// collaborator.
///
/// # Example
///
/// ```rust
/// use cp_exchange::config::ExchangeConfig;
/// use cp_exchange::domain::{Address, Amount, Asset};
/// use cp_exchange::pools::Exchange;
/// use cp_exchange::vault::InMemoryVault;
///
/// let lp = Address::from_bytes([1u8; 32]);
/// let mut vault = InMemoryVault::new(Address::from_bytes([0xEE; 32]));
/// vault.mint(Asset::Token, &lp, Amount::from_u128(2_000))?;
/// vault.mint(Asset::Ether, &lp, Amount::from_u128(1_000))?;
///
/// let mut exchange = Exchange::new(&ExchangeConfig::default(), vault)?;
/// exchange.add_liquidity(&lp, Amount::from_u128(2_000), Amount::from_u128(1_000))?;
/// assert_eq!(exchange.token_reserve(), Amount::from_u128(2_000));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<V> {
    pool: ConstantProductPool,
    vault: V,
}

impl<V: AssetTransfer> Exchange<V> {
    /// Creates an empty exchange.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ExchangeConfig::validate`].
    pub fn new(config: &ExchangeConfig, vault: V) -> Result<Self, AmmError> {
        Ok(Self::from_parts(ConstantProductPool::from_config(config)?, vault))
    }

    /// Binds an existing pool to a collaborator.
    pub const fn from_parts(pool: ConstantProductPool, vault: V) -> Self {
        Self { pool, vault }
    }

    /// Splits the exchange back into its parts.
    pub fn into_parts(self) -> (ConstantProductPool, V) {
        (self.pool, self.vault)
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &ConstantProductPool {
        &self.pool
    }

    /// The asset-transfer collaborator.
    pub const fn vault(&self) -> &V {
        &self.vault
    }

    /// Mutable access to the collaborator, e.g. to fund accounts.
    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }

    /// Deposits ether and up to `max_tokens` token for `provider`.
    ///
    /// On a seeded pool only the ratio-matching token amount is pulled.
    ///
    /// # Errors
    ///
    /// Any error of [`LiquidityPool::add_liquidity`], or
    /// [`AmmError::TransferFailed`] if either asset cannot be pulled.
    #[instrument(
        level = "debug",
        skip_all,
        fields(provider = %provider, max_tokens = %max_tokens, ether = %ether)
    )]
    pub fn add_liquidity(
        &mut self,
        provider: &Address,
        max_tokens: Amount,
        ether: Amount,
    ) -> Result<Deposit, AmmError> {
        let checkpoint = self.pool.checkpoint(Some(provider));
        let deposit = self
            .pool
            .add_liquidity(max_tokens, ether, provider)
            .inspect_err(|e| warn!(error = %e, "add_liquidity rejected"))?;

        self.settle(
            checkpoint,
            &[
                Leg::pull(Asset::Token, *provider, deposit.token()),
                Leg::pull(Asset::Ether, *provider, deposit.ether()),
            ],
        )?;
        Ok(deposit)
    }

    /// Burns `shares` and pays both assets out to `provider`.
    ///
    /// # Errors
    ///
    /// Any error of [`LiquidityPool::remove_liquidity`], or
    /// [`AmmError::TransferFailed`] if either payout fails.
    #[instrument(level = "debug", skip_all, fields(provider = %provider, shares = %shares))]
    pub fn remove_liquidity(
        &mut self,
        provider: &Address,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        let checkpoint = self.pool.checkpoint(Some(provider));
        let withdrawal = self
            .pool
            .remove_liquidity(shares, provider)
            .inspect_err(|e| warn!(error = %e, "remove_liquidity rejected"))?;

        self.settle(
            checkpoint,
            &[
                Leg::pay(Asset::Token, *provider, withdrawal.token()),
                Leg::pay(Asset::Ether, *provider, withdrawal.ether()),
            ],
        )?;
        Ok(withdrawal)
    }

    /// Sells `ether_sold` for at least `min_tokens`.
    ///
    /// # Errors
    ///
    /// Any error of [`SwapPool::swap`], or [`AmmError::TransferFailed`].
    #[instrument(
        level = "debug",
        skip_all,
        fields(caller = %caller, ether_sold = %ether_sold, min_tokens = %min_tokens)
    )]
    pub fn ether_to_token_swap(
        &mut self,
        caller: &Address,
        ether_sold: Amount,
        min_tokens: Amount,
    ) -> Result<Amount, AmmError> {
        self.swap(caller, &SwapRequest::ether_to_token(ether_sold, min_tokens))
    }

    /// Sells `tokens_sold` for at least `min_ether`.
    ///
    /// # Errors
    ///
    /// Any error of [`SwapPool::swap`], or [`AmmError::TransferFailed`].
    #[instrument(
        level = "debug",
        skip_all,
        fields(caller = %caller, tokens_sold = %tokens_sold, min_ether = %min_ether)
    )]
    pub fn token_to_ether_swap(
        &mut self,
        caller: &Address,
        tokens_sold: Amount,
        min_ether: Amount,
    ) -> Result<Amount, AmmError> {
        self.swap(caller, &SwapRequest::token_to_ether(tokens_sold, min_ether))
    }

    /// Tokens that `ether_sold` would buy right now.
    ///
    /// # Errors
    ///
    /// [`AmmError::EmptyPool`] if the pool is not seeded.
    pub fn token_amount(&self, ether_sold: Amount) -> Result<Amount, AmmError> {
        self.pool
            .quote(&SwapRequest::ether_to_token(ether_sold, Amount::ZERO))
    }

    /// Ether that `tokens_sold` would buy right now.
    ///
    /// # Errors
    ///
    /// [`AmmError::EmptyPool`] if the pool is not seeded.
    pub fn ether_amount(&self, tokens_sold: Amount) -> Result<Amount, AmmError> {
        self.pool
            .quote(&SwapRequest::token_to_ether(tokens_sold, Amount::ZERO))
    }

    /// Input needed in `direction` to receive exactly `output`.
    ///
    /// # Errors
    ///
    /// See [`ConstantProductPool::quote_input`].
    pub fn input_amount(&self, output: Amount, direction: Direction) -> Result<Amount, AmmError> {
        self.pool.quote_input(output, direction)
    }

    /// `⌊numerator_reserve × scale / denominator_reserve⌋`.
    ///
    /// # Errors
    ///
    /// [`AmmError::DivisionByZero`] if `denominator_reserve` is zero.
    pub fn price(
        &self,
        numerator_reserve: Amount,
        denominator_reserve: Amount,
    ) -> Result<Price, AmmError> {
        self.pool.price(numerator_reserve, denominator_reserve)
    }

    /// Current token reserve.
    pub const fn token_reserve(&self) -> Amount {
        self.pool.token_reserve()
    }

    /// Current ether reserve.
    pub const fn ether_reserve(&self) -> Amount {
        self.pool.ether_reserve()
    }

    /// Snapshot of both reserves.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        self.pool.reserves()
    }

    /// Total outstanding shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.pool.total_shares()
    }

    /// Shares held by `provider`.
    #[must_use]
    pub fn shares_of(&self, provider: &Address) -> Shares {
        self.pool.shares_of(provider)
    }

    fn swap(&mut self, caller: &Address, request: &SwapRequest) -> Result<Amount, AmmError> {
        let checkpoint = self.pool.checkpoint(None);
        let output = self
            .pool
            .swap(request)
            .inspect_err(|e| warn!(error = %e, %request, "swap rejected"))?;

        let direction = request.direction();
        self.settle(
            checkpoint,
            &[
                Leg::pull(direction.input_asset(), *caller, request.input_amount()),
                Leg::pay(direction.output_asset(), *caller, output),
            ],
        )?;
        Ok(output)
    }

    /// Checks every leg, then runs them in order.
    ///
    /// A refused check restores `checkpoint` before anything moves. A leg
    /// that fails after passing its check also restores `checkpoint`, and
    /// the completed legs are reversed, newest first.
    fn settle(&mut self, checkpoint: Checkpoint, legs: &[Leg]) -> Result<(), AmmError> {
        let legs: Vec<&Leg> = legs.iter().filter(|l| !l.amount.is_zero()).collect();

        // Legs of one operation move distinct assets, so per-leg checks compose.
        if let Some(e) = legs.iter().find_map(|leg| leg.check(&self.vault).err()) {
            warn!(error = %e, "transfer refused, rolling back");
            self.pool.restore(checkpoint);
            return Err(AmmError::TransferFailed(e));
        }

        for (i, leg) in legs.iter().enumerate() {
            if let Err(e) = leg.run(&mut self.vault, leg.flow) {
                error!(
                    error = %e,
                    asset = %leg.asset,
                    amount = %leg.amount,
                    "transfer failed after passing its check"
                );
                self.pool.restore(checkpoint);
                for done in legs[..i].iter().rev() {
                    if let Err(undo) = done.run(&mut self.vault, done.reverse_flow()) {
                        error!(
                            error = %undo,
                            asset = %done.asset,
                            account = %done.account,
                            amount = %done.amount,
                            "compensating transfer failed"
                        );
                    }
                }
                return Err(AmmError::TransferFailed(e));
            }
        }
        debug!(legs = legs.len(), "transfers settled");
        Ok(())
    }
}
