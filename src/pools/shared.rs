//! Thread-safe handle to one exchange.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Exchange;
use crate::domain::{Address, Amount, Deposit, Price, Reserves, Shares, Withdrawal};
use crate::error::AmmError;
use crate::traits::AssetTransfer;

/// Cloneable handle serialising every mutation of one [`Exchange`].
///
/// Mutations hold the write lock for their whole read-modify-write,
/// including settlement with the collaborator. Queries hold the read lock,
/// so they run concurrently with each other and never observe a
/// half-applied update.
#[derive(Debug)]
pub struct SharedExchange<V> {
    inner: Arc<RwLock<Exchange<V>>>,
}

impl<V> Clone for SharedExchange<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: AssetTransfer> SharedExchange<V> {
    /// Wraps `exchange` in a lock.
    pub fn new(exchange: Exchange<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(exchange)),
        }
    }

    /// See [`Exchange::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::add_liquidity`].
    pub fn add_liquidity(
        &self,
        provider: &Address,
        max_tokens: Amount,
        ether: Amount,
    ) -> Result<Deposit, AmmError> {
        self.inner.write().add_liquidity(provider, max_tokens, ether)
    }

    /// See [`Exchange::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        provider: &Address,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        self.inner.write().remove_liquidity(provider, shares)
    }

    /// See [`Exchange::ether_to_token_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::ether_to_token_swap`].
    pub fn ether_to_token_swap(
        &self,
        caller: &Address,
        ether_sold: Amount,
        min_tokens: Amount,
    ) -> Result<Amount, AmmError> {
        self.inner
            .write()
            .ether_to_token_swap(caller, ether_sold, min_tokens)
    }

    /// See [`Exchange::token_to_ether_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::token_to_ether_swap`].
    pub fn token_to_ether_swap(
        &self,
        caller: &Address,
        tokens_sold: Amount,
        min_ether: Amount,
    ) -> Result<Amount, AmmError> {
        self.inner
            .write()
            .token_to_ether_swap(caller, tokens_sold, min_ether)
    }

    /// Consistent snapshot of both reserves.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        self.inner.read().reserves()
    }

    /// See [`Exchange::price`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::price`].
    pub fn price(
        &self,
        numerator_reserve: Amount,
        denominator_reserve: Amount,
    ) -> Result<Price, AmmError> {
        self.inner.read().price(numerator_reserve, denominator_reserve)
    }

    /// Total outstanding shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.inner.read().total_shares()
    }

    /// Runs `f` with shared access to the exchange.
    pub fn read<R>(&self, f: impl FnOnce(&Exchange<V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the exchange.
    pub fn write<R>(&self, f: impl FnOnce(&mut Exchange<V>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
