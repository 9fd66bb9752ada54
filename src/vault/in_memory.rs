//! Hash-map backed balances for both assets.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Address, Amount, Asset};
use crate::error::TransferError;
use crate::traits::AssetTransfer;

/// Per-account token and ether balances with one custody account holding
/// the pool's assets.
///
/// Transfers check the payer's balance and the payee's headroom before
/// writing anything, so a failed transfer changes nothing.
#[derive(Debug, Clone)]
pub struct InMemoryVault {
    custody: Address,
    balances: HashMap<(Asset, Address), Amount>,
}

impl InMemoryVault {
    /// An empty vault whose pool assets live under `custody`.
    #[must_use]
    pub fn new(custody: Address) -> Self {
        Self {
            custody,
            balances: HashMap::new(),
        }
    }

    /// The pool's custody account.
    #[must_use]
    pub const fn custody(&self) -> &Address {
        &self.custody
    }

    /// Balance of `asset` held by `account`.
    pub fn balance_of(&self, asset: Asset, account: &Address) -> Amount {
        self.balances
            .get(&(asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// [`TransferError::BalanceOverflow`] if the balance would exceed 256
    /// bits.
    pub fn mint(
        &mut self,
        asset: Asset,
        account: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let next = self
            .balance_of(asset, account)
            .checked_add(&amount)
            .ok_or(TransferError::BalanceOverflow {
                asset,
                account: *account,
            })?;
        self.balances.insert((asset, *account), next);
        debug!(%asset, %account, %amount, "minted");
        Ok(())
    }

    /// Balances of `from` and `to` after moving `amount`, or why the move
    /// cannot happen.
    fn settled_balances(
        &self,
        asset: Asset,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(Amount, Amount), TransferError> {
        let available = self.balance_of(asset, from);
        let Some(remaining) = available.checked_sub(&amount) else {
            return Err(TransferError::InsufficientBalance {
                asset,
                account: *from,
                requested: amount,
                available,
            });
        };
        if from == to {
            return Ok((available, available));
        }
        let received = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or(TransferError::BalanceOverflow {
                asset,
                account: *to,
            })?;
        Ok((remaining, received))
    }

    fn move_balance(
        &mut self,
        asset: Asset,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let (remaining, received) = self.settled_balances(asset, from, to, amount)?;
        self.balances.insert((asset, *from), remaining);
        self.balances.insert((asset, *to), received);
        debug!(%asset, %from, %to, %amount, "balance moved");
        Ok(())
    }
}

impl AssetTransfer for InMemoryVault {
    fn can_transfer_in(
        &self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.settled_balances(asset, from, &self.custody, amount).map(|_| ())
    }

    fn can_transfer_out(
        &self,
        asset: Asset,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.settled_balances(asset, &self.custody, to, amount).map(|_| ())
    }

    fn transfer_in(
        &mut self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let custody = self.custody;
        self.move_balance(asset, from, &custody, amount)
    }

    fn transfer_out(
        &mut self,
        asset: Asset,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let custody = self.custody;
        self.move_balance(asset, &custody, to, amount)
    }
}
