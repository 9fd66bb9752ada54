//! Asset movement collaborator.
//!
//! The engine never moves assets itself. An [`AssetTransfer`]
//! implementation moves them between callers and the pool's custody.
//! [`Exchange`](crate::pools::Exchange) checks every movement of an
//! operation before running any of them, so a refused movement leaves both
//! the pool and the balances untouched.

use crate::domain::{Address, Amount, Asset};
use crate::error::TransferError;

/// Moves assets in and out of pool custody.
///
/// Each call is all-or-nothing: on `Err` no balance may have changed.
///
/// The `can_*` methods answer whether the matching transfer would succeed
/// right now. Transfers of distinct assets whose checks all returned `Ok`
/// must succeed when they are run straight after the checks.
pub trait AssetTransfer {
    /// Checks that `amount` of `asset` can be pulled from `from`.
    ///
    /// # Errors
    ///
    /// The [`TransferError`] that [`AssetTransfer::transfer_in`] would
    /// report.
    fn can_transfer_in(
        &self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Checks that `amount` of `asset` can be paid to `to`.
    ///
    /// # Errors
    ///
    /// The [`TransferError`] that [`AssetTransfer::transfer_out`] would
    /// report.
    fn can_transfer_out(
        &self,
        asset: Asset,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Pulls `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] the implementation reports.
    fn transfer_in(
        &mut self,
        asset: Asset,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Pays `amount` of `asset` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] the implementation reports.
    fn transfer_out(
        &mut self,
        asset: Asset,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
