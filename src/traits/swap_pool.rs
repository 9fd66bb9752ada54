//! Swap and price-query trait.
//!
//! [`SwapPool`] covers everything a trader needs:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs the exchange.
//! 2. **Quote**: [`SwapPool::quote`] prices the same request without
//!    touching state.
//! 3. **Price**: [`SwapPool::spot_price`] returns the scaled reserve ratio.
//! 4. **Inspect**: [`SwapPool::reserves`] returns a consistent snapshot.
//!
//! # Constant-Product Invariant
//!
//! For any completed swap, `reserve_a' × reserve_b' ≥ reserve_a × reserve_b`.
//! No fee is charged, so the only growth in `k` comes from truncating the
//! output.

use crate::domain::{Amount, Asset, Price, Reserves, SwapRequest};
use crate::error::AmmError;

/// Core trait for a two-asset constant-product pool.
///
/// # Errors
///
/// Common variants:
///
/// - [`AmmError::EmptyPool`]: the pool has not been seeded
/// - [`AmmError::SlippageExceeded`]: output below the caller's minimum
/// - [`AmmError::ArithmeticOverflow`]: a 256-bit bound was hit
pub trait SwapPool {
    /// Executes an exact-input swap.
    ///
    /// Reserve updates are atomic: the swap either completes fully or
    /// returns an error with reserves untouched.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `request.min_output()`.
    /// - [`AmmError::ArithmeticOverflow`] if the input reserve would exceed
    ///   256 bits.
    fn swap(&mut self, request: &SwapRequest) -> Result<Amount, AmmError>;

    /// Output the request would produce against the current reserves.
    ///
    /// Ignores the slippage bound.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap`] minus `SlippageExceeded`.
    fn quote(&self, request: &SwapRequest) -> Result<Amount, AmmError>;

    /// Price of one unit of `base` in units of its counterpart, scaled by
    /// the pool's configured price scale.
    ///
    /// # Errors
    ///
    /// [`AmmError::DivisionByZero`] if the `base` reserve is zero.
    fn spot_price(&self, base: Asset) -> Result<Price, AmmError>;

    /// Snapshot of both reserves.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
