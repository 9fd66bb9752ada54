//! Exact-input swap protocol over a [`ReservePair`].
//!
//! # Steps
//!
//! 1. Orient the reserves for the request's direction.
//! 2. Reject with [`AmmError::EmptyPool`] if either side is zero.
//! 3. Price the trade with [`output_amount`].
//! 4. Reject with [`AmmError::SlippageExceeded`] if below `min_output`.
//! 5. Credit the input side, debit the output side, atomically.
//! 6. Return the output.

use tracing::{debug, warn};

use super::ReservePair;
use crate::domain::{Amount, Delta, Direction, SwapRequest};
use crate::error::AmmError;
use crate::pricing::output_amount;

/// Output `request` would produce against `reserves`, without applying it
/// and without the slippage check.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if the input reserve would overflow.
pub fn quote(reserves: &ReservePair, request: &SwapRequest) -> Result<Amount, AmmError> {
    let (input_reserve, output_reserve) = reserves.snapshot().oriented(request.direction());
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    output_amount(request.input_amount(), input_reserve, output_reserve)
}

/// Executes `request` against `reserves` and returns the output amount.
///
/// A zero input returns zero without touching the reserves, provided the
/// request's minimum is also zero.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::SlippageExceeded`] if the output is below
///   `request.min_output()`.
/// - [`AmmError::ArithmeticOverflow`] if the input reserve would overflow.
pub fn execute(reserves: &mut ReservePair, request: &SwapRequest) -> Result<Amount, AmmError> {
    let output = quote(reserves, request)?;

    if output < request.min_output() {
        warn!(%output, min_output = %request.min_output(), "swap below minimum output");
        return Err(AmmError::SlippageExceeded {
            output,
            min_output: request.min_output(),
        });
    }
    if request.input_amount().is_zero() {
        return Ok(Amount::ZERO);
    }

    let credit = Delta::Credit(request.input_amount());
    let debit = Delta::Debit(output);
    let (delta_a, delta_b) = match request.direction() {
        Direction::AToB => (credit, debit),
        Direction::BToA => (debit, credit),
    };
    reserves.apply_delta(delta_a, delta_b)?;

    debug!(
        direction = %request.direction(),
        input = %request.input_amount(),
        %output,
        "swap executed"
    );
    Ok(output)
}
