//! Pure pricing functions over a pair of reserves.
//!
//! The pool charges no protocol fee. The only deviation from the exact
//! constant-product solution is integer truncation, and it always favours
//! the pool: outputs round down, required inputs round up.
//!
//! # Swap output (exact input)
//!
//! Solving `(x + Δx)(y − Δy) = x·y` for `Δy`:
//!
//! ```text
//! Δy = ⌊ Δx · y / (x + Δx) ⌋
//! ```
//!
//! # Swap input (exact output)
//!
//! ```text
//! Δx = ⌈ x · Δy / (y − Δy) ⌉
//! ```
//!
//! Nothing here mutates state; identical inputs always give identical
//! results.

use crate::domain::{Amount, Price, Rounding};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic, U256};

/// Scale used by [`spot_price`] when the caller does not pick one.
pub const DEFAULT_PRICE_SCALE: u64 = 1_000;

/// Amount of the output asset released for `input_amount` of the input
/// asset.
///
/// A zero `input_amount` yields zero.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if `input_reserve + input_amount`
///   exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Amount;
/// use cp_exchange::pricing::output_amount;
///
/// let out = output_amount(
///     Amount::from_u128(1_000),
///     Amount::from_u128(1_000_000),
///     Amount::from_u128(2_000_000),
/// );
/// assert_eq!(out, Ok(Amount::from_u128(1_998)));
/// ```
pub fn output_amount(
    input_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount, AmmError> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if input_amount.is_zero() {
        return Ok(Amount::ZERO);
    }
    let denominator = input_reserve.safe_add(&input_amount)?;
    input_amount.safe_mul_div(&output_reserve, &denominator, Rounding::Down)
}

/// Amount of the input asset needed to take exactly `output` out of the
/// pool.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InsufficientReserve`] if `output >= output_reserve`.
/// - [`AmmError::ArithmeticOverflow`] if the required input exceeds 256 bits.
pub fn input_amount(
    output: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount, AmmError> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if output >= output_reserve {
        return Err(AmmError::InsufficientReserve(
            "requested output drains the reserve",
        ));
    }
    let remaining = output_reserve.safe_sub(&output)?;
    input_reserve.safe_mul_div(&output, &remaining, Rounding::Up)
}

/// Spot price `⌊numerator_reserve · scale / denominator_reserve⌋`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator_reserve` is zero.
/// - [`AmmError::ArithmeticOverflow`] if the scaled price exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Amount;
/// use cp_exchange::math::U256;
/// use cp_exchange::pricing::spot_price;
///
/// let p = spot_price(Amount::from_u128(1_000), Amount::from_u128(2_000), U256::from(1_000u64));
/// assert_eq!(p.map(|p| p.value()), Ok(U256::from(500u64)));
/// ```
pub fn spot_price(
    numerator_reserve: Amount,
    denominator_reserve: Amount,
    scale: U256,
) -> Result<Price, AmmError> {
    if denominator_reserve.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let value = mul_div(
        numerator_reserve.get(),
        scale,
        denominator_reserve.get(),
        Rounding::Down,
    )?;
    Ok(Price::new(value, scale))
}
