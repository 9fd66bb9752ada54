//! Full-precision `a × b / d` with explicit truncation.
//!
//! Every ratio the engine computes (swap output, spot price, matching
//! deposit, minted shares, withdrawal amounts) is a single `mul_div`, so
//! only one rounding step happens per quantity.

use super::wide::{full_mul, narrow, widen, U256, U512};
use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / denominator` with a 512-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::ArithmeticOverflow`] if the rounded quotient does not fit
///   in 256 bits.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Rounding;
/// use cp_exchange::math::{mul_div, U256};
///
/// let q = mul_div(U256::from(7u8), U256::from(3u8), U256::from(2u8), Rounding::Down);
/// assert_eq!(q, Ok(U256::from(10u8)));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Result<U256, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (q, r) = full_mul(a, b).div_mod(widen(denominator));
    let q = if rounding.is_up() && !r.is_zero() {
        q.checked_add(U512::one())
            .ok_or(AmmError::ArithmeticOverflow("mul_div rounding overflow"))?
    } else {
        q
    };
    narrow(q).ok_or(AmmError::ArithmeticOverflow("mul_div quotient exceeds 256 bits"))
}
