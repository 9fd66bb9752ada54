//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning primitives on
//! [`Amount`] and [`Shares`] into [`AmmError`] values so that engine code
//! can propagate with `?`.
//!
//! # Examples
//!
//! ```
//! use cp_exchange::domain::Amount;
//! use cp_exchange::math::CheckedArithmetic;
//!
//! let sum = Amount::from_u128(100).safe_add(&Amount::from_u128(200));
//! assert_eq!(sum, Ok(Amount::from_u128(300)));
//! assert!(Amount::MAX.safe_add(&Amount::from_u128(1)).is_err());
//! ```

use super::mul_div;
use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No wrapping or saturation**: overflow and underflow are
///   [`AmmError::ArithmeticOverflow`], a zero divisor is
///   [`AmmError::DivisionByZero`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] if the sum exceeds 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self × numerator / denominator` with a full-width intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::ArithmeticOverflow`] if the quotient exceeds 256 bits.
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator.get(), denominator.get(), rounding).map(Amount::new)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator.get(), denominator.get(), rounding).map(Shares::new)
    }
}
