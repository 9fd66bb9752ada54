//! Raw asset amount with checked arithmetic.

use core::fmt;

use crate::math::U256;

/// A raw asset amount in the smallest indivisible unit (wei or the token's
/// equivalent).
///
/// `Amount` never interprets decimals; that is the job of
/// [`Decimals`](super::Decimals). Every 256-bit value is a valid amount.
///
/// Arithmetic methods are checked: they return `None` on overflow
/// or underflow instead of wrapping.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Amount;
///
/// let a = Amount::from_u128(100);
/// let b = Amount::from_u128(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_u128(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::from_u128(100)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    /// Wraps a raw 256-bit value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Builds an amount from a `u128` in a `const` context.
    pub const fn from_u128(value: u128) -> Self {
        Self(U256([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let l = self.0 .0;
        l[0] == 0 && l[1] == 0 && l[2] == 0 && l[3] == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
