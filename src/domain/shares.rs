//! Liquidity share units.

use core::fmt;

use super::Amount;
use crate::math::U256;

/// Dimensionless accounting units representing a provider's proportional
/// claim on both pool reserves.
///
/// Distinct from [`Amount`] because shares are not an asset: they are
/// only ever compared against the ledger's total. All 256-bit values are
/// valid share counts.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Shares;
///
/// let a = Shares::from_u128(1_000);
/// let b = Shares::from_u128(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::from_u128(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shares(U256);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Wraps a raw 256-bit value.
    #[must_use]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Builds a share count from a `u128` in a `const` context.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(U256([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if there are no shares.
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

impl From<Amount> for Shares {
    /// Seeds a share count one-for-one from an asset amount.
    fn from(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
