//! Signed change to a single reserve.

use super::Amount;

/// A signed reserve adjustment.
///
/// Reserves are unsigned, so a negative change is carried as a
/// [`Delta::Debit`] of a non-negative magnitude rather than as a signed
/// 256-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    /// Reserve grows by the amount.
    Credit(Amount),
    /// Reserve shrinks by the amount.
    Debit(Amount),
}

impl Delta {
    /// No change.
    pub const NONE: Self = Self::Credit(Amount::ZERO);

    /// Applies the delta to `balance`.
    ///
    /// Returns `None` if the result would be negative or overflow.
    #[must_use]
    pub fn apply(&self, balance: Amount) -> Option<Amount> {
        match self {
            Self::Credit(v) => balance.checked_add(v),
            Self::Debit(v) => balance.checked_sub(v),
        }
    }
}
