//! The pool's two reserve balances.

use core::fmt;

use tracing::debug;

use crate::domain::{Amount, Delta, Reserves};
use crate::error::AmmError;
use crate::math::{full_mul, U512};

/// Current holdings of the token (asset A) and ether (asset B).
///
/// # Invariant
///
/// After every completed mutation `reserve_a > 0 ⟺ reserve_b > 0`: the
/// pair is either empty or fully seeded. Only [`apply_delta`] mutates the
/// pair, and it either applies both sides or neither.
///
/// [`apply_delta`]: ReservePair::apply_delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReservePair {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ReservePair {
    /// An empty pair.
    pub const fn empty() -> Self {
        Self {
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        }
    }

    /// Builds a pair from explicit balances.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserve`] if exactly one side is
    /// zero.
    pub fn new(reserve_a: Amount, reserve_b: Amount) -> Result<Self, AmmError> {
        if reserve_a.is_zero() != reserve_b.is_zero() {
            return Err(AmmError::InsufficientReserve(
                "pool must be empty or seeded on both sides",
            ));
        }
        Ok(Self {
            reserve_a,
            reserve_b,
        })
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn current_reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Named snapshot of both balances.
    #[must_use]
    pub const fn snapshot(&self) -> Reserves {
        Reserves::new(self.reserve_a, self.reserve_b)
    }

    /// Token reserve.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Ether reserve.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// `true` if both reserves are positive.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }

    /// The exact product `k = reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant(&self) -> U512 {
        full_mul(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Applies both deltas atomically.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientReserve`] if a debit exceeds its balance,
    ///   or if the result would leave exactly one side empty.
    /// - [`AmmError::ArithmeticOverflow`] if a credit exceeds 256 bits.
    ///
    /// On error the pair is unchanged.
    pub(crate) fn apply_delta(&mut self, delta_a: Delta, delta_b: Delta) -> Result<(), AmmError> {
        let next_a = Self::shifted(self.reserve_a, delta_a)?;
        let next_b = Self::shifted(self.reserve_b, delta_b)?;

        if next_a.is_zero() != next_b.is_zero() {
            return Err(AmmError::InsufficientReserve(
                "update would leave one side of the pool empty",
            ));
        }

        debug!(
            reserve_a = %next_a,
            reserve_b = %next_b,
            ?delta_a,
            ?delta_b,
            "reserves updated"
        );
        self.reserve_a = next_a;
        self.reserve_b = next_b;
        Ok(())
    }

    fn shifted(balance: Amount, delta: Delta) -> Result<Amount, AmmError> {
        delta.apply(balance).ok_or(match delta {
            Delta::Credit(_) => AmmError::ArithmeticOverflow("credit exceeds 256 bits"),
            Delta::Debit(_) => AmmError::InsufficientReserve("debit exceeds reserve"),
        })
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReservePair(a={}, b={})", self.reserve_a, self.reserve_b)
    }
}
