//! Read-only reserve snapshot.

use core::fmt;

use super::{Amount, Asset, Direction};

/// Both reserve balances captured at one instant.
///
/// Returned by queries; holding a `Reserves` never borrows the pool, so a
/// snapshot stays consistent even if the pool is mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    /// Token reserve (asset A).
    pub token: Amount,
    /// Ether reserve (asset B).
    pub ether: Amount,
}

impl Reserves {
    /// Creates a snapshot.
    pub const fn new(token: Amount, ether: Amount) -> Self {
        Self { token, ether }
    }

    /// Balance of one asset.
    pub const fn of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token => self.token,
            Asset::Ether => self.ether,
        }
    }

    /// `(input_reserve, output_reserve)` for a trade direction.
    #[must_use]
    pub const fn oriented(&self, direction: Direction) -> (Amount, Amount) {
        (
            self.of(direction.input_asset()),
            self.of(direction.output_asset()),
        )
    }

    /// `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_zero() && self.ether.is_zero()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token={} ether={}", self.token, self.ether)
    }
}
