//! The two assets held by a pool and the direction of a trade between them.

use core::fmt;

/// One side of the pool.
///
/// Asset A is the scarce token, asset B is ether. The mapping is fixed for
/// the whole crate: `reserve_a` is always the token reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Asset {
    /// The fungible token (asset A).
    Token,
    /// The base asset (asset B).
    Ether,
}

impl Asset {
    /// Returns the other asset of the pair.
    #[must_use]
    pub const fn counterpart(&self) -> Self {
        match self {
            Self::Token => Self::Ether,
            Self::Ether => Self::Token,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Ether => write!(f, "ether"),
        }
    }
}

/// Direction of a swap.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::{Asset, Direction};
///
/// assert_eq!(Direction::BToA.input_asset(), Asset::Ether);
/// assert_eq!(Direction::BToA.output_asset(), Asset::Token);
/// assert_eq!(Direction::BToA.reversed(), Direction::AToB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sell token, receive ether.
    AToB,
    /// Sell ether, receive token.
    BToA,
}

impl Direction {
    /// The asset the caller pays in.
    #[must_use]
    pub const fn input_asset(&self) -> Asset {
        match self {
            Self::AToB => Asset::Token,
            Self::BToA => Asset::Ether,
        }
    }

    /// The asset the caller receives.
    #[must_use]
    pub const fn output_asset(&self) -> Asset {
        self.input_asset().counterpart()
    }

    /// The opposite trade.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.input_asset(), self.output_asset())
    }
}
