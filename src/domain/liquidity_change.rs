//! Outcomes of liquidity operations.

use core::fmt;

use super::{Amount, Shares};

/// What a successful deposit pulled into the pool and what it minted.
///
/// `token` may be less than the caller offered: on a seeded pool only the
/// ratio-matching amount is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    token: Amount,
    ether: Amount,
    shares: Shares,
}

impl Deposit {
    pub(crate) const fn new(token: Amount, ether: Amount, shares: Shares) -> Self {
        Self {
            token,
            ether,
            shares,
        }
    }

    /// Token accepted into the reserve.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Ether accepted into the reserve.
    pub const fn ether(&self) -> Amount {
        self.ether
    }

    /// Shares issued to the provider.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deposit {} token + {} ether -> {} shares",
            self.token, self.ether, self.shares
        )
    }
}

/// Assets released by burning shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    token: Amount,
    ether: Amount,
}

impl Withdrawal {
    pub(crate) const fn new(token: Amount, ether: Amount) -> Self {
        Self { token, ether }
    }

    /// Token paid out.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Ether paid out.
    pub const fn ether(&self) -> Amount {
        self.ether
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "withdraw {} token + {} ether", self.token, self.ether)
    }
}
