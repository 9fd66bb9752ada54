//! Configuration for a token/ether exchange pool.

use core::fmt;

use crate::domain::{Amount, Shares};
use crate::error::AmmError;
use crate::math::U256;
use crate::pricing::DEFAULT_PRICE_SCALE;

/// How many shares the first deposit into an empty pool receives.
///
/// Later deposits are always priced relative to the ether reserve, so the
/// choice only fixes the unit of the share base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShareSeed {
    /// Initial shares equal the seeded token amount.
    #[default]
    Token,
    /// Initial shares equal the seeded ether amount.
    Ether,
}

impl ShareSeed {
    /// Initial share issuance for a seeding deposit.
    #[must_use]
    pub fn initial_shares(&self, token: Amount, ether: Amount) -> Shares {
        match self {
            Self::Token => Shares::from(token),
            Self::Ether => Shares::from(ether),
        }
    }
}

impl fmt::Display for ShareSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Ether => write!(f, "ether"),
        }
    }
}

/// Immutable parameters of an exchange pool.
///
/// # Validation
///
/// - `price_scale` must be non-zero.
///
/// # Examples
///
/// ```
/// use cp_exchange::config::{ExchangeConfig, ShareSeed};
/// use cp_exchange::math::U256;
///
/// let cfg = ExchangeConfig::default()
///     .with_price_scale(U256::from(1_000_000u64))
///     .with_share_seed(ShareSeed::Ether);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    price_scale: U256,
    share_seed: ShareSeed,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            price_scale: U256::from(DEFAULT_PRICE_SCALE),
            share_seed: ShareSeed::default(),
        }
    }
}

impl ExchangeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `price_scale` is zero.
    pub fn new(price_scale: U256, share_seed: ShareSeed) -> Result<Self, AmmError> {
        let config = Self {
            price_scale,
            share_seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the spot-price scale.
    #[must_use]
    pub const fn with_price_scale(mut self, price_scale: U256) -> Self {
        self.price_scale = price_scale;
        self
    }

    /// Replaces the share seeding convention.
    #[must_use]
    pub const fn with_share_seed(mut self, share_seed: ShareSeed) -> Self {
        self.share_seed = share_seed;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `price_scale` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.price_scale.is_zero() {
            return Err(AmmError::InvalidConfiguration("price scale must be non-zero"));
        }
        Ok(())
    }

    /// Fixed-point scale for spot prices.
    #[must_use]
    pub const fn price_scale(&self) -> U256 {
        self.price_scale
    }

    /// Share seeding convention for the first deposit.
    #[must_use]
    pub const fn share_seed(&self) -> ShareSeed {
        self.share_seed
    }
}

impl fmt::Display for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeConfig(price_scale={}, share_seed={})",
            self.price_scale, self.share_seed
        )
    }
}
