//! Construction of pools from declarative configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration before building
//! anything. A successfully constructed pool is in a valid initial state:
//! for [`ConstantProductPool`](crate::pools::ConstantProductPool) that means
//! empty reserves, no shares, and a non-zero price scale.

use crate::error::AmmError;

/// Builds a pool from its configuration type `C`.
///
/// There is no blanket implementation; each pool/config pairing is
/// explicit.
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
