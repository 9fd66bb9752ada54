//! Opaque account identity.

use core::fmt;

/// Identity of a liquidity provider or trader.
///
/// The engine only compares and orders addresses; it never interprets the
/// bytes. Wraps a fixed-size `[u8; 32]` so any chain's account key fits.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Address;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// assert_ne!(alice, Address::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for Address {
    /// Renders `0x` followed by the first four bytes, enough to tell
    /// accounts apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}
