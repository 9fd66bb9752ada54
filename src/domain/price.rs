//! Fixed-point spot price.

use core::fmt;

use crate::math::U256;

/// A reserve ratio expressed as an integer scaled by `scale`.
///
/// `value / scale` approximates `numerator_reserve / denominator_reserve`,
/// truncated toward zero. With the default scale of 1000, a 1000:2000
/// ratio is `500` and a 2000:1000 ratio is `2000`.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Price;
/// use cp_exchange::math::U256;
///
/// let p = Price::new(U256::from(500u64), U256::from(1_000u64));
/// assert_eq!(p.value(), U256::from(500u64));
/// assert_eq!(p.to_string(), "500/1000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    value: U256,
    scale: U256,
}

impl Price {
    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn new(value: U256, scale: U256) -> Self {
        Self { value, scale }
    }

    /// The scaled integer.
    #[must_use]
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// The fixed-point scale the value is expressed in.
    #[must_use]
    pub const fn scale(&self) -> U256 {
        self.scale
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.scale)
    }
}
