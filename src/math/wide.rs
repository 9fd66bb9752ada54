//! Fixed-width unsigned integers used by every engine computation.
//!
//! [`U256`] is the storage width for reserves, amounts and shares.
//! [`U512`] only appears as the intermediate of a full-width product, so
//! `a × b` for any two `U256` values is always representable.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, little-endian limbs.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer for full-width products.
    pub struct U512(8);
}

/// Zero-extends a [`U256`] into a [`U512`].
#[must_use]
pub const fn widen(value: U256) -> U512 {
    let l = value.0;
    U512([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

/// Truncation-free conversion from [`U512`] back to [`U256`].
///
/// Returns `None` if any of the upper four limbs is set.
#[must_use]
pub const fn narrow(value: U512) -> Option<U256> {
    let l = value.0;
    if l[4] != 0 || l[5] != 0 || l[6] != 0 || l[7] != 0 {
        return None;
    }
    Some(U256([l[0], l[1], l[2], l[3]]))
}

/// Exact product of two 256-bit values.
#[must_use]
pub fn full_mul(a: U256, b: U256) -> U512 {
    // 256 + 256 bits always fits in 512.
    let (product, _) = widen(a).overflowing_mul(widen(b));
    product
}
