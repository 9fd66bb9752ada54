//! Integer arithmetic for the pricing and liquidity engine.
//!
//! No floating point anywhere: reserves, amounts and shares are
//! [`U256`] values, products are taken at full [`U512`] width, and every
//! division names its [`Rounding`](crate::domain::Rounding) direction.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`U256`], [`U512`] | fixed-width unsigned integers |
//! | [`mul_div`] | `a × b / d` with one rounding step |
//! | [`CheckedArithmetic`] | `Result`-returning ops on domain newtypes |

mod checked;
mod mul_div;
mod wide;

pub use checked::CheckedArithmetic;
pub use mul_div::mul_div;
pub use wide::{full_mul, narrow, widen, U256, U512};
