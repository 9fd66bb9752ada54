//! Explicit rounding direction for integer division.

use core::fmt;

/// Which way a non-exact quotient goes.
///
/// The engine never rounds to nearest. Quantities leaving the pool take
/// [`Rounding::Down`]; quantities the pool demands take [`Rounding::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor (truncation, for unsigned values).
    #[default]
    Down,
}

impl Rounding {
    /// `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "ceil",
            Self::Down => "floor",
        })
    }
}
