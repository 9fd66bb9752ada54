//! Swap request: what the caller sells and the least it will accept.

use core::fmt;

use super::{Amount, Direction};

/// An exact-input swap with a slippage bound.
///
/// Unlike most value types here, a zero `input_amount` is allowed: a
/// zero-amount swap with `min_output == 0` is a valid no-op.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::{Amount, Direction, SwapRequest};
///
/// let req = SwapRequest::ether_to_token(Amount::from_u128(1_000), Amount::from_u128(1_990));
/// assert_eq!(req.direction(), Direction::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    input_amount: Amount,
    min_output: Amount,
    direction: Direction,
}

impl SwapRequest {
    /// Creates a request for the given direction.
    pub const fn new(input_amount: Amount, min_output: Amount, direction: Direction) -> Self {
        Self {
            input_amount,
            min_output,
            direction,
        }
    }

    /// Sell `tokens_sold` tokens for at least `min_ether`.
    pub const fn token_to_ether(tokens_sold: Amount, min_ether: Amount) -> Self {
        Self::new(tokens_sold, min_ether, Direction::AToB)
    }

    /// Sell `ether_sold` ether for at least `min_tokens`.
    pub const fn ether_to_token(ether_sold: Amount, min_tokens: Amount) -> Self {
        Self::new(ether_sold, min_tokens, Direction::BToA)
    }

    /// Amount of the input asset paid in.
    pub const fn input_amount(&self) -> Amount {
        self.input_amount
    }

    /// Minimum acceptable output.
    pub const fn min_output(&self) -> Amount {
        self.min_output
    }

    /// Trade direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (min out {})",
            self.direction, self.input_amount, self.min_output
        )
    }
}
