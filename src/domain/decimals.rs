//! Decimal places of an asset and conversion to and from display units.

use crate::error::AmmError;
use crate::math::U256;

use super::Amount;

/// Largest exponent with `10^n` below `2^256`.
const MAX_DECIMALS: u8 = 77;

/// Number of decimal places between an asset's display unit and its
/// smallest indivisible unit.
///
/// Valid range is `0..=77`, the widest that still fits `10^decimals` in a
/// 256-bit amount. Ether and most tokens use 18.
///
/// # Examples
///
/// ```
/// use cp_exchange::domain::Decimals;
///
/// let eth = Decimals::ETHER;
/// let wei = eth.parse_units("1.5").expect("valid decimal string");
/// assert_eq!(eth.format_units(wei), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// 18 decimal places (wei per ether).
    pub const ETHER: Self = Self(18);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 77.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=77"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// `10^decimals`.
    #[must_use]
    pub fn factor(&self) -> U256 {
        U256::exp10(usize::from(self.0))
    }

    /// Parses a non-negative decimal string such as `"1.99"` into raw units.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPrecision`] if the string is not a plain decimal
    ///   number or has more fractional digits than `decimals`.
    /// - [`AmmError::ArithmeticOverflow`] if the value exceeds 256 bits.
    pub fn parse_units(&self, text: &str) -> Result<Amount, AmmError> {
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmmError::InvalidPrecision("empty decimal string"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(AmmError::InvalidPrecision("decimal string must be digits"));
        }
        let places = usize::from(self.0);
        if frac_part.len() > places {
            return Err(AmmError::InvalidPrecision("too many fractional digits"));
        }

        let parse = |s: &str| -> Result<U256, AmmError> {
            if s.is_empty() {
                return Ok(U256::zero());
            }
            U256::from_dec_str(s)
                .map_err(|_| AmmError::ArithmeticOverflow("decimal string exceeds 256 bits"))
        };

        let whole = parse(int_part)?
            .checked_mul(self.factor())
            .ok_or(AmmError::ArithmeticOverflow("decimal string exceeds 256 bits"))?;
        let frac = parse(frac_part)?
            .checked_mul(U256::exp10(places - frac_part.len()))
            .ok_or(AmmError::ArithmeticOverflow("decimal string exceeds 256 bits"))?;
        whole
            .checked_add(frac)
            .map(Amount::new)
            .ok_or(AmmError::ArithmeticOverflow("decimal string exceeds 256 bits"))
    }

    /// Renders raw units as a decimal string.
    ///
    /// Trailing fractional zeros are trimmed but at least one fractional
    /// digit is kept, so `1000 * 10^18` wei renders as `"1000.0"`.
    #[must_use]
    pub fn format_units(&self, amount: Amount) -> String {
        let (whole, frac) = amount.get().div_mod(self.factor());
        let places = usize::from(self.0);
        let padded = format!("{:0>places$}", frac.to_string());
        let trimmed = padded.trim_end_matches('0');
        if trimmed.is_empty() {
            format!("{whole}.0")
        } else {
            format!("{whole}.{trimmed}")
        }
    }
}
