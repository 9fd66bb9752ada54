//! Value types used throughout the exchange engine.
//!
//! Amounts, shares, identities, trade descriptions and operation outcomes.
//! All numeric types are 256-bit newtypes with checked arithmetic so that
//! nothing in the engine can silently wrap.

mod address;
mod amount;
mod asset;
mod decimals;
mod delta;
mod liquidity_change;
mod price;
mod reserves;
mod rounding;
mod shares;
mod swap_request;

pub use address::Address;
pub use amount::Amount;
pub use asset::{Asset, Direction};
pub use decimals::Decimals;
pub use delta::Delta;
pub use liquidity_change::{Deposit, Withdrawal};
pub use price::Price;
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_request::SwapRequest;
