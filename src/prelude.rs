//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cp_exchange::prelude::*;
//! ```

pub use crate::config::{ExchangeConfig, ShareSeed};
pub use crate::domain::{
    Address, Amount, Asset, Decimals, Deposit, Direction, Price, Reserves, Rounding, Shares,
    SwapRequest, Withdrawal,
};
pub use crate::error::{AmmError, ErrorKind, TransferError};
pub use crate::math::{CheckedArithmetic, U256};
pub use crate::pools::{ConstantProductPool, Exchange, SharedExchange};
pub use crate::traits::{AssetTransfer, FromConfig, LiquidityPool, SwapPool};
pub use crate::vault::InMemoryVault;
