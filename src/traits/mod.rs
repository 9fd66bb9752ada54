//! Trait seams of the engine.
//!
//! - [`SwapPool`]: swaps, quotes and spot prices
//! - [`LiquidityPool`]: share issuance and redemption
//! - [`AssetTransfer`]: the collaborator that moves assets
//! - [`FromConfig`]: validated construction from configuration

mod asset_transfer;
mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use asset_transfer::AssetTransfer;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
