//! Declarative pool configuration.
//!
//! An [`ExchangeConfig`] fully describes a pool's immutable parameters and
//! is turned into a live [`ConstantProductPool`](crate::pools::ConstantProductPool) through
//! [`FromConfig`](crate::traits::FromConfig).

mod exchange_config;

pub use exchange_config::{ExchangeConfig, ShareSeed};
