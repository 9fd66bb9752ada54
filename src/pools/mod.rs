//! Pool state and the operations that mutate it.
//!
//! | Type | Role |
//! |------|------|
//! | [`ReservePair`] | the two reserve balances |
//! | [`LiquidityLedger`] | share total and per-provider positions |
//! | [`executor`] | exact-input swap protocol |
//! | [`ConstantProductPool`] | one pair plus one ledger, behind the pool traits |
//! | [`Exchange`] | pool plus asset transfers with rollback |
//! | [`SharedExchange`] | one lock per exchange |

mod constant_product;
mod exchange;
pub mod executor;
mod ledger;
mod reserve_pair;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{Checkpoint, ConstantProductPool};
pub use exchange::Exchange;
pub use ledger::LiquidityLedger;
pub use reserve_pair::ReservePair;
pub use shared::SharedExchange;
