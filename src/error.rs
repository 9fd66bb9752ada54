//! Unified error types for the exchange engine.
//!
//! Every fallible operation returns [`AmmError`]. Each rejection reason is
//! its own variant so callers and tests can match on the precise cause;
//! [`AmmError::kind`] gives a fieldless discriminant for the same purpose.
//!
//! No operation leaves the pool partially mutated when it returns an
//! error, and nothing in the engine retries.

use thiserror::Error;

use crate::domain::{Address, Amount, Asset, Shares};

/// Errors raised by pricing, reserve, ledger and swap operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A divisor (usually a reserve) was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A reserve would go negative, or one side of the pool would be left
    /// empty while the other is not.
    #[error("insufficient reserve: {0}")]
    InsufficientReserve(&'static str),

    /// The caller offered less token than the current ratio requires.
    #[error("ratio mismatch: deposit requires {required} token, {offered} offered")]
    RatioMismatch {
        /// Token amount matching the ether deposit at the current ratio.
        required: Amount,
        /// Token amount the caller was willing to supply.
        offered: Amount,
    },

    /// The provider holds fewer shares than it asked to burn.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: Shares,
        /// Shares the caller holds.
        available: Shares,
    },

    /// The pool has no reserves or no outstanding shares.
    #[error("pool is empty")]
    EmptyPool,

    /// The computed output fell below the caller's minimum.
    #[error("slippage exceeded: output {output} below minimum {min_output}")]
    SlippageExceeded {
        /// Output the trade would have produced.
        output: Amount,
        /// Minimum the caller accepts.
        min_output: Amount,
    },

    /// A 256-bit value would overflow or underflow.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// An amount that must be positive was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// A decimal count or decimal string was malformed.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A configuration parameter was out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The asset-transfer collaborator rejected a movement; the pool state
    /// has been rolled back.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] TransferError),
}

/// Fieldless discriminant of [`AmmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`AmmError::DivisionByZero`].
    DivisionByZero,
    /// See [`AmmError::InsufficientReserve`].
    InsufficientReserve,
    /// See [`AmmError::RatioMismatch`].
    RatioMismatch,
    /// See [`AmmError::InsufficientShares`].
    InsufficientShares,
    /// See [`AmmError::EmptyPool`].
    EmptyPool,
    /// See [`AmmError::SlippageExceeded`].
    SlippageExceeded,
    /// See [`AmmError::ArithmeticOverflow`].
    ArithmeticOverflow,
    /// See [`AmmError::ZeroAmount`].
    ZeroAmount,
    /// See [`AmmError::InvalidPrecision`].
    InvalidPrecision,
    /// See [`AmmError::InvalidConfiguration`].
    InvalidConfiguration,
    /// See [`AmmError::TransferFailed`].
    TransferFailed,
}

impl AmmError {
    /// Returns the discriminant without payload.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InsufficientReserve(_) => ErrorKind::InsufficientReserve,
            Self::RatioMismatch { .. } => ErrorKind::RatioMismatch,
            Self::InsufficientShares { .. } => ErrorKind::InsufficientShares,
            Self::EmptyPool => ErrorKind::EmptyPool,
            Self::SlippageExceeded { .. } => ErrorKind::SlippageExceeded,
            Self::ArithmeticOverflow(_) => ErrorKind::ArithmeticOverflow,
            Self::ZeroAmount(_) => ErrorKind::ZeroAmount,
            Self::InvalidPrecision(_) => ErrorKind::InvalidPrecision,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::TransferFailed(_) => ErrorKind::TransferFailed,
        }
    }
}

/// Failure reported by an [`AssetTransfer`](crate::traits::AssetTransfer)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The paying account does not hold enough of the asset.
    #[error("{account} holds {available} {asset}, {requested} needed")]
    InsufficientBalance {
        /// Asset being moved.
        asset: Asset,
        /// Paying account.
        account: Address,
        /// Amount requested.
        requested: Amount,
        /// Amount held.
        available: Amount,
    },

    /// The receiving balance would overflow.
    #[error("{asset} balance of {account} would overflow")]
    BalanceOverflow {
        /// Asset being moved.
        asset: Asset,
        /// Receiving account.
        account: Address,
    },

    /// The collaborator refused the movement for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}
