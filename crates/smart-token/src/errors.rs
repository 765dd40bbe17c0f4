//! Ledger errors

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use thiserror::Error;

/// Reason a ledger operation was rejected.
///
/// Every variant aborts the whole operation; the ledger is left exactly as it
/// was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum Error {
    #[error("caller is not the owner")]
    Unauthorized,

    #[error("invalid address")]
    InvalidAddress,

    #[error("amount exceeds account balance")]
    InsufficientBalance,

    #[error("amount exceeds spendable balance")]
    InsufficientSpendable,

    #[error("amount exceeds allowance")]
    InsufficientAllowance,

    #[error("arithmetic underflow")]
    Underflow,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("recipient rejected the transfer")]
    RecipientRejected,
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, Error>;

/// Error building a ledger from its genesis configuration.
#[derive(Error, Debug)]
pub enum GenesisError {
    #[error("{0} must not be the zero account")]
    ZeroAccount(&'static str),

    #[error("initial holder must not be the ledger's own account")]
    HolderIsLedger,

    #[error("token name too long (max {max} bytes, got {got})")]
    NameTooLong { max: usize, got: usize },

    #[error("token symbol too long (max {max} bytes, got {got})")]
    SymbolTooLong { max: usize, got: usize },

    #[error("invalid genesis json: {0}")]
    Json(#[from] serde_json::Error),
}
