//! Ledger operation errors.

use thiserror::Error;

use crate::token::{AccountId, TokenId};

/// Error raised by a ledger operation. A failed operation leaves the ledger
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("account {owner_id} has no balance of token {token_id}")]
    InsufficientBalance { token_id: TokenId, owner_id: AccountId },

    #[error("no record of token {token_id} for account {owner_id}")]
    RecordNotFound { token_id: TokenId, owner_id: AccountId },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
