use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::metadata::TokenMetadata;

/// Type alias for convenience
pub type TokenId = u64;

/// Opaque account identifier supplied by the host
pub type AccountId = String;

/// Composite ledger key; exactly one record exists per (token type, holder)
/// pair with a positive balance
pub type TokenKey = (TokenId, AccountId);

/// One (token type, owner) holding: the balance plus the approvals granted
/// on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    pub token_id: TokenId,
    /// Units held; a record never rests at zero
    pub balance: u128,
    /// Accounts allowed to transfer out of this holding, by approval id
    pub approved_account_ids: HashMap<AccountId, u64>,
    /// Next approval id to hand out; only ever increases
    pub next_approval_id: u64,
}

impl TokenRecord {
    /// Fresh single-unit holding with no approvals
    pub(crate) fn new(owner_id: AccountId, token_id: TokenId) -> Self {
        Self {
            owner_id,
            token_id,
            balance: 1,
            approved_account_ids: HashMap::new(),
            next_approval_id: 0,
        }
    }
}

/// Info on individual token type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub token_id: TokenId,
    pub owner_id: Option<AccountId>,
    /// Total amount in circulation
    pub supply: u128,
    pub metadata: TokenMetadata,
}
