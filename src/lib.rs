//! In-memory multi-token ownership ledger with approval-gated transfer.

mod contract;
mod errors;
mod event;
mod metadata;
mod owner;
mod token;
mod views;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub use crate::contract::{Collectible, Host};
pub use crate::errors::{LedgerError, LedgerResult};
pub use crate::event::{LogSink, TracingLog};
pub use crate::metadata::{ContractMetadata, TokenMetadata, COLLECTIBLE_METADATA_SPEC};
pub use crate::token::{AccountId, Token, TokenId, TokenKey, TokenRecord};

use crate::event::Transfer;

const DEFAULT_GREETING: &str = "hi";

/// Tracks who holds how many units of each token type, the approvals granted
/// on each holding, and an aggregate per-account unit count.
///
/// Every operation runs to completion before the next is admitted; the
/// `&mut self` receivers give that exclusivity within one thread. Embedders
/// sharing a ledger across threads must wrap the whole value in a single
/// `Mutex`.
pub struct Ledger {
    /// Account that constructed the ledger
    owner_id: AccountId,
    /// Owner-settable contract-level greeting
    greeting: String,
    /// Aggregate unit count per account, across token types
    tokens_per_owner: HashMap<AccountId, u128>,
    /// Canonical store; one record per (token type, holder) pair
    tokens_by_id: BTreeMap<TokenKey, TokenRecord>,
    /// Per-token-type metadata, attached at construction
    token_metadata_by_id: HashMap<TokenId, TokenMetadata>,
    /// Collection-level metadata
    metadata: ContractMetadata,
    /// Fallback metadata for token types without their own entry
    token_metadata: TokenMetadata,
    /// Sinks notified after each successful mutation
    subscribers: Vec<Arc<dyn LogSink>>,
}

impl Ledger {
    /// Initializes the ledger owned by `owner_id` with collection metadata
    pub fn new(
        owner_id: AccountId,
        metadata: ContractMetadata,
        token_metadata: TokenMetadata,
    ) -> Self {
        Self {
            owner_id,
            greeting: DEFAULT_GREETING.to_string(),
            tokens_per_owner: HashMap::new(),
            tokens_by_id: BTreeMap::new(),
            token_metadata_by_id: HashMap::new(),
            metadata,
            token_metadata,
            subscribers: Vec::new(),
        }
    }

    /// Attaches metadata for one token type. Construction-time only; ledger
    /// operations never touch the metadata index.
    pub fn with_token_metadata(mut self, token_id: TokenId, metadata: TokenMetadata) -> Self {
        self.token_metadata_by_id.insert(token_id, metadata);
        self
    }

    /// Registers a sink notified after each successful mutation
    pub fn subscribe(&mut self, sink: Arc<dyn LogSink>) {
        self.subscribers.push(sink);
    }

    /// Mint-or-acquire one unit of `token_id` for `caller`. Always succeeds.
    pub fn collect(&mut self, token_id: TokenId, caller: &AccountId) -> bool {
        match self.tokens_by_id.get_mut(&(token_id, caller.clone())) {
            Some(record) => record.balance += 1,
            None => {
                self.tokens_by_id.insert(
                    (token_id, caller.clone()),
                    TokenRecord::new(caller.clone(), token_id),
                );
            }
        }
        *self.tokens_per_owner.entry(caller.clone()).or_insert(0) += 1;

        Transfer {
            old_owner_id: None,
            new_owner_id: caller,
            token_ids: &[token_id],
            amounts: &["1"],
            memo: None,
        }
        .emit(&self.subscribers);

        true
    }

    /// Grant `account_id` approval over the caller's holding of `token_id`.
    /// Caller must be the owner of record; approving the same account again
    /// overwrites with a fresh, larger id.
    pub fn approve(
        &mut self,
        token_id: TokenId,
        caller: &AccountId,
        account_id: &AccountId,
    ) -> LedgerResult<bool> {
        let record = self
            .tokens_by_id
            .get_mut(&(token_id, caller.clone()))
            .ok_or_else(|| LedgerError::Unauthorized("caller must be the token owner".to_string()))?;
        if record.owner_id != *caller {
            return Err(LedgerError::Unauthorized(
                "caller must be the token owner".to_string(),
            ));
        }

        let approval_id = record.next_approval_id;
        record.approved_account_ids.insert(account_id.clone(), approval_id);
        record.next_approval_id += 1;
        Ok(true)
    }

    /// True when `account_id` is the owner of the `(token_id, owner_id)`
    /// record or appears in its approvals.
    pub fn is_approved(
        &self,
        token_id: TokenId,
        owner_id: &AccountId,
        account_id: &AccountId,
    ) -> LedgerResult<bool> {
        let record = self
            .tokens_by_id
            .get(&(token_id, owner_id.clone()))
            .ok_or_else(|| LedgerError::RecordNotFound {
                token_id,
                owner_id: owner_id.clone(),
            })?;
        Ok(record.owner_id == *account_id || record.approved_account_ids.contains_key(account_id))
    }

    /// Move one unit of `token_id` from `from` to `to`. The acting `caller`
    /// must be the owner of the source record or approved on it, and the
    /// source balance must be positive. Validates fully before mutating.
    pub fn transfer(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
        caller: &AccountId,
    ) -> LedgerResult<bool> {
        // checks
        let source = self
            .tokens_by_id
            .get(&(token_id, from.clone()))
            .ok_or_else(|| LedgerError::Unauthorized("user is not approved".to_string()))?;
        if source.owner_id != *caller && !source.approved_account_ids.contains_key(caller) {
            return Err(LedgerError::Unauthorized("user is not approved".to_string()));
        }
        if source.balance == 0 {
            return Err(LedgerError::InsufficientBalance {
                token_id,
                owner_id: from.clone(),
            });
        }

        // debit the source record, dropping it once empty
        let from_key = (token_id, from.clone());
        let mut emptied = false;
        if let Some(record) = self.tokens_by_id.get_mut(&from_key) {
            record.balance -= 1;
            emptied = record.balance == 0;
        }
        if emptied {
            self.tokens_by_id.remove(&from_key);
        }

        // update tokens per owner
        if let Some(count) = self.tokens_per_owner.get_mut(from) {
            *count = count.saturating_sub(1);
        }
        *self.tokens_per_owner.entry(to.clone()).or_insert(0) += 1;

        // credit the destination, keeping any balance and approvals it
        // already holds
        match self.tokens_by_id.get_mut(&(token_id, to.clone())) {
            Some(record) => record.balance += 1,
            None => {
                self.tokens_by_id
                    .insert((token_id, to.clone()), TokenRecord::new(to.clone(), token_id));
            }
        }

        Transfer {
            old_owner_id: Some(from),
            new_owner_id: to,
            token_ids: &[token_id],
            amounts: &["1"],
            memo: None,
        }
        .emit(&self.subscribers);

        Ok(true)
    }

    pub(crate) fn notify(&self, message: &str) {
        for sink in &self.subscribers {
            sink.log(message);
        }
    }
}
