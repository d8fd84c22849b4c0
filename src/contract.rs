//! Host collaborator and the contract-style facade over [`Ledger`].

use std::sync::Arc;

use crate::errors::LedgerResult;
use crate::event::LogSink;
use crate::metadata::{ContractMetadata, TokenMetadata};
use crate::token::{AccountId, Token, TokenId};
use crate::Ledger;

/// Identity and diagnostics supplied by the embedding environment.
///
/// The caller identity is authoritative and re-resolved on every operation,
/// never cached across operations.
pub trait Host: LogSink {
    fn current_caller(&self) -> AccountId;
}

/// Contract-style surface over the ledger: resolves the acting caller
/// through the [`Host`] on each call and passes it down explicitly.
///
/// The account that constructs the contract becomes its owner, and the host
/// is wired in as the first log subscriber.
pub struct Collectible<H: Host> {
    host: Arc<H>,
    ledger: Ledger,
}

impl<H: Host + 'static> Collectible<H> {
    /// Initializes the contract owned by the constructing caller
    pub fn new(host: Arc<H>, metadata: ContractMetadata, token_metadata: TokenMetadata) -> Self {
        let owner_id = host.current_caller();
        let mut ledger = Ledger::new(owner_id, metadata, token_metadata);
        ledger.subscribe(host.clone());
        Self { host, ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn collect(&mut self, token_id: TokenId) -> bool {
        let caller = self.host.current_caller();
        self.ledger.collect(token_id, &caller)
    }

    pub fn approve(&mut self, token_id: TokenId, account_id: &AccountId) -> LedgerResult<bool> {
        let caller = self.host.current_caller();
        self.ledger.approve(token_id, &caller, account_id)
    }

    pub fn is_approved(
        &self,
        token_id: TokenId,
        owner_id: &AccountId,
        account_id: &AccountId,
    ) -> LedgerResult<bool> {
        self.ledger.is_approved(token_id, owner_id, account_id)
    }

    pub fn transfer(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> LedgerResult<bool> {
        let caller = self.host.current_caller();
        self.ledger.transfer(token_id, from, to, &caller)
    }

    pub fn balance_of(&self, token_id: TokenId, account_id: &AccountId) -> u128 {
        self.ledger.balance_of(token_id, account_id)
    }

    pub fn collection_balance(&self, account_id: &AccountId) -> Option<u128> {
        self.ledger.collection_balance(account_id)
    }

    pub fn total_supply(&self) -> u128 {
        self.ledger.total_supply()
    }

    pub fn token_supply(&self, token_id: TokenId) -> u128 {
        self.ledger.token_supply(token_id)
    }

    pub fn token(&self, token_id: TokenId) -> Option<Token> {
        self.ledger.token(token_id)
    }

    pub fn metadata(&self) -> &ContractMetadata {
        self.ledger.metadata()
    }

    pub fn owner(&self) -> &AccountId {
        self.ledger.owner()
    }

    pub fn greeting(&self) -> &str {
        self.ledger.greeting()
    }

    pub fn set_greeting(&mut self, greeting: String) -> LedgerResult<()> {
        let caller = self.host.current_caller();
        self.ledger.set_greeting(greeting, &caller)
    }
}
