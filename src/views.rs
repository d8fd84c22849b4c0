use crate::*;

impl Ledger {
    /// Units of `token_id` held by `account_id`, zero when no record exists
    pub fn balance_of(&self, token_id: TokenId, account_id: &AccountId) -> u128 {
        self.tokens_by_id
            .get(&(token_id, account_id.clone()))
            .map(|record| record.balance)
            .unwrap_or(0)
    }

    /// Aggregate unit count for `account_id` across every token type, or
    /// `None` when the account has never been credited
    pub fn collection_balance(&self, account_id: &AccountId) -> Option<u128> {
        self.tokens_per_owner.get(account_id).copied()
    }

    /// Sum of balances over every record, across token types
    pub fn total_supply(&self) -> u128 {
        self.tokens_by_id.values().map(|record| record.balance).sum()
    }

    /// Sum of balances over the records of one token type
    pub fn token_supply(&self, token_id: TokenId) -> u128 {
        self.tokens_by_id
            .values()
            .filter(|record| record.token_id == token_id)
            .map(|record| record.balance)
            .sum()
    }

    /// Per-token-type view: circulating supply plus metadata, falling back
    /// to the collection-wide metadata for types without their own entry
    pub fn token(&self, token_id: TokenId) -> Option<Token> {
        let supply = self.token_supply(token_id);
        if supply == 0 {
            return None;
        }
        let metadata = self
            .token_metadata_by_id
            .get(&token_id)
            .unwrap_or(&self.token_metadata)
            .clone();

        Some(Token {
            token_id,
            owner_id: None,
            supply,
            metadata,
        })
    }

    pub fn metadata(&self) -> &ContractMetadata {
        &self.metadata
    }
}
