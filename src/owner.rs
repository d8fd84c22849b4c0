use crate::*;

impl Ledger {
    pub fn owner(&self) -> &AccountId {
        &self.owner_id
    }

    /// Contract-level greeting
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Store a new greeting. Only the constructing owner may do this.
    pub fn set_greeting(&mut self, greeting: String, caller: &AccountId) -> LedgerResult<()> {
        self.ensure_owner(caller)?;
        self.notify(&format!("Saving greeting {greeting}"));
        self.greeting = greeting;
        Ok(())
    }

    pub(crate) fn ensure_owner(&self, caller: &AccountId) -> LedgerResult<()> {
        if *caller != self.owner_id {
            return Err(LedgerError::Unauthorized("Sender not the Owner".to_string()));
        }
        Ok(())
    }
}
