//! Token custody interface — the external ledger that stores ownership.
//!
//! The engine decides which numbers get issued to whom; the custody
//! collaborator actually records ownership and answers `owner_of` queries.
//! [`InMemoryCustody`] ships for tests and single-process deployments.

use std::collections::BTreeMap;

use mintgate_types::{AccountId, MintgateError, Result, TokenId};

/// External token-ledger collaborator.
pub trait TokenCustody {
    /// Record first issuance of `token_id` to `recipient`.
    fn mint_to(&mut self, recipient: AccountId, token_id: TokenId);

    /// Move `token_id` from `from` to `to`.
    ///
    /// # Errors
    /// Returns `Internal` if `from` does not currently own the token.
    fn transfer(&mut self, from: AccountId, to: AccountId, token_id: TokenId) -> Result<()>;

    /// Current owner of `token_id`, if it has been issued.
    fn owner_of(&self, token_id: TokenId) -> Option<AccountId>;
}

/// Simple in-memory ownership map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustody {
    owners: BTreeMap<TokenId, AccountId>,
}

impl InMemoryCustody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens currently held by `account`.
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> usize {
        self.owners.values().filter(|o| *o == account).count()
    }
}

impl TokenCustody for InMemoryCustody {
    fn mint_to(&mut self, recipient: AccountId, token_id: TokenId) {
        self.owners.insert(token_id, recipient);
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, token_id: TokenId) -> Result<()> {
        match self.owners.get_mut(&token_id) {
            Some(owner) if *owner == from => {
                *owner = to;
                Ok(())
            }
            _ => Err(MintgateError::Internal(format!(
                "transfer of token {token_id} from non-owner {from}"
            ))),
        }
    }

    fn owner_of(&self, token_id: TokenId) -> Option<AccountId> {
        self.owners.get(&token_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    #[test]
    fn mint_then_owner_of() {
        let mut custody = InMemoryCustody::new();
        custody.mint_to(acct(1), TokenId(1));
        assert_eq!(custody.owner_of(TokenId(1)), Some(acct(1)));
        assert_eq!(custody.owner_of(TokenId(2)), None);
        assert_eq!(custody.balance_of(&acct(1)), 1);
    }

    #[test]
    fn transfer_moves_ownership() {
        let mut custody = InMemoryCustody::new();
        custody.mint_to(acct(1), TokenId(101));
        custody.transfer(acct(1), acct(2), TokenId(101)).unwrap();
        assert_eq!(custody.owner_of(TokenId(101)), Some(acct(2)));
        assert_eq!(custody.balance_of(&acct(1)), 0);
    }

    #[test]
    fn transfer_from_non_owner_fails() {
        let mut custody = InMemoryCustody::new();
        custody.mint_to(acct(1), TokenId(101));
        let err = custody.transfer(acct(3), acct(2), TokenId(101)).unwrap_err();
        assert!(matches!(err, MintgateError::Internal(_)));
        assert_eq!(custody.owner_of(TokenId(101)), Some(acct(1)));
    }
}
