//! Issuance events — the engine's audit trail.
//!
//! Every successful allocation emits one event per token, in ascending
//! token-id order. Observers rely on that ordering to reconstruct who
//! received which token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, TokenId};

/// The issuance mode under which a token left the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuanceMode {
    /// Operator giveaway from the giveaway band.
    Giveaway,
    /// Bulk reservation into the engine's rare pool.
    RarePool,
    /// Snapshot-based claim out of the rare pool.
    RareClaim,
    /// Holder-entitlement pre-sale.
    PreSale,
    /// General public sale.
    Public,
    /// Special-event public sale.
    SpecialEvent,
}

impl std::fmt::Display for IssuanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Giveaway => write!(f, "GIVEAWAY"),
            Self::RarePool => write!(f, "RARE_POOL"),
            Self::RareClaim => write!(f, "RARE_CLAIM"),
            Self::PreSale => write!(f, "PRE_SALE"),
            Self::Public => write!(f, "PUBLIC"),
            Self::SpecialEvent => write!(f, "SPECIAL_EVENT"),
        }
    }
}

/// Record of a single token reaching an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceEvent {
    /// The account that received the token.
    pub recipient: AccountId,
    /// The token number issued or transferred.
    pub token_id: TokenId,
    /// Which issuance mode produced this event.
    pub mode: IssuanceMode,
    /// When the issuance happened.
    pub issued_at: DateTime<Utc>,
}

impl IssuanceEvent {
    #[must_use]
    pub fn new(recipient: AccountId, token_id: TokenId, mode: IssuanceMode) -> Self {
        Self {
            recipient,
            token_id,
            mode,
            issued_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display() {
        assert_eq!(format!("{}", IssuanceMode::RareClaim), "RARE_CLAIM");
        assert_eq!(format!("{}", IssuanceMode::Giveaway), "GIVEAWAY");
    }

    #[test]
    fn event_serde_roundtrip() {
        let ev = IssuanceEvent::new(
            AccountId::from_bytes([9; 20]),
            TokenId(251),
            IssuanceMode::PreSale,
        );
        let json = serde_json::to_string(&ev).unwrap();
        let back: IssuanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
