//! Identifiers used throughout Mintgate.
//!
//! `AccountId` is a raw 20-byte account identifier (hex-displayed);
//! `TokenId` is the collection-local token number the ledger hands out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-byte hash value, used for Merkle roots and proof elements.
pub type Hash32 = [u8; 32];

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for an account. Raw 20-byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Short hex form for logs.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns `Configuration` if the string is not 20 bytes of hex.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(s)
            .map_err(|e| crate::MintgateError::Configuration(format!("bad account hex: {e}")))?;
        let bytes: [u8; 20] = raw.try_into().map_err(|_| {
            crate::MintgateError::Configuration("account id must be 20 bytes".to_string())
        })?;
        Ok(Self(bytes))
    }

    /// Random account, for tests and fixtures.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes[..]);
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// A token number in `[1, collection_size]`. The supply ledger is the sole
/// authority on which number gets issued next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BandId
// ---------------------------------------------------------------------------

/// The three disjoint numeric bands that partition the identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandId {
    /// Operator giveaways, `[1, giveaway_upper]`.
    Giveaway,
    /// The bulk rare reservation pool, `(giveaway_upper, rare_upper]`.
    Rare,
    /// Everything else, `(rare_upper, collection_size]`.
    Regular,
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Giveaway => write!(f, "GIVEAWAY"),
            Self::Rare => write!(f, "RARE"),
            Self::Regular => write!(f, "REGULAR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
