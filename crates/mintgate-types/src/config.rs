//! Configuration types for the collection and its issuance phases.
//!
//! Phase configuration is mutated only through the engine's administrative
//! surface and read by the orchestrator on every call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Hash32, MintgateError, Result, constants};

/// The three price-gated or entitlement-gated issuance phases.
///
/// Giveaway and rare-pool minting are administrative operations, not phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Holder-entitlement pre-sale.
    PreSale,
    /// General public sale.
    Public,
    /// Special-event public sale with a per-account cap.
    SpecialEvent,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreSale => write!(f, "PRE_SALE"),
            Self::Public => write!(f, "PUBLIC"),
            Self::SpecialEvent => write!(f, "SPECIAL_EVENT"),
        }
    }
}

/// Per-phase sale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Whether the phase currently accepts mints.
    pub is_open: bool,
    /// Whether callers must prove allowlist membership.
    pub requires_allowlist: bool,
    /// Committed Merkle root of the phase allowlist.
    pub committed_root: Hash32,
    /// Price per token for this phase.
    pub price_per_token: Decimal,
    /// Cumulative per-account mint cap; `None` means uncapped.
    pub per_account_cap: Option<u32>,
}

impl PhaseConfig {
    /// A closed phase with the given price; allowlist required, no cap.
    #[must_use]
    pub fn closed(price_per_token: Decimal) -> Self {
        Self {
            is_open: false,
            requires_allowlist: true,
            committed_root: [0u8; 32],
            price_per_token,
            per_account_cap: None,
        }
    }
}

/// Collection-wide configuration: total supply and band layout.
///
/// The bands are contiguous and disjoint: giveaway `[1, giveaway_upper]`,
/// rare `(giveaway_upper, rare_upper]`, regular `(rare_upper, collection_size]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Highest token number in the collection.
    pub collection_size: u64,
    /// Inclusive upper bound of the giveaway band.
    pub giveaway_upper: u64,
    /// Inclusive upper bound of the rare band.
    pub rare_upper: u64,
}

impl CollectionConfig {
    /// Validate the band layout.
    ///
    /// # Errors
    /// Returns `Configuration` if the bands do not partition
    /// `[1, collection_size]` into three non-empty ranges.
    pub fn validate(&self) -> Result<()> {
        if self.giveaway_upper == 0
            || self.giveaway_upper >= self.rare_upper
            || self.rare_upper >= self.collection_size
        {
            return Err(MintgateError::Configuration(format!(
                "invalid band layout: giveaway_upper={}, rare_upper={}, collection_size={}",
                self.giveaway_upper, self.rare_upper, self.collection_size,
            )));
        }
        Ok(())
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            collection_size: constants::DEFAULT_COLLECTION_SIZE,
            giveaway_upper: constants::DEFAULT_GIVEAWAY_UPPER,
            rare_upper: constants::DEFAULT_RARE_UPPER,
        }
    }
}

/// Default prices observed in the launch configuration.
#[must_use]
pub fn default_pre_sale_price() -> Decimal {
    Decimal::new(6, 2) // 0.06
}

/// Default price for the public and special-event phases.
#[must_use]
pub fn default_public_price() -> Decimal {
    Decimal::new(8, 2) // 0.08
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        CollectionConfig::default().validate().unwrap();
    }

    #[test]
    fn overlapping_bands_rejected() {
        let cfg = CollectionConfig {
            collection_size: 10_000,
            giveaway_upper: 250,
            rare_upper: 100,
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            MintgateError::Configuration(_)
        ));
    }

    #[test]
    fn rare_band_must_fit_inside_collection() {
        let cfg = CollectionConfig {
            collection_size: 250,
            giveaway_upper: 100,
            rare_upper: 250,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn phase_display() {
        assert_eq!(format!("{}", Phase::PreSale), "PRE_SALE");
        assert_eq!(format!("{}", Phase::SpecialEvent), "SPECIAL_EVENT");
    }

    #[test]
    fn closed_phase_defaults() {
        let cfg = PhaseConfig::closed(default_public_price());
        assert!(!cfg.is_open);
        assert!(cfg.requires_allowlist);
        assert_eq!(cfg.committed_root, [0u8; 32]);
        assert_eq!(cfg.per_account_cap, None);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = PhaseConfig::closed(default_pre_sale_price());
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PhaseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.price_per_token, back.price_per_token);
        assert_eq!(cfg.requires_allowlist, back.requires_allowlist);
    }
}
