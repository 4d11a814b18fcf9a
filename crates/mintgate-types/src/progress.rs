//! Per-account once-only guards.
//!
//! Rather than scattering booleans, each one-shot entitlement is an explicit
//! two-state enum so that guard checks are exhaustive by construction. The
//! states only ever advance; nothing resets within a collection's lifetime.

use serde::{Deserialize, Serialize};

/// State of a one-time entitlement for a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MintOnce {
    /// The entitlement has not been consumed yet.
    #[default]
    Available,
    /// The entitlement was consumed and can never be consumed again.
    Consumed,
}

impl MintOnce {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// All per-account issuance progress tracked by the orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountProgress {
    /// Guard for the holder-entitlement pre-sale.
    pub pre_mint: MintOnce,
    /// Guard for the rare-pool claim.
    pub rare_claim: MintOnce,
    /// Cumulative special-event mints, bounded by the phase's per-account cap.
    pub special_event_minted: u32,
}
