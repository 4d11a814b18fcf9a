//! Issuance phase controller — pause flag, sale phases, allowlist gate.
//!
//! Pure configuration plus two predicates: `authorize` (fail-closed gate
//! consumed by the orchestrator on every call) and `price_for`. All state
//! here is mutated only through the engine's administrative surface.

use mintgate_types::{
    AccountId, Hash32, MintgateError, Phase, PhaseConfig, Result, config, constants,
};
use rust_decimal::Decimal;

/// Holds the mode configuration and the global pause flag.
#[derive(Debug, Clone)]
pub struct PhaseController {
    paused: bool,
    pre_sale: PhaseConfig,
    public: PhaseConfig,
    special_event: PhaseConfig,
    /// Snapshot root of gen-1 holders, for rare claims. Distinct from the
    /// per-phase allowlist roots.
    gen1_holders_root: Hash32,
}

impl PhaseController {
    /// Launch configuration: engine paused, all phases closed, default
    /// prices, special-event cap at its default.
    #[must_use]
    pub fn new() -> Self {
        let mut special_event = PhaseConfig::closed(config::default_public_price());
        special_event.per_account_cap = Some(constants::DEFAULT_SPECIAL_EVENT_CAP);
        // Pre-sale is gated by holder entitlement, not by an allowlist.
        let mut pre_sale = PhaseConfig::closed(config::default_pre_sale_price());
        pre_sale.requires_allowlist = false;
        Self {
            paused: true,
            pre_sale,
            public: PhaseConfig::closed(config::default_public_price()),
            special_event,
            gen1_holders_root: [0u8; 32],
        }
    }

    /// Whether the global pause flag is set.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the global pause flag. Every issuance entry point except the
    /// administrative giveaway fails closed while paused.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Read a phase's configuration.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> &PhaseConfig {
        match phase {
            Phase::PreSale => &self.pre_sale,
            Phase::Public => &self.public,
            Phase::SpecialEvent => &self.special_event,
        }
    }

    /// Mutable access for the administrative surface.
    pub fn phase_mut(&mut self, phase: Phase) -> &mut PhaseConfig {
        match phase {
            Phase::PreSale => &mut self.pre_sale,
            Phase::Public => &mut self.public,
            Phase::SpecialEvent => &mut self.special_event,
        }
    }

    /// The committed gen-1-holders snapshot root.
    #[must_use]
    pub fn gen1_holders_root(&self) -> &Hash32 {
        &self.gen1_holders_root
    }

    /// Commit a new gen-1-holders snapshot root.
    pub fn set_gen1_holders_root(&mut self, root: Hash32) {
        self.gen1_holders_root = root;
    }

    /// Fail-closed eligibility gate for a phase.
    ///
    /// # Errors
    /// - [`MintgateError::PhaseClosed`] if the engine is paused or the
    ///   phase is not open
    /// - [`MintgateError::InvalidProof`] if the phase requires an allowlist
    ///   and the proof does not fold to the committed root
    pub fn authorize(&self, phase: Phase, account: &AccountId, proof: &[Hash32]) -> Result<()> {
        if self.paused {
            return Err(MintgateError::PhaseClosed {
                reason: "engine paused".to_string(),
            });
        }
        let config = self.phase(phase);
        if !config.is_open {
            return Err(MintgateError::PhaseClosed {
                reason: format!("{phase} not open"),
            });
        }
        if config.requires_allowlist
            && !mintgate_proof::verify(&config.committed_root, account, proof)
        {
            return Err(MintgateError::InvalidProof(*account));
        }
        Ok(())
    }

    /// Whether `account` could mint in `phase` right now.
    #[must_use]
    pub fn is_open_for(&self, phase: Phase, account: &AccountId, proof: &[Hash32]) -> bool {
        self.authorize(phase, account, proof).is_ok()
    }

    /// Total price for `quantity` tokens in `phase`.
    #[must_use]
    pub fn price_for(&self, phase: Phase, quantity: u64) -> Decimal {
        self.phase(phase).price_per_token * Decimal::from(quantity)
    }
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use mintgate_proof::MerkleTree;

    use super::*;

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    #[test]
    fn starts_paused_with_all_phases_closed() {
        let pc = PhaseController::new();
        assert!(pc.is_paused());
        for phase in [Phase::PreSale, Phase::Public, Phase::SpecialEvent] {
            assert!(!pc.phase(phase).is_open);
        }
    }

    #[test]
    fn paused_engine_fails_closed_even_for_open_phase() {
        let mut pc = PhaseController::new();
        pc.phase_mut(Phase::Public).is_open = true;
        pc.phase_mut(Phase::Public).requires_allowlist = false;

        let err = pc.authorize(Phase::Public, &acct(1), &[]).unwrap_err();
        assert!(matches!(err, MintgateError::PhaseClosed { .. }));

        pc.set_paused(false);
        pc.authorize(Phase::Public, &acct(1), &[]).unwrap();
    }

    #[test]
    fn closed_phase_rejects() {
        let mut pc = PhaseController::new();
        pc.set_paused(false);
        let err = pc.authorize(Phase::PreSale, &acct(1), &[]).unwrap_err();
        assert!(matches!(err, MintgateError::PhaseClosed { .. }));
    }

    #[test]
    fn allowlist_gate_distinguishes_members() {
        let members = [acct(1), acct(2), acct(3)];
        let tree = MerkleTree::build(&members);

        let mut pc = PhaseController::new();
        pc.set_paused(false);
        let cfg = pc.phase_mut(Phase::Public);
        cfg.is_open = true;
        cfg.requires_allowlist = true;
        cfg.committed_root = tree.root();

        let proof = tree.proof_for(&acct(1)).unwrap();
        pc.authorize(Phase::Public, &acct(1), &proof).unwrap();
        assert!(pc.is_open_for(Phase::Public, &acct(1), &proof));

        // The same proof must not admit a different account.
        let err = pc.authorize(Phase::Public, &acct(9), &proof).unwrap_err();
        assert!(matches!(err, MintgateError::InvalidProof(a) if a == acct(9)));
    }

    #[test]
    fn allowlist_waived_when_not_required() {
        let mut pc = PhaseController::new();
        pc.set_paused(false);
        let cfg = pc.phase_mut(Phase::Public);
        cfg.is_open = true;
        cfg.requires_allowlist = false;

        // Any account, garbage proof.
        pc.authorize(Phase::Public, &acct(42), &[[0xAA; 32]]).unwrap();
    }

    #[test]
    fn price_scales_linearly() {
        let pc = PhaseController::new();
        assert_eq!(
            pc.price_for(Phase::PreSale, 4),
            Decimal::new(24, 2) // 4 x 0.06
        );
        assert_eq!(pc.price_for(Phase::Public, 1), Decimal::new(8, 2));
        assert_eq!(pc.price_for(Phase::Public, 0), Decimal::ZERO);
    }

    #[test]
    fn special_event_default_cap() {
        let pc = PhaseController::new();
        assert_eq!(pc.phase(Phase::SpecialEvent).per_account_cap, Some(2));
    }
}
