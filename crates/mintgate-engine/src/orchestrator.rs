//! Mint/claim orchestrator — the engine's public entry points.
//!
//! Each entry point runs its guards in a fixed order, reads any external
//! state (upstream holdings, custody) before the first local mutation, and
//! either fully completes or fails with no state change. Successful calls
//! return their issuance events in ascending token-id order.

use std::collections::{BTreeSet, HashMap};

use mintgate_ledger::{EntitlementCalculator, PhaseController, SupplyLedger};
use mintgate_types::{
    AccountId, AccountProgress, BandId, CollectionConfig, Hash32, IssuanceEvent, IssuanceMode,
    MintOnce, MintgateError, Phase, PhaseConfig, Result, TokenId,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::custody::TokenCustody;
use crate::metadata;

/// Root orchestrator for one collection instance.
///
/// Owns the supply ledger, the phase controller, per-account progress, and
/// the rare pool inventory. Custody and entitlement collaborators are passed
/// into each entry point so they stay swappable without touching allocation
/// logic.
pub struct IssuanceEngine {
    admin: AccountId,
    /// Account that holds rare-pool tokens between `rare_mint` and claims.
    pool_account: AccountId,
    ledger: SupplyLedger,
    phases: PhaseController,
    progress: HashMap<AccountId, AccountProgress>,
    /// Rare tokens minted to the pool and not yet claimed, ascending.
    rare_pool: BTreeSet<TokenId>,
    base_token_uri: String,
}

impl IssuanceEngine {
    /// Create an engine for a fresh collection. Starts paused with all
    /// phases closed.
    ///
    /// # Errors
    /// Returns `Configuration` if the band layout is invalid.
    pub fn new(
        admin: AccountId,
        pool_account: AccountId,
        config: &CollectionConfig,
    ) -> Result<Self> {
        Ok(Self {
            admin,
            pool_account,
            ledger: SupplyLedger::new(config)?,
            phases: PhaseController::new(),
            progress: HashMap::new(),
            rare_pool: BTreeSet::new(),
            base_token_uri: String::new(),
        })
    }

    fn require_admin(&self, caller: &AccountId) -> Result<()> {
        if *caller != self.admin {
            return Err(MintgateError::Unauthorized(*caller));
        }
        Ok(())
    }

    fn require_unpaused(&self) -> Result<()> {
        if self.phases.is_paused() {
            return Err(MintgateError::PhaseClosed {
                reason: "engine paused".to_string(),
            });
        }
        Ok(())
    }

    fn require_exact_payment(&self, phase: Phase, quantity: u64, presented: Decimal) -> Result<()> {
        let required = self.phases.price_for(phase, quantity);
        if presented != required {
            return Err(MintgateError::InsufficientPayment {
                required,
                presented,
            });
        }
        Ok(())
    }

    /// Allocate from a band and record ownership, emitting one event per
    /// token in ascending order.
    fn allocate_to(
        &mut self,
        band: BandId,
        quantity: u64,
        recipient: AccountId,
        mode: IssuanceMode,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        let ids = self.ledger.allocate(band, quantity)?;
        let events = ids
            .into_iter()
            .map(|id| {
                custody.mint_to(recipient, id);
                IssuanceEvent::new(recipient, id, mode)
            })
            .collect();
        Ok(events)
    }

    // =====================================================================
    // Issuance entry points
    // =====================================================================

    /// Administrative giveaway from the giveaway band. Works while paused.
    ///
    /// # Errors
    /// `Unauthorized`, `CapacityExceeded`.
    pub fn giveaway_mint(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        quantity: u64,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.require_admin(caller)?;
        let events = self.allocate_to(BandId::Giveaway, quantity, to, IssuanceMode::Giveaway, custody)?;
        info!(
            recipient = %to,
            quantity,
            first = events.first().map(|e| e.token_id.value()),
            "giveaway mint"
        );
        Ok(events)
    }

    /// Bulk-reserve rare tokens into the engine's own pool account.
    ///
    /// # Errors
    /// `Unauthorized`, `PhaseClosed` (pause), `CapacityExceeded`.
    pub fn rare_mint(
        &mut self,
        caller: &AccountId,
        quantity: u64,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.require_admin(caller)?;
        self.require_unpaused()?;
        let pool = self.pool_account;
        let events = self.allocate_to(BandId::Rare, quantity, pool, IssuanceMode::RarePool, custody)?;
        self.rare_pool.extend(events.iter().map(|e| e.token_id));
        info!(quantity, pool_depth = self.rare_pool.len(), "rare pool mint");
        Ok(events)
    }

    /// Claim rare tokens out of the pool against the gen-1-holders snapshot.
    ///
    /// Quantity is the live rare-claim entitlement at call time. At most
    /// one successful claim per account, ever.
    ///
    /// # Errors
    /// `PhaseClosed` (pause), `AlreadyClaimed`, `InvalidProof`,
    /// `NoEntitlement`, `CapacityExceeded` (pool depth).
    pub fn claim_rare_token(
        &mut self,
        caller: &AccountId,
        proof: &[Hash32],
        entitlements: &EntitlementCalculator<'_>,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.require_unpaused()?;
        if self.progress_for(caller).rare_claim.is_consumed() {
            return Err(MintgateError::AlreadyClaimed(*caller));
        }
        if !mintgate_proof::verify(self.phases.gen1_holders_root(), caller, proof) {
            return Err(MintgateError::InvalidProof(*caller));
        }
        let quantity = entitlements.rare_claim_entitlement(caller)?;
        if (self.rare_pool.len() as u64) < quantity {
            return Err(MintgateError::CapacityExceeded {
                band: BandId::Rare,
                requested: quantity,
                remaining: self.rare_pool.len() as u64,
            });
        }

        let claimed: Vec<TokenId> = self.rare_pool.iter().take(quantity as usize).copied().collect();
        // Custody must hold every claimed token before anything mutates,
        // so a rejected transfer cannot leave a partially drained pool.
        for id in &claimed {
            if custody.owner_of(*id) != Some(self.pool_account) {
                return Err(MintgateError::Internal(format!(
                    "rare pool token {id} not held by pool account"
                )));
            }
        }

        // All guards passed; mutate.
        let mut events = Vec::with_capacity(claimed.len());
        for id in claimed {
            self.rare_pool.remove(&id);
            custody.transfer(self.pool_account, *caller, id)?;
            events.push(IssuanceEvent::new(*caller, id, IssuanceMode::RareClaim));
        }
        self.progress.entry(*caller).or_default().rare_claim = MintOnce::Consumed;
        info!(claimant = %caller, quantity, "rare claim");
        Ok(events)
    }

    /// Holder-entitlement pre-sale: mint `3 * gen1 + gen2` regular tokens.
    ///
    /// The entitlement is read live, but each account converts it at most
    /// once regardless of later holdings changes.
    ///
    /// # Errors
    /// `PhaseClosed`, `AlreadyMinted`, `NoEntitlement`,
    /// `InsufficientPayment`, `CapacityExceeded`.
    pub fn pre_mint(
        &mut self,
        caller: &AccountId,
        payment: Decimal,
        entitlements: &EntitlementCalculator<'_>,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.phases.authorize(Phase::PreSale, caller, &[])?;
        if self.progress_for(caller).pre_mint.is_consumed() {
            return Err(MintgateError::AlreadyMinted(*caller));
        }
        let quantity = entitlements.pre_sale_entitlement(caller)?;
        self.require_exact_payment(Phase::PreSale, quantity, payment)?;

        let events =
            self.allocate_to(BandId::Regular, quantity, *caller, IssuanceMode::PreSale, custody)?;
        self.progress.entry(*caller).or_default().pre_mint = MintOnce::Consumed;
        info!(minter = %caller, quantity, "pre-sale mint");
        Ok(events)
    }

    /// General public sale: one regular token per call.
    ///
    /// # Errors
    /// `PhaseClosed`, `InvalidProof`, `InsufficientPayment`,
    /// `CapacityExceeded`.
    pub fn public_mint(
        &mut self,
        caller: &AccountId,
        proof: &[Hash32],
        payment: Decimal,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.phases.authorize(Phase::Public, caller, proof)?;
        self.require_exact_payment(Phase::Public, 1, payment)?;

        let events =
            self.allocate_to(BandId::Regular, 1, *caller, IssuanceMode::Public, custody)?;
        info!(minter = %caller, "public mint");
        Ok(events)
    }

    /// Special-event sale: one regular token per call, capped per account.
    ///
    /// # Errors
    /// `PhaseClosed`, `InvalidProof`, `AccountCapExceeded`,
    /// `InsufficientPayment`, `CapacityExceeded`.
    pub fn special_event_mint(
        &mut self,
        caller: &AccountId,
        proof: &[Hash32],
        payment: Decimal,
        custody: &mut dyn TokenCustody,
    ) -> Result<Vec<IssuanceEvent>> {
        self.phases.authorize(Phase::SpecialEvent, caller, proof)?;
        let minted = self.progress_for(caller).special_event_minted;
        if let Some(cap) = self.phases.phase(Phase::SpecialEvent).per_account_cap {
            if minted + 1 > cap {
                return Err(MintgateError::AccountCapExceeded {
                    cap,
                    attempted: minted + 1,
                });
            }
        }
        self.require_exact_payment(Phase::SpecialEvent, 1, payment)?;

        let events =
            self.allocate_to(BandId::Regular, 1, *caller, IssuanceMode::SpecialEvent, custody)?;
        self.progress.entry(*caller).or_default().special_event_minted = minted + 1;
        info!(minter = %caller, count = minted + 1, "special event mint");
        Ok(events)
    }

    // =====================================================================
    // Administrative surface
    // =====================================================================

    /// Set the global pause flag.
    pub fn set_paused(&mut self, caller: &AccountId, paused: bool) -> Result<()> {
        self.require_admin(caller)?;
        self.phases.set_paused(paused);
        Ok(())
    }

    /// Resize the collection (regular band upper bound).
    pub fn set_collection_size(&mut self, caller: &AccountId, size: u64) -> Result<()> {
        self.require_admin(caller)?;
        self.ledger.set_collection_size(size)
    }

    /// Open or close a phase.
    pub fn set_phase_open(&mut self, caller: &AccountId, phase: Phase, open: bool) -> Result<()> {
        self.require_admin(caller)?;
        self.phases.phase_mut(phase).is_open = open;
        Ok(())
    }

    /// Set a phase's allowlist requirement and committed root together.
    pub fn set_phase_allowlist(
        &mut self,
        caller: &AccountId,
        phase: Phase,
        requires_allowlist: bool,
        committed_root: Hash32,
    ) -> Result<()> {
        self.require_admin(caller)?;
        let config = self.phases.phase_mut(phase);
        config.requires_allowlist = requires_allowlist;
        config.committed_root = committed_root;
        Ok(())
    }

    /// Set a phase's per-token price.
    pub fn set_phase_price(
        &mut self,
        caller: &AccountId,
        phase: Phase,
        price_per_token: Decimal,
    ) -> Result<()> {
        self.require_admin(caller)?;
        self.phases.phase_mut(phase).price_per_token = price_per_token;
        Ok(())
    }

    /// Set a phase's per-account cap (`None` = uncapped).
    pub fn set_phase_cap(
        &mut self,
        caller: &AccountId,
        phase: Phase,
        cap: Option<u32>,
    ) -> Result<()> {
        self.require_admin(caller)?;
        self.phases.phase_mut(phase).per_account_cap = cap;
        Ok(())
    }

    /// Commit a new gen-1-holders snapshot root for rare claims.
    pub fn set_gen1_holders_root(&mut self, caller: &AccountId, root: Hash32) -> Result<()> {
        self.require_admin(caller)?;
        self.phases.set_gen1_holders_root(root);
        Ok(())
    }

    /// Set the metadata base URI.
    pub fn set_base_token_uri(&mut self, caller: &AccountId, base: impl Into<String>) -> Result<()> {
        self.require_admin(caller)?;
        self.base_token_uri = base.into();
        Ok(())
    }

    // =====================================================================
    // Read-only queries
    // =====================================================================

    /// Metadata URI for a token: `base || token_id`.
    #[must_use]
    pub fn token_uri(&self, token_id: TokenId) -> String {
        metadata::token_uri(&self.base_token_uri, token_id)
    }

    /// Current collection size.
    #[must_use]
    pub fn collection_size(&self) -> u64 {
        self.ledger.collection_size()
    }

    /// Remaining capacity of a band.
    #[must_use]
    pub fn remaining(&self, band: BandId) -> u64 {
        self.ledger.remaining(band)
    }

    /// Unclaimed tokens currently in the rare pool.
    #[must_use]
    pub fn rare_pool_depth(&self) -> usize {
        self.rare_pool.len()
    }

    /// Whether the engine is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.phases.is_paused()
    }

    /// A phase's current configuration.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> &PhaseConfig {
        self.phases.phase(phase)
    }

    /// An account's issuance progress (defaults if never seen).
    #[must_use]
    pub fn progress_for(&self, account: &AccountId) -> AccountProgress {
        self.progress.get(account).cloned().unwrap_or_default()
    }
}
