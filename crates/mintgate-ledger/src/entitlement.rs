//! Entitlement calculator — how many tokens an account is owed.
//!
//! Holdings of the two upstream collections are read live through the
//! [`HoldingsProvider`] seam at call time; entitlements are never
//! snapshotted. The once-only conversion of an entitlement into issued
//! tokens is the orchestrator's job, not this module's.

use std::collections::HashMap;

use mintgate_types::{AccountId, MintgateError, Result, constants};

/// Read-only view of an upstream collection's holdings.
///
/// Implementations wrap whatever token ledger actually stores ownership;
/// [`InMemoryHoldings`] ships for tests and simple adapters.
pub trait HoldingsProvider {
    /// Number of upstream tokens currently held by `account`.
    fn holdings_count(&self, account: &AccountId) -> u64;
}

/// In-memory holdings map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHoldings {
    counts: HashMap<AccountId, u64>,
}

impl InMemoryHoldings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` additional holdings for `account`.
    pub fn add(&mut self, account: AccountId, count: u64) {
        *self.counts.entry(account).or_insert(0) += count;
    }
}

impl HoldingsProvider for InMemoryHoldings {
    fn holdings_count(&self, account: &AccountId) -> u64 {
        self.counts.get(account).copied().unwrap_or(0)
    }
}

/// Mapping from live gen-2 holdings to rare-claim quantity.
///
/// Only two anchor points are confirmed by product: three or more gen-2
/// holdings yield two rare tokens, at least one yields one. The breakpoint
/// is configurable rather than hard-coded so it can move without touching
/// allocation logic.
#[derive(Debug, Clone, Copy)]
pub struct RareClaimSchedule {
    /// Gen-2 count at or above which a claim yields two tokens.
    pub double_claim_threshold: u64,
}

impl Default for RareClaimSchedule {
    fn default() -> Self {
        Self {
            double_claim_threshold: constants::DEFAULT_RARE_DOUBLE_CLAIM_THRESHOLD,
        }
    }
}

impl RareClaimSchedule {
    /// Claim quantity for a snapshot member with `gen2_count` live holdings.
    #[must_use]
    pub fn quantity_for(&self, gen2_count: u64) -> u64 {
        if gen2_count >= self.double_claim_threshold {
            2
        } else if gen2_count >= 1 {
            1
        } else {
            0
        }
    }
}

/// Computes pre-sale and rare-claim entitlements from live upstream holdings.
pub struct EntitlementCalculator<'a> {
    gen1: &'a dyn HoldingsProvider,
    gen2: &'a dyn HoldingsProvider,
    rare_schedule: RareClaimSchedule,
}

impl<'a> EntitlementCalculator<'a> {
    #[must_use]
    pub fn new(gen1: &'a dyn HoldingsProvider, gen2: &'a dyn HoldingsProvider) -> Self {
        Self {
            gen1,
            gen2,
            rare_schedule: RareClaimSchedule::default(),
        }
    }

    #[must_use]
    pub fn with_rare_schedule(mut self, schedule: RareClaimSchedule) -> Self {
        self.rare_schedule = schedule;
        self
    }

    /// Pre-sale entitlement: `3 * gen1 + gen2`, read live at call time.
    ///
    /// # Errors
    /// Returns [`MintgateError::NoEntitlement`] if the computed value is zero.
    pub fn pre_sale_entitlement(&self, account: &AccountId) -> Result<u64> {
        let owed = constants::PRE_SALE_GEN1_WEIGHT * self.gen1.holdings_count(account)
            + constants::PRE_SALE_GEN2_WEIGHT * self.gen2.holdings_count(account);
        if owed == 0 {
            return Err(MintgateError::NoEntitlement(*account));
        }
        Ok(owed)
    }

    /// Rare-claim quantity for a snapshot member, from live gen-2 holdings.
    ///
    /// Snapshot membership itself is a precondition verified by the caller;
    /// this only maps the live count through the claim schedule.
    ///
    /// # Errors
    /// Returns [`MintgateError::NoEntitlement`] if the account holds no
    /// gen-2 tokens at the moment of the call.
    pub fn rare_claim_entitlement(&self, account: &AccountId) -> Result<u64> {
        let quantity = self
            .rare_schedule
            .quantity_for(self.gen2.holdings_count(account));
        if quantity == 0 {
            return Err(MintgateError::NoEntitlement(*account));
        }
        Ok(quantity)
    }
}
