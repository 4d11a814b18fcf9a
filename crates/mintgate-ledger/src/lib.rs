//! # mintgate-ledger
//!
//! **Allocation state for the Mintgate issuance engine.**
//!
//! Three components, all consumed by the orchestrator in `mintgate-engine`:
//!
//! - [`SupplyLedger`]: per-band cursors and the collection cap; the sole
//!   authority on which token number gets issued next
//! - [`EntitlementCalculator`]: how many tokens an account is owed, computed
//!   from live upstream holdings behind the [`HoldingsProvider`] seam
//! - [`PhaseController`]: pause flag, per-phase sale configuration, and the
//!   allowlist gate

pub mod entitlement;
pub mod phase;
pub mod supply;

pub use entitlement::{EntitlementCalculator, HoldingsProvider, InMemoryHoldings, RareClaimSchedule};
pub use phase::PhaseController;
pub use supply::SupplyLedger;
