//! # mintgate-engine
//!
//! **Mint/claim orchestration for Mintgate.**
//!
//! The [`IssuanceEngine`] is the root of the system: for each public entry
//! point it consults the phase controller for eligibility, the verifier for
//! allowlist proofs, the entitlement calculator for quantity, and the supply
//! ledger for token-number assignment. It has:
//!
//! - **Strict serialization**: every mutating operation takes `&mut self`,
//!   so no two calls can interleave on one collection instance
//! - **All-or-nothing calls**: every check runs before the first mutation;
//!   a failed call advances no counter, consumes no guard, emits no event
//! - **External custody**: ownership storage lives behind [`TokenCustody`];
//!   the engine is the allocation authority, not the token ledger

pub mod custody;
pub mod metadata;
pub mod orchestrator;

pub use custody::{InMemoryCustody, TokenCustody};
pub use metadata::token_uri;
pub use orchestrator::IssuanceEngine;
