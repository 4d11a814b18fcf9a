//! # mintgate-types
//!
//! Shared types, errors, and configuration for the **Mintgate** issuance engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`TokenId`], [`BandId`], [`Hash32`]
//! - **Issuance model**: [`IssuanceEvent`], [`IssuanceMode`]
//! - **Account progress**: [`AccountProgress`], [`MintOnce`]
//! - **Configuration**: [`CollectionConfig`], [`PhaseConfig`], [`Phase`]
//! - **Errors**: [`MintgateError`] with `MG_ERR_` prefix codes
//! - **Constants**: band boundaries and system defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod progress;

// Re-export all primary types at crate root for ergonomic imports:
//   use mintgate_types::{AccountId, TokenId, PhaseConfig, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use progress::*;

// Constants are accessed via `mintgate_types::constants::FOO`
// (not re-exported to avoid name collisions).
