//! Error types for the Mintgate issuance engine.
//!
//! All errors use the `MG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Authorization / phase errors
//! - 2xx: Proof errors
//! - 3xx: Per-account guard errors
//! - 4xx: Entitlement errors
//! - 5xx: Payment errors
//! - 6xx: Supply errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AccountId, BandId};

/// Central error enum for all Mintgate operations.
///
/// Every failure is terminal for its call: no variant is retried internally
/// and none leaves partial state behind.
#[derive(Debug, Error)]
pub enum MintgateError {
    // =================================================================
    // Authorization / Phase Errors (1xx)
    // =================================================================
    /// The caller lacks the administrator role required for this operation.
    #[error("MG_ERR_100: Unauthorized caller: {0}")]
    Unauthorized(AccountId),

    /// The engine is paused or the requested phase is not open.
    #[error("MG_ERR_101: Phase closed: {reason}")]
    PhaseClosed { reason: String },

    // =================================================================
    // Proof Errors (2xx)
    // =================================================================
    /// The Merkle membership proof did not fold to the committed root.
    #[error("MG_ERR_200: Allowlist proof invalid for {0}")]
    InvalidProof(AccountId),

    // =================================================================
    // Per-Account Guard Errors (3xx)
    // =================================================================
    /// The account has already consumed its pre-sale mint.
    #[error("MG_ERR_300: Account already pre-minted: {0}")]
    AlreadyMinted(AccountId),

    /// The account has already consumed its rare-pool claim.
    #[error("MG_ERR_301: Account already claimed rare tokens: {0}")]
    AlreadyClaimed(AccountId),

    /// The mint would push the account past its per-account cap.
    #[error("MG_ERR_302: Per-account cap exceeded: cap {cap}, would reach {attempted}")]
    AccountCapExceeded { cap: u32, attempted: u32 },

    // =================================================================
    // Entitlement Errors (4xx)
    // =================================================================
    /// The computed entitlement for this account is zero.
    #[error("MG_ERR_400: No entitlement for account {0}")]
    NoEntitlement(AccountId),

    // =================================================================
    // Payment Errors (5xx)
    // =================================================================
    /// The presented payment does not equal the required amount exactly.
    #[error("MG_ERR_500: Insufficient payment: required {required}, presented {presented}")]
    InsufficientPayment {
        required: Decimal,
        presented: Decimal,
    },

    // =================================================================
    // Supply Errors (6xx)
    // =================================================================
    /// The allocation would overrun the band or the collection cap.
    #[error("MG_ERR_600: Capacity exceeded in {band} band: requested {requested}, remaining {remaining}")]
    CapacityExceeded {
        band: BandId,
        requested: u64,
        remaining: u64,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid band layout, bad setter value, etc.).
    #[error("MG_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Unrecoverable internal error (custody invariant breach, etc.).
    #[error("MG_ERR_901: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MintgateError>;
