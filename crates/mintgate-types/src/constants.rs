//! System-wide constants for the Mintgate issuance engine.

/// Lowest token number in the collection. Token 0 is never issued.
pub const TOKEN_NUMBER_LOWER: u64 = 1;

/// Default upper bound of the giveaway band (inclusive).
pub const DEFAULT_GIVEAWAY_UPPER: u64 = 100;

/// Default upper bound of the rare band (inclusive).
pub const DEFAULT_RARE_UPPER: u64 = 250;

/// Default total collection size.
pub const DEFAULT_COLLECTION_SIZE: u64 = 10_000;

/// Default per-account cap for the special-event phase.
pub const DEFAULT_SPECIAL_EVENT_CAP: u32 = 2;

/// Gen-2 holdings count at which a rare claim yields two tokens
/// instead of one.
pub const DEFAULT_RARE_DOUBLE_CLAIM_THRESHOLD: u64 = 3;

/// Pre-sale entitlement weight per gen-1 holding.
pub const PRE_SALE_GEN1_WEIGHT: u64 = 3;

/// Pre-sale entitlement weight per gen-2 holding.
pub const PRE_SALE_GEN2_WEIGHT: u64 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Mintgate";
