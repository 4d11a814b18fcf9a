//! Supply ledger — banded token-number allocation.
//!
//! Each band keeps one monotonically increasing cursor. `allocate` is the
//! engine's central correctness property: the capacity check and the cursor
//! advance happen inside a single `&mut self` call, so no two allocations
//! can observe the same remaining capacity and both succeed. Cursors never
//! move backwards and never pass their band's upper bound.

use mintgate_types::{BandId, CollectionConfig, MintgateError, Result, TokenId, constants};
use tracing::warn;

/// One contiguous sub-range of token numbers reserved for an issuance mode.
#[derive(Debug, Clone, Copy)]
struct BandWindow {
    /// Inclusive lower bound.
    lower: u64,
    /// Inclusive upper bound.
    upper: u64,
    /// Last token number issued from this band; starts at `lower - 1`.
    cursor: u64,
}

impl BandWindow {
    fn new(lower: u64, upper: u64) -> Self {
        Self {
            lower,
            upper,
            cursor: lower - 1,
        }
    }

    fn remaining(&self) -> u64 {
        self.upper - self.cursor
    }
}

/// Tracks the next unissued token number per band and enforces the
/// collection-size cap.
#[derive(Debug)]
pub struct SupplyLedger {
    giveaway: BandWindow,
    rare: BandWindow,
    regular: BandWindow,
    collection_size: u64,
    total_issued: u64,
}

impl SupplyLedger {
    /// Create a ledger with the given band layout.
    ///
    /// # Errors
    /// Returns `Configuration` if the layout does not partition the
    /// identifier space.
    pub fn new(config: &CollectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            giveaway: BandWindow::new(constants::TOKEN_NUMBER_LOWER, config.giveaway_upper),
            rare: BandWindow::new(config.giveaway_upper + 1, config.rare_upper),
            regular: BandWindow::new(config.rare_upper + 1, config.collection_size),
            collection_size: config.collection_size,
            total_issued: 0,
        })
    }

    fn band(&self, band: BandId) -> &BandWindow {
        match band {
            BandId::Giveaway => &self.giveaway,
            BandId::Rare => &self.rare,
            BandId::Regular => &self.regular,
        }
    }

    /// Allocate `quantity` consecutive token numbers from `band`.
    ///
    /// Check-then-advance is one indivisible step: on any failure the
    /// cursor is untouched; on success it advances by exactly `quantity`
    /// and the newly issued ids are returned in ascending order.
    ///
    /// # Errors
    /// Returns [`MintgateError::CapacityExceeded`] if the band's remaining
    /// capacity is below `quantity`, or if the allocation would push the
    /// cumulative issued count past the collection size.
    pub fn allocate(&mut self, band: BandId, quantity: u64) -> Result<Vec<TokenId>> {
        let remaining = self.band(band).remaining();
        if quantity > remaining {
            return Err(MintgateError::CapacityExceeded {
                band,
                requested: quantity,
                remaining,
            });
        }
        if self.total_issued + quantity > self.collection_size {
            return Err(MintgateError::CapacityExceeded {
                band,
                requested: quantity,
                remaining: self.collection_size - self.total_issued,
            });
        }

        let window = match band {
            BandId::Giveaway => &mut self.giveaway,
            BandId::Rare => &mut self.rare,
            BandId::Regular => &mut self.regular,
        };
        let first = window.cursor + 1;
        window.cursor += quantity;
        self.total_issued += quantity;

        Ok((first..=window.cursor).map(TokenId).collect())
    }

    /// Remaining capacity of a band.
    #[must_use]
    pub fn remaining(&self, band: BandId) -> u64 {
        self.band(band).remaining()
    }

    /// Cumulative count of issued token numbers across all bands.
    #[must_use]
    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    /// The current collection size.
    #[must_use]
    pub fn collection_size(&self) -> u64 {
        self.collection_size
    }

    /// Resize the collection. Only the regular band's upper bound moves.
    ///
    /// # Errors
    /// Returns `Configuration` if the new size would shrink the regular
    /// band below its already-advanced cursor or below the rare band.
    pub fn set_collection_size(&mut self, new_size: u64) -> Result<()> {
        if new_size <= self.rare.upper || new_size < self.regular.cursor {
            warn!(new_size, cursor = self.regular.cursor, "collection resize rejected");
            return Err(MintgateError::Configuration(format!(
                "collection size {new_size} below issued cursor {} or rare band upper {}",
                self.regular.cursor, self.rare.upper,
            )));
        }
        self.collection_size = new_size;
        self.regular.upper = new_size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> SupplyLedger {
        SupplyLedger::new(&CollectionConfig::default()).unwrap()
    }

    #[test]
    fn bands_start_at_their_lower_bounds() {
        let mut ledger = ledger();
        assert_eq!(ledger.allocate(BandId::Giveaway, 1).unwrap(), [TokenId(1)]);
        assert_eq!(ledger.allocate(BandId::Rare, 1).unwrap(), [TokenId(101)]);
        assert_eq!(ledger.allocate(BandId::Regular, 1).unwrap(), [TokenId(251)]);
        assert_eq!(ledger.total_issued(), 3);
    }

    #[test]
    fn allocations_are_ascending_and_unique() {
        let mut ledger = ledger();
        let mut seen = std::collections::HashSet::new();
        let mut all = Vec::new();
        for _ in 0..10 {
            all.extend(ledger.allocate(BandId::Regular, 7).unwrap());
        }
        for window in all.windows(2) {
            assert!(window[0] < window[1], "ids must be ascending");
        }
        for id in &all {
            assert!(seen.insert(*id), "duplicate id {id}");
        }
    }

    #[test]
    fn rare_band_exhausts_exactly() {
        let mut ledger = ledger();
        let ids = ledger.allocate(BandId::Rare, 150).unwrap();
        assert_eq!(ids.first(), Some(&TokenId(101)));
        assert_eq!(ids.last(), Some(&TokenId(250)));
        assert_eq!(ledger.remaining(BandId::Rare), 0);

        let err = ledger.allocate(BandId::Rare, 1).unwrap_err();
        assert!(matches!(
            err,
            MintgateError::CapacityExceeded {
                band: BandId::Rare,
                requested: 1,
                remaining: 0,
            }
        ));
    }

    #[test]
    fn failed_allocation_leaves_cursor_untouched() {
        let mut ledger = ledger();
        ledger.allocate(BandId::Giveaway, 99).unwrap();
        assert!(ledger.allocate(BandId::Giveaway, 2).is_err());
        // The one remaining giveaway number is still available.
        assert_eq!(
            ledger.allocate(BandId::Giveaway, 1).unwrap(),
            [TokenId(100)]
        );
    }

    #[test]
    fn band_containment_holds() {
        let mut ledger = ledger();
        for id in ledger.allocate(BandId::Giveaway, 100).unwrap() {
            assert!((1..=100).contains(&id.value()));
        }
        for id in ledger.allocate(BandId::Rare, 150).unwrap() {
            assert!((101..=250).contains(&id.value()));
        }
        for id in ledger.allocate(BandId::Regular, 500).unwrap() {
            assert!((251..=10_000).contains(&id.value()));
        }
    }

    #[test]
    fn zero_quantity_is_a_no_op() {
        let mut ledger = ledger();
        assert!(ledger.allocate(BandId::Regular, 0).unwrap().is_empty());
        assert_eq!(ledger.total_issued(), 0);
    }

    #[test]
    fn collection_size_cannot_shrink_below_cursor() {
        let mut ledger = ledger();
        ledger.allocate(BandId::Regular, 1_000).unwrap(); // cursor at 1250
        assert!(ledger.set_collection_size(1_200).is_err());
        ledger.set_collection_size(1_300).unwrap();
        assert_eq!(ledger.collection_size(), 1_300);
        assert_eq!(ledger.remaining(BandId::Regular), 50);
    }

    #[test]
    fn collection_size_cannot_shrink_into_rare_band() {
        let mut ledger = ledger();
        assert!(ledger.set_collection_size(250).is_err());
        assert!(ledger.set_collection_size(251).is_ok());
    }

    #[test]
    fn resize_respects_new_cap() {
        let mut ledger = ledger();
        ledger.set_collection_size(260).unwrap();
        ledger.allocate(BandId::Regular, 9).unwrap();
        assert!(ledger.allocate(BandId::Regular, 2).is_err());
        ledger.allocate(BandId::Regular, 1).unwrap();
        assert_eq!(ledger.remaining(BandId::Regular), 0);
    }
}
