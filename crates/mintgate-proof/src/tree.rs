//! Allowlist Merkle tree construction.
//!
//! This is the off-engine half of the scheme: operators build the tree from
//! the list of eligible accounts, commit only the root on the engine, and
//! hand each account its proof path. Pairs are combined with the same
//! commutative [`pair_hash`] the verifier folds with; an odd trailing node
//! is promoted to the next level unhashed.

use mintgate_types::{AccountId, Hash32};

use crate::verifier::{leaf_hash, pair_hash};

/// A Merkle tree over hashed account identifiers.
///
/// Layers are stored bottom-up: `layers[0]` is the leaf layer, the last
/// layer holds the single root.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash32>>,
}

impl MerkleTree {
    /// Build a tree over the given accounts, in the order provided.
    #[must_use]
    pub fn build(accounts: &[AccountId]) -> Self {
        let leaves: Vec<Hash32> = accounts.iter().map(leaf_hash).collect();
        let mut layers = vec![leaves];

        while layers.last().is_some_and(|layer| layer.len() > 1) {
            let current = layers.last().expect("loop guard ensures a layer");
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [a, b] => next.push(pair_hash(a, b)),
                    // Odd trailing node carries up unhashed.
                    [single] => next.push(*single),
                    _ => unreachable!("chunks(2) yields 1 or 2 elements"),
                }
            }
            layers.push(next);
        }
        Self { layers }
    }

    /// The committed root. An empty tree commits to the all-zero hash,
    /// which no proof can satisfy.
    #[must_use]
    pub fn root(&self) -> Hash32 {
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or([0u8; 32])
    }

    /// The root as lowercase hex, the form operators publish and commit.
    #[must_use]
    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }

    /// Number of leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// Proof path for `account`, or `None` if it is not a leaf.
    ///
    /// The path lists sibling hashes bottom-up, ready for the verifier's
    /// left-to-right fold.
    #[must_use]
    pub fn proof_for(&self, account: &AccountId) -> Option<Vec<Hash32>> {
        let target = leaf_hash(account);
        let mut index = self.layers.first()?.iter().position(|h| *h == target)?;

        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len().saturating_sub(1)] {
            let sibling = index ^ 1;
            if let Some(hash) = layer.get(sibling) {
                proof.push(*hash);
            }
            index /= 2;
        }
        Some(proof)
    }
}
