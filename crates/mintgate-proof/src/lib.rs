//! # mintgate-proof
//!
//! **Merkle allowlist machinery for Mintgate.**
//!
//! Allowlists are committed as a single Merkle root rather than stored
//! explicitly. This crate holds both halves of the scheme:
//!
//! - [`verify`] / [`leaf_hash`]: the stateless membership check the engine
//!   runs against a committed root
//! - [`MerkleTree`]: the off-engine construction that produces roots and
//!   proofs, bit-for-bit compatible with the verifier
//!
//! The pairing hash is **commutative**: the two operands are sorted
//! lexicographically before hashing, so proofs carry no left/right position
//! information. Verification that folds pairs in any other order is a
//! silent compatibility break, not an alternative scheme.

pub mod tree;
pub mod verifier;

pub use tree::MerkleTree;
pub use verifier::{leaf_hash, pair_hash, verify};
