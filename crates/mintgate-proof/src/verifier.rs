//! Stateless Merkle membership verification.
//!
//! The verifier owns no state: given a committed root, a claimed account,
//! and an ordered proof path, it decides membership and nothing else.

use mintgate_types::{AccountId, Hash32};
use sha2::{Digest, Sha256};

/// Hash an account identifier into its leaf position.
#[must_use]
pub fn leaf_hash(account: &AccountId) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(account.as_bytes());
    hasher.finalize().into()
}

/// Commutative pairing hash: sorts the operands lexicographically before
/// hashing, so `pair_hash(a, b) == pair_hash(b, a)`.
#[must_use]
pub fn pair_hash(a: &Hash32, b: &Hash32) -> Hash32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// Verify that `account` is a member of the allowlist committed to by `root`.
///
/// Folds the proof left-to-right from the account's leaf hash. An empty
/// proof accepts only for a single-leaf tree, where the root is the leaf
/// hash itself.
#[must_use]
pub fn verify(root: &Hash32, account: &AccountId, proof: &[Hash32]) -> bool {
    let mut running = leaf_hash(account);
    for element in proof {
        running = pair_hash(&running, element);
    }
    running == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    #[test]
    fn pair_hash_is_commutative() {
        let a = leaf_hash(&acct(1));
        let b = leaf_hash(&acct(2));
        assert_eq!(pair_hash(&a, &b), pair_hash(&b, &a));
    }

    #[test]
    fn pair_hash_differs_from_operands() {
        let a = leaf_hash(&acct(1));
        let b = leaf_hash(&acct(2));
        let p = pair_hash(&a, &b);
        assert_ne!(p, a);
        assert_ne!(p, b);
    }

    #[test]
    fn empty_proof_single_leaf_tree() {
        let member = acct(7);
        let root = leaf_hash(&member);
        assert!(verify(&root, &member, &[]));
    }

    #[test]
    fn empty_proof_fails_for_non_member() {
        let root = leaf_hash(&acct(7));
        assert!(!verify(&root, &acct(8), &[]));
    }

    #[test]
    fn two_leaf_tree_verifies_both_sides() {
        let alice = acct(1);
        let bob = acct(2);
        let root = pair_hash(&leaf_hash(&alice), &leaf_hash(&bob));

        // Each member's proof is the sibling's leaf hash.
        assert!(verify(&root, &alice, &[leaf_hash(&bob)]));
        assert!(verify(&root, &bob, &[leaf_hash(&alice)]));
    }

    #[test]
    fn proof_for_x_fails_for_y() {
        let alice = acct(1);
        let bob = acct(2);
        let eve = acct(3);
        let root = pair_hash(&leaf_hash(&alice), &leaf_hash(&bob));
        let alice_proof = [leaf_hash(&bob)];

        assert!(verify(&root, &alice, &alice_proof));
        assert!(!verify(&root, &eve, &alice_proof));
    }

    #[test]
    fn empty_proof_fails_against_multi_leaf_root() {
        let root = pair_hash(&leaf_hash(&acct(1)), &leaf_hash(&acct(2)));
        assert!(!verify(&root, &acct(1), &[]));
    }

    #[test]
    fn leaf_hash_is_deterministic() {
        assert_eq!(leaf_hash(&acct(9)), leaf_hash(&acct(9)));
        assert_ne!(leaf_hash(&acct(9)), leaf_hash(&acct(10)));
    }
}
