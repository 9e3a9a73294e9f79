//! Proof verification
//!
//! Implements the audit-path walk for inclusion proofs and the two-root
//! reconstruction for consistency proofs, matching the server's history tree.
//! Both are plain loops over integer cursors, so arbitrarily deep trees cost
//! no stack.

use veridb_types::{Anchor, Entry, Proof};

use crate::error::{Error, Result};
use crate::tree::{entry_digest, is_power_of_two, node_digest};

/// Verify that the proof's leaf sits at `proof.index` in the tree at position
/// `proof.at`
///
/// Walks the audit path from the leaf upward, recombining with each sibling,
/// and accepts only if the walk lands exactly on `proof.root`.
pub fn verify_inclusion(proof: &Proof) -> Result<()> {
    let mut index = proof.index;
    let mut at = proof.at;

    if index > at {
        return Err(Error::InclusionMismatch(format!(
            "entry index {} exceeds tree position {}",
            index, at
        )));
    }
    if at > 0 && proof.inclusion_path.is_empty() {
        return Err(Error::InclusionMismatch(
            "empty audit path for a non-trivial tree".to_string(),
        ));
    }

    let mut current = proof.leaf;
    for sibling in &proof.inclusion_path {
        // The rightmost node on a level may be an unpaired carry rather than
        // a true sibling; it stays the right-hand child all the way up.
        if index % 2 == 0 && index != at {
            current = node_digest(&current, sibling);
        } else {
            current = node_digest(sibling, &current);
        }
        index /= 2;
        at /= 2;
    }

    if index != at {
        return Err(Error::InclusionMismatch(
            "audit path does not reach the root level".to_string(),
        ));
    }
    if current != proof.root {
        return Err(Error::InclusionMismatch(format!(
            "recomputed root {} does not match claimed root {}",
            current, proof.root
        )));
    }

    Ok(())
}

/// Verify that the tree claimed by `proof` is an append-only extension of the
/// previously accepted `anchor`
///
/// Reconstructs both the trusted root and the claimed root from one shared
/// witness path. Success proves no entry covered by the anchor was altered or
/// removed. Callers invoke this only when the anchor carries history
/// (`anchor.tree_size > 0`).
pub fn verify_consistency(proof: &Proof, anchor: &Anchor) -> Result<()> {
    // Identical trees need no evidence.
    if anchor.tree_size == proof.at
        && anchor.root == proof.root
        && proof.consistency_path.is_empty()
    {
        return Ok(());
    }

    if anchor.tree_size >= proof.at {
        return Err(Error::ConsistencyMismatch(format!(
            "claimed tree position {} does not extend trusted position {}",
            proof.at, anchor.tree_size
        )));
    }
    if proof.consistency_path.is_empty() {
        return Err(Error::ConsistencyMismatch(
            "empty consistency path for a grown tree".to_string(),
        ));
    }

    // When the trusted tree is a complete subtree, its root doubles as the
    // first witness; otherwise the server must supply that witness itself.
    let mut hashes = Vec::with_capacity(proof.consistency_path.len() + 1);
    if is_power_of_two(anchor.tree_size + 1) {
        hashes.push(anchor.root);
    }
    hashes.extend_from_slice(&proof.consistency_path);

    let mut old_pos = anchor.tree_size;
    let mut new_pos = proof.at;

    // Trailing unpaired nodes shared by both trees play no part in the walk.
    while old_pos % 2 == 1 {
        old_pos >>= 1;
        new_pos >>= 1;
    }

    let mut old_root = hashes[0];
    let mut new_root = hashes[0];

    for step in &hashes[1..] {
        if new_pos == 0 {
            return Err(Error::ConsistencyMismatch(
                "consistency path longer than the claimed tree".to_string(),
            ));
        }

        if old_pos % 2 == 1 || old_pos == new_pos {
            // This level exists in both trees: the witness extends the old
            // root and the new root alike.
            old_root = node_digest(step, &old_root);
            new_root = node_digest(step, &new_root);
            while old_pos % 2 == 0 && old_pos != 0 {
                old_pos >>= 1;
                new_pos >>= 1;
            }
        } else {
            // Right-hand growth beyond the old tree touches only the new root.
            new_root = node_digest(&new_root, step);
        }

        old_pos >>= 1;
        new_pos >>= 1;
    }

    if old_root != anchor.root {
        return Err(Error::ConsistencyMismatch(format!(
            "recomputed trusted root {} does not match anchor root {}",
            old_root, anchor.root
        )));
    }
    if new_root != proof.root {
        return Err(Error::ConsistencyMismatch(format!(
            "recomputed root {} does not match claimed root {}",
            new_root, proof.root
        )));
    }
    if new_pos != 0 {
        return Err(Error::ConsistencyMismatch(
            "consistency path ends before the root level".to_string(),
        ));
    }

    Ok(())
}

/// Verify a server response end to end
///
/// Recomputes the entry's leaf digest and compares it with the proof's claim,
/// verifies inclusion, and, when the anchor carries history, verifies
/// consistency between the anchored tree and the claimed one. On success
/// returns the anchor the caller should trust from now on.
pub fn verify_entry(entry: &Entry, proof: &Proof, anchor: Option<&Anchor>) -> Result<Anchor> {
    let leaf = entry_digest(entry);
    if leaf != proof.leaf {
        return Err(Error::LeafMismatch {
            expected: proof.leaf.to_hex(),
            actual: leaf.to_hex(),
        });
    }

    verify_inclusion(proof)?;

    if let Some(anchor) = anchor {
        if anchor.has_history() {
            verify_consistency(proof, anchor)?;
        }
    }

    Ok(Anchor::new(proof.root, proof.at))
}
