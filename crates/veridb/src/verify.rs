//! Verified read/write confirmation
//!
//! The [`LogVerifier`] spans a client session: it owns the trust anchors for
//! every namespace the session touches and confirms server responses against
//! them, one verify-then-advance step per response.

use veridb_anchor::AnchorStore;
use veridb_merkle::verify_entry;
use veridb_types::{Anchor, Entry, Proof};

use crate::error::Result;

/// Session-scoped verifier owning the trust anchors for every namespace the
/// client touches
///
/// Cloning is cheap and clones share the anchor store, so one verifier can be
/// handed to concurrent tasks. Within a single namespace, callers should keep
/// one verify-then-advance in flight at a time; the store refuses updates that
/// would regress the trusted tree size either way.
#[derive(Debug, Clone, Default)]
pub struct LogVerifier {
    store: AnchorStore,
}

impl LogVerifier {
    /// Create a verifier with an empty anchor store
    pub fn new() -> Self {
        Self {
            store: AnchorStore::new(),
        }
    }

    /// Wrap an existing store, e.g. one restored from disk
    pub fn with_store(store: AnchorStore) -> Self {
        Self { store }
    }

    /// The underlying anchor store
    pub fn store(&self) -> &AnchorStore {
        &self.store
    }

    /// Install a server-fetched anchor for a namespace not seen before
    ///
    /// The bootstrap anchor is the one trust step taken on faith; every later
    /// anchor must prove itself through [`confirm`](Self::confirm).
    pub async fn bootstrap(&self, namespace: impl Into<String>, anchor: Anchor) {
        self.store.set(namespace, anchor).await;
    }

    /// Check a server response for `namespace` and, when it verifies, advance
    /// the trusted anchor
    ///
    /// Returns the anchor derived from the proof. On any verification failure
    /// the store is left untouched and the entry must not be treated as
    /// durable.
    pub async fn confirm(&self, namespace: &str, entry: &Entry, proof: &Proof) -> Result<Anchor> {
        let anchor = self.store.get(namespace).await;
        let next = verify_entry(entry, proof, anchor.as_ref())?;

        if self.store.advance(namespace, next).await {
            tracing::debug!(
                "advanced anchor for {} to position {} ({})",
                namespace,
                next.tree_size,
                next.root
            );
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use veridb_merkle::{entry_digest, node_digest};
    use veridb_types::Sha256Hash;

    fn corrupt(hash: &Sha256Hash) -> Sha256Hash {
        let mut bytes = *hash.as_bytes();
        bytes[31] ^= 0x01;
        Sha256Hash::from_bytes(bytes)
    }

    #[tokio::test]
    async fn test_confirm_bootstraps_and_advances() {
        let verifier = LogVerifier::new();

        let e0 = Entry::new(0, "k", "v1");
        let l0 = entry_digest(&e0);
        let first = Proof {
            leaf: l0,
            root: l0,
            at: 0,
            index: 0,
            inclusion_path: vec![],
            consistency_path: vec![],
        };
        let anchor0 = verifier.confirm("defaultdb", &e0, &first).await.unwrap();
        assert_eq!(verifier.store().get("defaultdb").await, Some(anchor0));

        let e1 = Entry::new(1, "k", "v2");
        let l1 = entry_digest(&e1);
        let root1 = node_digest(&l0, &l1);
        let second = Proof {
            leaf: l1,
            root: root1,
            at: 1,
            index: 1,
            inclusion_path: vec![l0],
            consistency_path: vec![],
        };
        let anchor1 = verifier.confirm("defaultdb", &e1, &second).await.unwrap();
        assert_eq!(anchor1, Anchor::new(root1, 1));
        assert_eq!(verifier.store().get("defaultdb").await, Some(anchor1));
    }

    #[tokio::test]
    async fn test_failed_confirm_leaves_the_anchor_alone() {
        let verifier = LogVerifier::new();

        let e0 = Entry::new(0, "k", "v1");
        let l0 = entry_digest(&e0);
        let first = Proof {
            leaf: l0,
            root: l0,
            at: 0,
            index: 0,
            inclusion_path: vec![],
            consistency_path: vec![],
        };
        let anchor0 = verifier.confirm("defaultdb", &e0, &first).await.unwrap();

        let e1 = Entry::new(1, "k", "v2");
        let l1 = entry_digest(&e1);
        let root1 = node_digest(&l0, &l1);
        let tampered = Proof {
            leaf: l1,
            root: corrupt(&root1),
            at: 1,
            index: 1,
            inclusion_path: vec![l0],
            consistency_path: vec![],
        };
        let result = verifier.confirm("defaultdb", &e1, &tampered).await;
        assert!(matches!(
            result,
            Err(Error::Verification(veridb_merkle::Error::InclusionMismatch(_)))
        ));
        assert_eq!(verifier.store().get("defaultdb").await, Some(anchor0));
    }

    #[tokio::test]
    async fn test_confirm_rejects_a_misreported_entry() {
        let verifier = LogVerifier::new();

        let e0 = Entry::new(0, "k", "v1");
        let lied = Entry::new(0, "k", "something else");
        let l0 = entry_digest(&e0);
        let proof = Proof {
            leaf: l0,
            root: l0,
            at: 0,
            index: 0,
            inclusion_path: vec![],
            consistency_path: vec![],
        };
        let result = verifier.confirm("defaultdb", &lied, &proof).await;
        assert!(matches!(
            result,
            Err(Error::Verification(veridb_merkle::Error::LeafMismatch { .. }))
        ));
        assert!(verifier.store().get("defaultdb").await.is_none());
    }

    #[tokio::test]
    async fn test_namespaces_do_not_share_anchors() {
        let verifier = LogVerifier::new();
        let e0 = Entry::new(0, "k", "v");
        let l0 = entry_digest(&e0);
        let proof = Proof {
            leaf: l0,
            root: l0,
            at: 0,
            index: 0,
            inclusion_path: vec![],
            consistency_path: vec![],
        };

        verifier.confirm("db-a", &e0, &proof).await.unwrap();
        assert!(verifier.store().get("db-b").await.is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_installs_prior_history() {
        let verifier = LogVerifier::new();

        // Anchor fetched out-of-band: a two-entry tree the client trusts.
        let e0 = Entry::new(0, "k0", "v0");
        let e1 = Entry::new(1, "k1", "v1");
        let (l0, l1) = (entry_digest(&e0), entry_digest(&e1));
        let root1 = node_digest(&l0, &l1);
        verifier.bootstrap("defaultdb", Anchor::new(root1, 1)).await;

        // The next confirmed write must extend that tree.
        let e2 = Entry::new(2, "k2", "v2");
        let l2 = entry_digest(&e2);
        let root2 = node_digest(&root1, &l2);
        let proof = Proof {
            leaf: l2,
            root: root2,
            at: 2,
            index: 2,
            inclusion_path: vec![root1],
            consistency_path: vec![l2],
        };
        let anchor = verifier.confirm("defaultdb", &e2, &proof).await.unwrap();
        assert_eq!(anchor, Anchor::new(root2, 2));
    }
}
