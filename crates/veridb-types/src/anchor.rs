//! Trust anchor type

use serde::{Deserialize, Serialize};

use crate::encoding::Sha256Hash;

/// The last `(root, tree size)` pair accepted for one namespace
///
/// Every future proof for the namespace is validated against this pair until
/// a newer proof verifies and replaces it. `tree_size == 0` is the
/// no-prior-knowledge state: consistency checking is skipped and the next
/// verified proof establishes history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Root digest of the trusted tree
    pub root: Sha256Hash,
    /// Position of the trusted tree
    pub tree_size: u64,
}

impl Anchor {
    /// Create a new anchor
    pub fn new(root: Sha256Hash, tree_size: u64) -> Self {
        Self { root, tree_size }
    }

    /// Whether this anchor carries history a newer tree must extend
    pub fn has_history(&self) -> bool {
        self.tree_size > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_serde_roundtrip() {
        let anchor = Anchor::new(Sha256Hash::from_bytes([7u8; 32]), 42);
        let json = serde_json::to_string(&anchor).unwrap();
        let back: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, anchor);
    }

    #[test]
    fn test_anchor_history() {
        let root = Sha256Hash::from_bytes([0u8; 32]);
        assert!(!Anchor::new(root, 0).has_history());
        assert!(Anchor::new(root, 1).has_history());
    }
}
