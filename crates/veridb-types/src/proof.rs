//! Server-supplied proof material

use crate::encoding::Sha256Hash;

/// Evidence returned by the server for one read or write
///
/// A proof is transient: it is checked once against the current trust anchor
/// and then discarded. Only the `(root, at)` pair of a proof that verified
/// survives, as the next anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// The server's claimed digest of the entry being confirmed
    pub leaf: Sha256Hash,
    /// The server's claimed root of the tree the proof was generated against
    pub root: Sha256Hash,
    /// Tree position the proof was generated at
    pub at: u64,
    /// Append index of the entry being confirmed
    pub index: u64,
    /// Sibling digests from the leaf up to the root, in order
    pub inclusion_path: Vec<Sha256Hash>,
    /// Witness digests linking the previously trusted root to `root`
    pub consistency_path: Vec<Sha256Hash>,
}
