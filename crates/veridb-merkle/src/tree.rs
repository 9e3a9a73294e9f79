//! History tree hashing
//!
//! Leaf and internal node digests are domain-separated by a fixed prefix byte
//! (0x00 for leaves, 0x01 for nodes) so the two can never collide, the
//! standard transparency-log defense against proof forgery.

use sha2::{Digest, Sha256};
use veridb_types::{Entry, Sha256Hash};

/// Prefix for leaf digests
pub const LEAF_HASH_PREFIX: u8 = 0x00;

/// Prefix for internal node digests
pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Digest size in bytes (SHA-256)
pub const HASH_SIZE: usize = 32;

/// Digest a log entry as a leaf
///
/// Returns `SHA256(0x00 || index_be || len(key)_be || key || value)`. The key
/// carries an explicit 8-byte big-endian length so the key/value boundary is
/// unambiguous; the value runs to the end of the buffer.
pub fn entry_digest(entry: &Entry) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_HASH_PREFIX]);
    hasher.update(entry.index.to_be_bytes());
    hasher.update((entry.key.len() as u64).to_be_bytes());
    hasher.update(&entry.key);
    hasher.update(&entry.value);
    Sha256Hash::from_bytes(hasher.finalize().into())
}

/// Digest two child nodes into their parent
///
/// Returns `SHA256(0x01 || left || right)`; the order of the children matters.
pub fn node_digest(left: &Sha256Hash, right: &Sha256Hash) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_HASH_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Sha256Hash::from_bytes(hasher.finalize().into())
}

/// Whether `n` is a power of two. Zero is not.
pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}
