//! History tree verification for veridb
//!
//! This crate implements the client side of the server's append-only history
//! tree: leaf and node digests with domain-separating prefixes, inclusion
//! proof verification, and consistency proof verification between two tree
//! states.

pub mod error;
pub mod proof;
pub mod tree;

pub use error::{Error, Result};
pub use proof::{verify_consistency, verify_entry, verify_inclusion};
pub use tree::{
    entry_digest, is_power_of_two, node_digest, HASH_SIZE, LEAF_HASH_PREFIX, NODE_HASH_PREFIX,
};
