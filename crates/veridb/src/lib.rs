//! Client-side verification for an append-only, cryptographically provable log
//!
//! This is the main entry point for the veridb verification core. It ties the
//! pure proof verifiers to the per-namespace trust anchor store: every server
//! response is checked against the last anchor the client accepted, and only
//! a response that verifies moves the anchor forward.
//!
//! The transport that talks to the server, decodes its wire format, and hands
//! the decoded [`Entry`]/[`Proof`] pair to this crate is deliberately out of
//! scope.

pub mod error;
pub mod verify;

// Re-export core crates
pub use veridb_anchor as anchor;
pub use veridb_merkle as merkle;
pub use veridb_types as types;

pub use error::{Error, Result};
pub use verify::LogVerifier;

pub use veridb_anchor::AnchorStore;
pub use veridb_merkle::{verify_consistency, verify_entry, verify_inclusion};
pub use veridb_types::{Anchor, Entry, Proof, Sha256Hash};
