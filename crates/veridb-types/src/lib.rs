//! Core types and data structures for the veridb verified-log client
//!
//! This crate provides the fundamental data structures shared by the verifier
//! and the trust anchor store: log entries, server-supplied proof material,
//! trust anchors, and a type-safe SHA-256 digest wrapper.

pub mod anchor;
pub mod encoding;
pub mod entry;
pub mod error;
pub mod proof;

pub use anchor::Anchor;
pub use encoding::Sha256Hash;
pub use entry::Entry;
pub use error::{Error, Result};
pub use proof::Proof;
