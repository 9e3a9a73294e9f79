//! Error types for veridb

use thiserror::Error;

/// Errors that can occur in veridb operations
#[derive(Error, Debug)]
pub enum Error {
    /// Proof verification error
    #[error("Verification error: {0}")]
    Verification(#[from] veridb_merkle::Error),

    /// Anchor store error
    #[error("Anchor store error: {0}")]
    Anchor(#[from] veridb_anchor::Error),

    /// Types error
    #[error("Types error: {0}")]
    Types(#[from] veridb_types::Error),
}

/// Result type for veridb operations
pub type Result<T> = std::result::Result<T, Error>;
