//! Error types for veridb-merkle

use thiserror::Error;

/// Errors that can occur while verifying a server response
///
/// Every variant is terminal for the operation that produced the proof: the
/// entry must not be treated as durable and the trust anchor must not move.
#[derive(Error, Debug)]
pub enum Error {
    /// Recomputed leaf digest does not match the proof's claimed leaf digest
    #[error("Leaf digest mismatch: expected {expected}, got {actual}")]
    LeafMismatch { expected: String, actual: String },

    /// The audit path fails to reconstruct the claimed root, or the
    /// index/position preconditions do not hold
    #[error("Inclusion proof does not verify: {0}")]
    InclusionMismatch(String),

    /// The two-root reconstruction fails, or the claimed tree does not
    /// strictly extend the trusted one
    #[error("Consistency proof does not verify: {0}")]
    ConsistencyMismatch(String),
}

/// Result type for verification operations
pub type Result<T> = std::result::Result<T, Error>;
