//! Error types for veridb-types

use thiserror::Error;

/// Errors that can occur constructing core types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid encoding (hex, base64, or digest length)
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type for core type operations
pub type Result<T> = std::result::Result<T, Error>;
