//! Error types for the anchor store

/// Result type for anchor store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during anchor store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The persisted anchor blob cannot be decoded
    #[error("Malformed anchor data: {0}")]
    MalformedAnchorData(String),

    /// I/O error while persisting or restoring anchors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedAnchorData(err.to_string())
    }
}
