//! Log entry type

/// A single record in the append-only log
///
/// Immutable once created: the server may only ever append new entries at
/// increasing indices, never rewrite one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Append position of the record (0-based)
    pub index: u64,
    /// Raw key bytes
    pub key: Vec<u8>,
    /// Raw value bytes
    pub value: Vec<u8>,
}

impl Entry {
    /// Create a new entry
    pub fn new(index: u64, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            index,
            key: key.into(),
            value: value.into(),
        }
    }
}
