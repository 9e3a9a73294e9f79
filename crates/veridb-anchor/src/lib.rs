//! Trust anchor storage for veridb clients
//!
//! Keeps the last verified `(root, tree size)` pair per namespace and makes
//! the whole mapping durable across restarts as a versioned blob. The store
//! is the client's single source of truth for anchors: proofs are always
//! checked against what the store holds, never against material carried by
//! the response under test.
//!
//! # Example
//!
//! ```
//! use veridb_anchor::AnchorStore;
//! use veridb_types::{Anchor, Sha256Hash};
//!
//! # async fn example() -> Result<(), veridb_anchor::Error> {
//! let store = AnchorStore::new();
//!
//! // Bootstrap a namespace with a server-fetched anchor.
//! store.set("defaultdb", Anchor::new(Sha256Hash::from_bytes([0u8; 32]), 0)).await;
//!
//! // Export the mapping for persistence, reload it later.
//! let blob = store.to_bytes().await?;
//! store.load_bytes(&blob).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub use error::{Error, Result};
pub use store::{default_state_path, AnchorStore};
