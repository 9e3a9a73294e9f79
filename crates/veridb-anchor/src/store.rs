//! Namespace-to-anchor map with versioned persistence

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use veridb_types::Anchor;

use crate::error::{Error, Result};

/// Version of the persisted blob schema, bumped on incompatible changes
const PERSIST_VERSION: u32 = 1;

/// On-disk form of the store
#[derive(Debug, Serialize, Deserialize)]
struct PersistedAnchors {
    /// Schema version of the blob
    version: u32,
    /// When the blob was produced
    saved_at: DateTime<Utc>,
    /// The full namespace-to-anchor mapping
    anchors: HashMap<String, Anchor>,
}

/// Map from namespace to the last verified anchor
///
/// Entries are inserted lazily on first verified access to a namespace and
/// overwritten whole after every successful verification; there is no
/// eviction. Clones share the underlying map, so one store can serve a whole
/// client session across tasks.
#[derive(Debug, Clone, Default)]
pub struct AnchorStore {
    anchors: Arc<RwLock<HashMap<String, Anchor>>>,
}

impl AnchorStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            anchors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Last trusted anchor for `namespace`
    ///
    /// Returns `None` for a namespace never verified before; the caller must
    /// then fetch a bootstrap anchor from the server out-of-band and install
    /// it with [`set`](Self::set).
    pub async fn get(&self, namespace: &str) -> Option<Anchor> {
        self.anchors.read().await.get(namespace).copied()
    }

    /// Insert-or-replace the anchor for `namespace` unconditionally
    pub async fn set(&self, namespace: impl Into<String>, anchor: Anchor) {
        self.anchors.write().await.insert(namespace.into(), anchor);
    }

    /// Replace the anchor for `namespace` unless it would regress the trusted
    /// tree size. Returns whether the update was applied.
    ///
    /// Runs under one write-lock acquisition, so two in-flight verifications
    /// of the same namespace cannot overwrite the newer result with the
    /// staler one.
    pub async fn advance(&self, namespace: impl Into<String>, anchor: Anchor) -> bool {
        let namespace = namespace.into();
        let mut anchors = self.anchors.write().await;
        match anchors.get(&namespace) {
            Some(held) if anchor.tree_size < held.tree_size => {
                tracing::warn!(
                    "not regressing anchor for {}: holding position {}, offered {}",
                    namespace,
                    held.tree_size,
                    anchor.tree_size
                );
                false
            }
            _ => {
                anchors.insert(namespace, anchor);
                true
            }
        }
    }

    /// Number of namespaces with a stored anchor
    pub async fn len(&self) -> usize {
        self.anchors.read().await.len()
    }

    /// Whether the store holds no anchors
    pub async fn is_empty(&self) -> bool {
        self.anchors.read().await.is_empty()
    }

    /// Export the whole mapping as a self-describing blob
    pub async fn to_bytes(&self) -> Result<Vec<u8>> {
        let anchors = self.anchors.read().await.clone();
        let persisted = PersistedAnchors {
            version: PERSIST_VERSION,
            saved_at: Utc::now(),
            anchors,
        };
        Ok(serde_json::to_vec(&persisted)?)
    }

    /// Replace the whole mapping from a blob produced by
    /// [`to_bytes`](Self::to_bytes)
    ///
    /// Fails with [`Error::MalformedAnchorData`] on undecodable input or an
    /// unsupported schema version, leaving the current mapping untouched.
    pub async fn load_bytes(&self, bytes: &[u8]) -> Result<()> {
        let persisted: PersistedAnchors = serde_json::from_slice(bytes)?;
        if persisted.version != PERSIST_VERSION {
            return Err(Error::MalformedAnchorData(format!(
                "unsupported anchor blob version {}",
                persisted.version
            )));
        }
        *self.anchors.write().await = persisted.anchors;
        Ok(())
    }

    /// Write the exported blob to `path`, creating parent directories
    pub async fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes().await?;
        if let Some(parent) = path.as_ref().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path.as_ref(), &bytes).await?;
        Ok(())
    }

    /// Load the mapping from `path`, returning whether a blob was found
    ///
    /// A missing file leaves the store unchanged; a fresh client simply has
    /// no anchors yet.
    pub async fn restore(&self, path: impl AsRef<Path>) -> Result<bool> {
        match tokio::fs::read(path.as_ref()).await {
            Ok(bytes) => {
                self.load_bytes(&bytes).await?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Default location for the persisted anchor blob
///
/// Platform-specific state directory:
/// - Linux: `~/.local/share/veridb/anchors.json`
/// - macOS: `~/Library/Application Support/dev.veridb.veridb/anchors.json`
/// - Windows: `C:\Users\<User>\AppData\Local\veridb\veridb\data\anchors.json`
pub fn default_state_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("dev", "veridb", "veridb")
        .ok_or_else(|| Error::Io("Could not determine state directory".into()))?;
    Ok(project_dirs.data_local_dir().join("anchors.json"))
}
