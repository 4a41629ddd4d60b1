//! Named persisted id collections
//!
//! An index is an ordered list of distinct string ids stored as a JSON
//! array under a single key. The entity machinery keeps one index per
//! entity kind ("tracks", "playlists"); user likes are a free-standing
//! index per user. Membership changes are read-modify-write loops under
//! compare-and-swap, so two writers racing on the same index never lose
//! each other's update.

use crate::entity::CAS_ATTEMPTS;
use tracing::debug;
use vinyl_core::{KeyValue, KvHandle, Result, VinylError};

/// A named, durably-persisted collection of string ids.
pub struct Index {
    kv: KvHandle,
    key: String,
}

impl Index {
    /// Handle to the index stored under `name`.
    pub fn new(kv: KvHandle, name: impl Into<String>) -> Self {
        Self {
            kv,
            key: name.into(),
        }
    }

    /// The index key
    pub fn name(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Option<(u64, Vec<String>)>> {
        match self.kv.get(&self.key).await? {
            Some(value) => {
                let ids: Vec<String> = serde_json::from_slice(&value.bytes)?;
                Ok(Some((value.version, ids)))
            }
            None => Ok(None),
        }
    }

    /// Current members, in insertion order. Empty if never written.
    pub async fn list(&self) -> Result<Vec<String>> {
        Ok(self.load().await?.map(|(_, ids)| ids).unwrap_or_default())
    }

    /// Insert `id` if absent. Inserting a member id again is a no-op.
    pub async fn add(&self, id: &str) -> Result<()> {
        for attempt in 0..CAS_ATTEMPTS {
            let (expected, mut ids) = match self.load().await? {
                Some((version, ids)) => (Some(version), ids),
                None => (None, Vec::new()),
            };
            if ids.iter().any(|member| member == id) {
                return Ok(());
            }
            ids.push(id.to_string());
            let bytes = serde_json::to_vec(&ids)?;
            if self.kv.put_if(&self.key, bytes, expected).await? {
                return Ok(());
            }
            debug!(index = %self.key, id, attempt, "concurrent index write, retrying add");
        }
        Err(VinylError::conflict(format!(
            "index {}: too many concurrent writes",
            self.key
        )))
    }

    /// Remove `id` if present. Removing a non-member id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        for attempt in 0..CAS_ATTEMPTS {
            let Some((version, mut ids)) = self.load().await? else {
                return Ok(());
            };
            let before = ids.len();
            ids.retain(|member| member != id);
            if ids.len() == before {
                return Ok(());
            }
            let bytes = serde_json::to_vec(&ids)?;
            if self.kv.put_if(&self.key, bytes, Some(version)).await? {
                return Ok(());
            }
            debug!(index = %self.key, id, attempt, "concurrent index write, retrying remove");
        }
        Err(VinylError::conflict(format!(
            "index {}: too many concurrent writes",
            self.key
        )))
    }
}
