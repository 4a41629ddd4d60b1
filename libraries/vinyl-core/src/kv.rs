//! Backing-store capability trait
//!
//! The storage layer is written against this abstract key-value surface
//! rather than a concrete database. A backing store maps string keys to
//! opaque byte values and must make each single-key write all-or-nothing;
//! nothing here assumes cross-key transactions.
//!
//! Every stored value carries a version token that changes on each
//! successful write to its key. `put_if` turns that token into an atomic
//! compare-and-swap, which is what the entity machinery builds its
//! optimistic read-modify-write loops on.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A value read from the store together with its version token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    /// Version token for the key at read time. Changes on every write;
    /// never reused for the same key after a delete/recreate.
    pub version: u64,

    /// The stored bytes
    pub bytes: Vec<u8>,
}

/// Abstract durable key-value capability.
///
/// Implementations must serialize writes per key: a `put_if` observes the
/// key's current version and applies its write atomically with the check.
#[async_trait]
pub trait KeyValue: Send + Sync {
    /// Read a key. `None` if the key has never been written or was deleted.
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>>;

    /// Unconditional overwrite.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Conditional write (compare-and-swap).
    ///
    /// `expected = None` writes only if the key is absent; `Some(v)` writes
    /// only if the key's current version is still `v`. Returns `false` when
    /// the condition does not hold; the store is left unchanged.
    async fn put_if(&self, key: &str, bytes: Vec<u8>, expected: Option<u64>) -> Result<bool>;

    /// Delete a key. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> Result<()>;

    /// List all keys starting with `prefix`, in unspecified order.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Shared handle to a backing store, injected into every storage operation.
pub type KvHandle = Arc<dyn KeyValue>;
