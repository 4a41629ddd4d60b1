//! In-memory key-value backend

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use vinyl_core::{KeyValue, Result, VersionedValue, VinylError};

/// In-memory `KeyValue` backed by a mutex-guarded map.
///
/// Version tokens come from a store-wide write counter, so a version is
/// never reused for a key even across delete/recreate.
#[derive(Debug, Default)]
pub struct MemoryKv {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, (u64, Vec<u8>)>,
    writes: u64,
}

impl Inner {
    fn next_version(&mut self) -> u64 {
        self.writes += 1;
        self.writes
    }
}

impl MemoryKv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| VinylError::storage("memory store lock poisoned"))
    }
}

#[async_trait]
impl KeyValue for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>> {
        let inner = self.lock()?;
        Ok(inner.entries.get(key).map(|(version, bytes)| VersionedValue {
            version: *version,
            bytes: bytes.clone(),
        }))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let mut inner = self.lock()?;
        let version = inner.next_version();
        inner.entries.insert(key.to_string(), (version, bytes));
        Ok(())
    }

    async fn put_if(&self, key: &str, bytes: Vec<u8>, expected: Option<u64>) -> Result<bool> {
        let mut inner = self.lock()?;
        let current = inner.entries.get(key).map(|(version, _)| *version);
        if current != expected {
            return Ok(false);
        }
        let version = inner.next_version();
        inner.entries.insert(key.to_string(), (version, bytes));
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner.entries.remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let inner = self.lock()?;
        Ok(inner
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
