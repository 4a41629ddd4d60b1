//! File-backed key-value backend over redb

use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use std::path::Path;
use vinyl_core::{KeyValue, Result, VersionedValue, VinylError};

/// Main table: key -> 8-byte big-endian version token followed by the payload
const KV_TABLE: TableDefinition<&str, Vec<u8>> = TableDefinition::new("kv");

/// Meta table carrying the store-wide write counter
const META_TABLE: TableDefinition<&str, u64> = TableDefinition::new("meta");

const WRITE_COUNTER: &str = "writes";

/// Durable `KeyValue` over a single redb file.
///
/// Conditional writes run inside one write transaction, so the version check
/// and the write are atomic; redb serializes write transactions, which is
/// all the per-key serialization the store needs. Version tokens come from
/// a store-wide counter in the meta table and are never reused.
pub struct FileKv {
    db: Database,
}

impl FileKv {
    /// Open (or create) the database at `path`.
    ///
    /// Both tables are created up front so later reads never observe a
    /// missing table.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path).map_err(|e| VinylError::storage(e.to_string()))?;
        let txn = db.begin_write().map_err(|e| VinylError::storage(e.to_string()))?;
        {
            txn.open_table(KV_TABLE)
                .map_err(|e| VinylError::storage(e.to_string()))?;
            txn.open_table(META_TABLE)
                .map_err(|e| VinylError::storage(e.to_string()))?;
        }
        txn.commit().map_err(|e| VinylError::storage(e.to_string()))?;
        Ok(Self { db })
    }
}

fn encode_value(version: u64, bytes: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(8 + bytes.len());
    raw.extend_from_slice(&version.to_be_bytes());
    raw.extend_from_slice(bytes);
    raw
}

fn decode_value(raw: &[u8]) -> Result<(u64, Vec<u8>)> {
    if raw.len() < 8 {
        return Err(VinylError::storage("corrupt value: missing version prefix"));
    }
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&raw[..8]);
    Ok((u64::from_be_bytes(prefix), raw[8..].to_vec()))
}

/// Bump the write counter inside the caller's transaction.
fn next_version(txn: &WriteTransaction) -> Result<u64> {
    let mut meta = txn
        .open_table(META_TABLE)
        .map_err(|e| VinylError::storage(e.to_string()))?;
    let current = meta
        .get(WRITE_COUNTER)
        .map_err(|e| VinylError::storage(e.to_string()))?
        .map_or(0, |guard| guard.value());
    let next = current + 1;
    meta.insert(WRITE_COUNTER, next)
        .map_err(|e| VinylError::storage(e.to_string()))?;
    Ok(next)
}

#[async_trait]
impl KeyValue for FileKv {
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| VinylError::storage(e.to_string()))?;
        let table = txn
            .open_table(KV_TABLE)
            .map_err(|e| VinylError::storage(e.to_string()))?;
        let Some(guard) = table
            .get(key)
            .map_err(|e| VinylError::storage(e.to_string()))?
        else {
            return Ok(None);
        };
        let (version, bytes) = decode_value(&guard.value())?;
        Ok(Some(VersionedValue { version, bytes }))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| VinylError::storage(e.to_string()))?;
        {
            let version = next_version(&txn)?;
            let mut table = txn
                .open_table(KV_TABLE)
                .map_err(|e| VinylError::storage(e.to_string()))?;
            table
                .insert(key, &encode_value(version, &bytes))
                .map_err(|e| VinylError::storage(e.to_string()))?;
        }
        txn.commit().map_err(|e| VinylError::storage(e.to_string()))?;
        Ok(())
    }

    async fn put_if(&self, key: &str, bytes: Vec<u8>, expected: Option<u64>) -> Result<bool> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| VinylError::storage(e.to_string()))?;
        let applied = {
            let mut table = txn
                .open_table(KV_TABLE)
                .map_err(|e| VinylError::storage(e.to_string()))?;
            let current = match table
                .get(key)
                .map_err(|e| VinylError::storage(e.to_string()))?
            {
                Some(guard) => Some(decode_value(&guard.value())?.0),
                None => None,
            };
            if current == expected {
                let version = next_version(&txn)?;
                table
                    .insert(key, &encode_value(version, &bytes))
                    .map_err(|e| VinylError::storage(e.to_string()))?;
                true
            } else {
                false
            }
        };
        if applied {
            txn.commit().map_err(|e| VinylError::storage(e.to_string()))?;
        } else {
            txn.abort().map_err(|e| VinylError::storage(e.to_string()))?;
        }
        Ok(applied)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| VinylError::storage(e.to_string()))?;
        {
            let mut table = txn
                .open_table(KV_TABLE)
                .map_err(|e| VinylError::storage(e.to_string()))?;
            table
                .remove(key)
                .map_err(|e| VinylError::storage(e.to_string()))?;
        }
        txn.commit().map_err(|e| VinylError::storage(e.to_string()))?;
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| VinylError::storage(e.to_string()))?;
        let table = txn
            .open_table(KV_TABLE)
            .map_err(|e| VinylError::storage(e.to_string()))?;
        let mut keys = Vec::new();
        for entry in table
            .iter()
            .map_err(|e| VinylError::storage(e.to_string()))?
        {
            let (key, _value) = entry.map_err(|e| VinylError::storage(e.to_string()))?;
            let key = key.value();
            if key.starts_with(prefix) {
                keys.push(key.to_string());
            }
        }
        Ok(keys)
    }
}
