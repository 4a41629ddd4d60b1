//! Typed entity machinery
//!
//! Every domain record lives in one key-value slot addressed by
//! `"<entity>:<id>"`, with a companion index enumerating all ids of the
//! kind. `EntityKind` fixes the schema per kind at compile time; there is
//! no runtime shape inspection.
//!
//! Writes that depend on what was read (`mutate`, index membership) go
//! through bounded optimistic retry: re-read, apply a pure function,
//! compare-and-swap, surface `Conflict` once the attempts run out. Creating
//! an entity writes the record first and its index entry second, in that
//! fixed order; a crash in between leaves an unindexed record, which the
//! read side tolerates.

use crate::index::Index;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, warn};
use vinyl_core::{KeyValue, KvHandle, Result, VinylError};

/// Attempt bound shared by every optimistic read-modify-write loop.
pub(crate) const CAS_ATTEMPTS: usize = 8;

/// One persisted entity kind: key namespace, companion index, state shape.
pub trait EntityKind: Send + Sync + 'static {
    /// The record stored for this kind
    type State: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Key namespace, e.g. `"track"`
    const ENTITY: &'static str;

    /// Companion index name, e.g. `"tracks"`
    const INDEX: &'static str;

    /// The id carried inside a record; must equal the addressing id
    fn id(state: &Self::State) -> &str;
}

/// Storage key for one record of kind `K`.
fn storage_key<K: EntityKind>(id: &str) -> String {
    format!("{}:{}", K::ENTITY, id)
}

/// Handle to one `(entity, id)` slot.
pub struct Entity<K: EntityKind> {
    kv: KvHandle,
    id: String,
    _kind: PhantomData<K>,
}

impl<K: EntityKind> Entity<K> {
    /// Handle for the record with `id`. Does not touch the store.
    pub fn new(kv: KvHandle, id: impl Into<String>) -> Self {
        Self {
            kv,
            id: id.into(),
            _kind: PhantomData,
        }
    }

    /// The addressing id
    pub fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> String {
        storage_key::<K>(&self.id)
    }

    async fn load(&self) -> Result<Option<(u64, K::State)>> {
        match self.kv.get(&self.key()).await? {
            Some(value) => Ok(Some((value.version, serde_json::from_slice(&value.bytes)?))),
            None => Ok(None),
        }
    }

    /// True if the slot has ever been written (and not deleted)
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.kv.get(&self.key()).await?.is_some())
    }

    /// Current record. `NotFound` if the slot has never been written;
    /// callers that expect absence should use [`try_state`](Self::try_state)
    /// or check [`exists`](Self::exists) first.
    pub async fn state(&self) -> Result<K::State> {
        self.try_state()
            .await?
            .ok_or_else(|| VinylError::not_found(K::ENTITY, &self.id))
    }

    /// Current record, or `None` if the slot is empty
    pub async fn try_state(&self) -> Result<Option<K::State>> {
        Ok(self.load().await?.map(|(_, state)| state))
    }

    /// Unconditional overwrite. The record's id must match the handle's.
    pub async fn put(&self, state: &K::State) -> Result<()> {
        if K::id(state) != self.id {
            return Err(VinylError::validation(format!(
                "{} id mismatch: record {} stored under {}",
                K::ENTITY,
                K::id(state),
                self.id
            )));
        }
        let bytes = serde_json::to_vec(state)?;
        self.kv.put(&self.key(), bytes).await
    }

    /// Delete the record. The companion index is not touched.
    pub async fn delete(&self) -> Result<()> {
        self.kv.delete(&self.key()).await
    }

    /// Atomic read-modify-write.
    ///
    /// `f` must be a pure function of the current record: it may run more
    /// than once when writers race. After the attempt bound is exhausted
    /// the call fails with `Conflict`; `NotFound` if the record does not
    /// exist.
    pub async fn mutate<F>(&self, f: F) -> Result<K::State>
    where
        F: Fn(K::State) -> K::State + Send + Sync,
    {
        for attempt in 0..CAS_ATTEMPTS {
            let (version, current) = self
                .load()
                .await?
                .ok_or_else(|| VinylError::not_found(K::ENTITY, &self.id))?;
            let next = f(current);
            if K::id(&next) != self.id {
                return Err(VinylError::validation(format!(
                    "{} mutation changed id {} to {}",
                    K::ENTITY,
                    self.id,
                    K::id(&next)
                )));
            }
            let bytes = serde_json::to_vec(&next)?;
            if self.kv.put_if(&self.key(), bytes, Some(version)).await? {
                return Ok(next);
            }
            debug!(entity = K::ENTITY, id = %self.id, attempt, "concurrent write detected, retrying mutate");
        }
        Err(VinylError::conflict(format!(
            "{} {}: too many concurrent writes",
            K::ENTITY,
            self.id
        )))
    }
}

/// Companion index for kind `K`.
pub fn kind_index<K: EntityKind>(kv: &KvHandle) -> Index {
    Index::new(kv.clone(), K::INDEX)
}

/// Write a new record and register it in the kind's index.
///
/// Fails with `Conflict` if a record with that id already exists; the
/// stored value is left untouched. Ids are expected to be caller-generated
/// UUIDs, so a conflict normally means a duplicated request.
pub async fn create<K: EntityKind>(kv: &KvHandle, state: &K::State) -> Result<()> {
    let id = K::id(state);
    if id.is_empty() {
        return Err(VinylError::validation(format!("{} id is required", K::ENTITY)));
    }
    let bytes = serde_json::to_vec(state)?;
    if !kv.put_if(&storage_key::<K>(id), bytes, None).await? {
        return Err(VinylError::conflict(format!(
            "{} already exists: {}",
            K::ENTITY,
            id
        )));
    }
    kind_index::<K>(kv).add(id).await
}

/// All records of kind `K`, in creation order.
///
/// Reads the index, then every referenced record in parallel. Ids that no
/// longer resolve are skipped; the listing is best-effort by design.
pub async fn list<K: EntityKind>(kv: &KvHandle) -> Result<Vec<K::State>> {
    let ids = kind_index::<K>(kv).list().await?;
    let fetches = ids.iter().map(|id| {
        let entity = Entity::<K>::new(kv.clone(), id.clone());
        async move { entity.try_state().await }
    });
    let fetched = join_all(fetches)
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let mut items = Vec::with_capacity(fetched.len());
    for (id, state) in ids.iter().zip(fetched) {
        match state {
            Some(state) => items.push(state),
            None => warn!(entity = K::ENTITY, id = %id, "indexed record missing, skipping"),
        }
    }
    Ok(items)
}

/// Populate an empty store with `seed` records, once.
///
/// A no-op whenever the kind's index is non-empty. Safe under concurrent
/// first access: a racer that loses a per-record create observes `Conflict`
/// and moves on; every other error propagates.
pub async fn ensure_seed<K: EntityKind>(kv: &KvHandle, seed: &[K::State]) -> Result<()> {
    if !kind_index::<K>(kv).list().await?.is_empty() {
        return Ok(());
    }
    debug!(entity = K::ENTITY, records = seed.len(), "seeding empty store");
    for record in seed {
        match create::<K>(kv, record).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
