//! Per-user liked-track sets
//!
//! A like is pure index membership: one index per user, holding liked track
//! ids, with no record materialized beyond that. Order is not significant
//! to callers.

use crate::index::Index;
use vinyl_core::types::{TrackId, UserId};
use vinyl_core::{KvHandle, Result};

/// The likes index for one user, stored under `"user-likes:<userId>"`.
pub fn user_likes(kv: &KvHandle, user_id: &UserId) -> Index {
    Index::new(kv.clone(), format!("user-likes:{user_id}"))
}

/// The user's liked track ids
pub async fn list(kv: &KvHandle, user_id: &UserId) -> Result<Vec<TrackId>> {
    let ids = user_likes(kv, user_id).list().await?;
    Ok(ids.into_iter().map(TrackId::new).collect())
}

/// Like a track; liking twice is a no-op
pub async fn add(kv: &KvHandle, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    user_likes(kv, user_id).add(track_id.as_str()).await
}

/// Remove a like; removing an absent like is a no-op
pub async fn remove(kv: &KvHandle, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    user_likes(kv, user_id).remove(track_id.as_str()).await
}
