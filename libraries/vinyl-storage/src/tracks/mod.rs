//! Track vertical slice
//!
//! Tracks are created once and read forever: there is no update or delete
//! operation on the catalog surface.

use crate::entity::{self, Entity, EntityKind};
use vinyl_core::types::{CreateTrack, Track, TrackId};
use vinyl_core::{KvHandle, Result, VinylError};

/// Entity kind for catalog tracks
pub struct TrackKind;

impl EntityKind for TrackKind {
    type State = Track;
    const ENTITY: &'static str = "track";
    const INDEX: &'static str = "tracks";

    fn id(state: &Track) -> &str {
        state.id.as_str()
    }
}

/// Create a new track under a freshly generated id
pub async fn create(kv: &KvHandle, input: CreateTrack) -> Result<Track> {
    if input.title.trim().is_empty() {
        return Err(VinylError::validation("track title is required"));
    }
    if input.artist.trim().is_empty() {
        return Err(VinylError::validation("track artist is required"));
    }
    if input.media_url.trim().is_empty() {
        return Err(VinylError::validation("track media URL is required"));
    }

    let track = input.into_track(TrackId::generate());
    entity::create::<TrackKind>(kv, &track).await?;
    Ok(track)
}

/// Get track by ID
pub async fn get_by_id(kv: &KvHandle, id: &TrackId) -> Result<Option<Track>> {
    Entity::<TrackKind>::new(kv.clone(), id.as_str())
        .try_state()
        .await
}

/// Get all tracks, in creation order
pub async fn get_all(kv: &KvHandle) -> Result<Vec<Track>> {
    entity::list::<TrackKind>(kv).await
}

/// Search tracks by query string (case-insensitive over title and artist)
pub async fn search(kv: &KvHandle, query: &str) -> Result<Vec<Track>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let tracks = get_all(kv).await?;
    Ok(tracks
        .into_iter()
        .filter(|track| {
            track.title.to_lowercase().contains(&needle)
                || track.artist.to_lowercase().contains(&needle)
        })
        .collect())
}
