//! Playlist vertical slice
//!
//! Playlists persist track *references* (`trackIds`); the read side expands
//! them into full records via [`hydrate`]. Membership changes go through the
//! entity machinery's atomic `mutate`, so concurrent adds and removes on the
//! same playlist never lose updates.

use crate::entity::{self, Entity, EntityKind};
use crate::tracks::TrackKind;
use futures::future::join_all;
use tracing::warn;
use vinyl_core::types::{CreatePlaylist, Playlist, PlaylistId, PlaylistState, Track, TrackId};
use vinyl_core::{KvHandle, Result, VinylError};

/// Entity kind for catalog playlists (stored form)
pub struct PlaylistKind;

impl EntityKind for PlaylistKind {
    type State = PlaylistState;
    const ENTITY: &'static str = "playlist";
    const INDEX: &'static str = "playlists";

    fn id(state: &PlaylistState) -> &str {
        state.id.as_str()
    }
}

/// Create a new, empty playlist under a freshly generated id
pub async fn create(kv: &KvHandle, input: CreatePlaylist) -> Result<PlaylistState> {
    if input.title.trim().is_empty() {
        return Err(VinylError::validation("playlist title is required"));
    }

    let state = input.into_state(PlaylistId::generate());
    entity::create::<PlaylistKind>(kv, &state).await?;
    Ok(state)
}

/// Get playlist by ID (stored form)
pub async fn get_by_id(kv: &KvHandle, id: &PlaylistId) -> Result<Option<PlaylistState>> {
    Entity::<PlaylistKind>::new(kv.clone(), id.as_str())
        .try_state()
        .await
}

/// Get all playlists (stored form), in creation order
pub async fn get_all(kv: &KvHandle) -> Result<Vec<PlaylistState>> {
    entity::list::<PlaylistKind>(kv).await
}

/// Append a track to a playlist.
///
/// Membership is set-like: adding a track that is already in the playlist
/// leaves the data unchanged. The track id is not checked against the track
/// catalog; hydration tolerates ids that never resolve.
pub async fn add_track(
    kv: &KvHandle,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<PlaylistState> {
    Entity::<PlaylistKind>::new(kv.clone(), playlist_id.as_str())
        .mutate(|mut state| {
            if !state.contains(track_id) {
                state.track_ids.push(track_id.clone());
            }
            state
        })
        .await
}

/// Remove a track from a playlist. Removing an absent id is a no-op.
pub async fn remove_track(
    kv: &KvHandle,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<PlaylistState> {
    Entity::<PlaylistKind>::new(kv.clone(), playlist_id.as_str())
        .mutate(|mut state| {
            state.track_ids.retain(|member| member != track_id);
            state
        })
        .await
}

/// Expand a stored playlist into the API-facing shape.
///
/// Every referenced track is fetched in parallel and the playlist order is
/// preserved. Ids that no longer resolve are dropped from the result rather
/// than surfaced as errors; storage faults still propagate.
pub async fn hydrate(kv: &KvHandle, state: PlaylistState) -> Result<Playlist> {
    let fetches = state.track_ids.iter().map(|id| {
        let entity = Entity::<TrackKind>::new(kv.clone(), id.as_str());
        async move { entity.try_state().await }
    });
    let fetched = join_all(fetches)
        .await
        .into_iter()
        .collect::<Result<Vec<Option<Track>>>>()?;

    let mut tracks = Vec::with_capacity(fetched.len());
    for (id, track) in state.track_ids.iter().zip(fetched) {
        match track {
            Some(track) => tracks.push(track),
            None => warn!(playlist = %state.id, track = %id, "dropping dangling track reference"),
        }
    }

    Ok(Playlist {
        id: state.id,
        title: state.title,
        description: state.description,
        cover_art_url: state.cover_art_url,
        tracks,
    })
}

/// Search playlists by query string (case-insensitive over title and
/// description), returning the stored form
pub async fn search(kv: &KvHandle, query: &str) -> Result<Vec<PlaylistState>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let playlists = get_all(kv).await?;
    Ok(playlists
        .into_iter()
        .filter(|playlist| {
            playlist.title.to_lowercase().contains(&needle)
                || playlist.description.to_lowercase().contains(&needle)
        })
        .collect())
}
