/// Playlist domain types
use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Stored playlist shape
///
/// The persisted form holds track *references*, not embedded tracks, so a
/// track edit or removal never leaves stale copies inside playlists. The
/// read side expands `track_ids` into full records; see the storage layer's
/// hydration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistState {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Cover art location
    pub cover_art_url: String,

    /// Member tracks, in playlist order, no duplicates
    pub track_ids: Vec<TrackId>,
}

impl PlaylistState {
    /// True if the playlist already contains `track_id`
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.track_ids.contains(track_id)
    }
}

/// Hydrated playlist, the API-facing shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Cover art location
    pub cover_art_url: String,

    /// Member tracks, resolved and in playlist order
    pub tracks: Vec<Track>,
}

/// Input for creating a playlist
///
/// `title` is required; a fresh playlist starts with no tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylist {
    /// Playlist title (required)
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Cover art location
    pub cover_art_url: String,
}

impl CreatePlaylist {
    /// Build the stored playlist under a caller-supplied id
    pub fn into_state(self, id: PlaylistId) -> PlaylistState {
        PlaylistState {
            id,
            title: self.title,
            description: self.description,
            cover_art_url: self.cover_art_url,
            track_ids: Vec::new(),
        }
    }
}
