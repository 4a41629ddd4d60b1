//! Catalog trait: the surface route handlers consume

use crate::error::Result;
use crate::types::{
    CreatePlaylist, CreateTrack, Playlist, PlaylistId, PlaylistState, SearchResults, Track,
    TrackId, UserId,
};
use async_trait::async_trait;

/// Catalog context providing access to the media catalog
///
/// This trait abstracts the store so route handlers and UI commands never
/// touch the backing key-value capability directly. Playlist reads come
/// back hydrated (full `Track` records in playlist order); the stored
/// reference form is available where callers need it.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Get the current user ID
    fn user_id(&self) -> UserId;

    // ========================================================================
    // Tracks
    // ========================================================================

    /// Get all tracks, in creation order
    async fn get_all_tracks(&self) -> Result<Vec<Track>>;

    /// Get track by ID
    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Create a new track
    async fn create_track(&self, track: CreateTrack) -> Result<Track>;

    /// Search tracks by query string (matches title and artist)
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get all playlists, hydrated, in creation order
    async fn get_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get playlist by ID, hydrated
    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Get the stored (reference) form of a playlist
    async fn get_playlist_state(&self, id: &PlaylistId) -> Result<Option<PlaylistState>>;

    /// Create a new playlist
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Add a track to a playlist; adding a member track again is a no-op
    async fn add_track_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Playlist>;

    /// Remove a track from a playlist; removing a non-member is a no-op
    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Playlist>;

    // ========================================================================
    // Likes
    // ========================================================================

    /// Get the current user's liked track ids
    async fn liked_track_ids(&self) -> Result<Vec<TrackId>>;

    /// Like a track; liking twice is a no-op
    async fn like_track(&self, id: &TrackId) -> Result<()>;

    /// Remove a like; removing an absent like is a no-op
    async fn unlike_track(&self, id: &TrackId) -> Result<()>;

    // ========================================================================
    // Search
    // ========================================================================

    /// Search tracks and playlists in one pass
    async fn search(&self, query: &str) -> Result<SearchResults>;
}
