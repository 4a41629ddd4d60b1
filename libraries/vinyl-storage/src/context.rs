use crate::{likes, playlists, seed, tracks};
use async_trait::async_trait;
use futures::future::join_all;
use vinyl_core::catalog::Catalog;
use vinyl_core::types::{
    CreatePlaylist, CreateTrack, Playlist, PlaylistId, PlaylistState, SearchResults, Track,
    TrackId, UserId,
};
use vinyl_core::{KvHandle, Result};

/// Catalog context over a key-value backing store
pub struct CatalogContext {
    kv: KvHandle,
    user_id: UserId,
}

impl CatalogContext {
    /// Open a catalog for `user_id`, seeding the built-in data if the store
    /// is empty.
    ///
    /// This is the one-time initialization step: call it at process or
    /// session start. Concurrent opens of the same cold store are safe and
    /// seed exactly once.
    pub async fn open(kv: KvHandle, user_id: UserId) -> Result<Self> {
        seed::ensure_seeded(&kv).await?;
        Ok(Self { kv, user_id })
    }

    /// Wrap an already-populated store without seeding.
    pub fn new(kv: KvHandle, user_id: UserId) -> Self {
        Self { kv, user_id }
    }

    /// The backing store handle
    pub fn kv(&self) -> &KvHandle {
        &self.kv
    }

    async fn hydrate_all(&self, states: Vec<PlaylistState>) -> Result<Vec<Playlist>> {
        join_all(
            states
                .into_iter()
                .map(|state| playlists::hydrate(&self.kv, state)),
        )
        .await
        .into_iter()
        .collect()
    }
}

#[async_trait]
impl Catalog for CatalogContext {
    fn user_id(&self) -> UserId {
        self.user_id.clone()
    }

    // Tracks
    async fn get_all_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_all(&self.kv).await
    }

    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&self.kv, id).await
    }

    async fn create_track(&self, track: CreateTrack) -> Result<Track> {
        tracks::create(&self.kv, track).await
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        tracks::search(&self.kv, query).await
    }

    // Playlists
    async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        let states = playlists::get_all(&self.kv).await?;
        self.hydrate_all(states).await
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        match playlists::get_by_id(&self.kv, id).await? {
            Some(state) => Ok(Some(playlists::hydrate(&self.kv, state).await?)),
            None => Ok(None),
        }
    }

    async fn get_playlist_state(&self, id: &PlaylistId) -> Result<Option<PlaylistState>> {
        playlists::get_by_id(&self.kv, id).await
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        let state = playlists::create(&self.kv, playlist).await?;
        playlists::hydrate(&self.kv, state).await
    }

    async fn add_track_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Playlist> {
        let state = playlists::add_track(&self.kv, playlist_id, track_id).await?;
        playlists::hydrate(&self.kv, state).await
    }

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Playlist> {
        let state = playlists::remove_track(&self.kv, playlist_id, track_id).await?;
        playlists::hydrate(&self.kv, state).await
    }

    // Likes
    async fn liked_track_ids(&self) -> Result<Vec<TrackId>> {
        likes::list(&self.kv, &self.user_id).await
    }

    async fn like_track(&self, id: &TrackId) -> Result<()> {
        likes::add(&self.kv, &self.user_id, id).await
    }

    async fn unlike_track(&self, id: &TrackId) -> Result<()> {
        likes::remove(&self.kv, &self.user_id, id).await
    }

    // Search
    async fn search(&self, query: &str) -> Result<SearchResults> {
        let matched_tracks = tracks::search(&self.kv, query).await?;
        let matched_playlists = playlists::search(&self.kv, query).await?;
        Ok(SearchResults {
            tracks: matched_tracks,
            playlists: self.hydrate_all(matched_playlists).await?,
        })
    }
}
