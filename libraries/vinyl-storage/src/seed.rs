//! First-run catalog data
//!
//! The built-in catalog a fresh install starts with. Seed records carry
//! fixed ids, so two processes racing to seed the same store create the
//! same records and the loser's conflicts are safely swallowed.

use crate::entity;
use crate::playlists::PlaylistKind;
use crate::tracks::TrackKind;
use vinyl_core::types::{MediaType, PlaylistId, PlaylistState, Track, TrackId};
use vinyl_core::{KvHandle, Result};

fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    media_type: MediaType,
) -> Track {
    let slug = id.trim_start_matches("track-").to_string();
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration: duration.to_string(),
        cover_art_url: format!("/covers/{slug}.jpg"),
        media_url: format!("/media/{slug}.mp3"),
        media_type,
    }
}

/// The built-in track catalog
pub fn default_tracks() -> Vec<Track> {
    vec![
        track("track-neon-skyline", "Neon Skyline", "The Wavelengths", "Signals", "3:42", MediaType::Audio),
        track("track-cobalt-run", "Cobalt Run", "The Wavelengths", "Signals", "5:04", MediaType::Audio),
        track("track-glass-harbor", "Glass Harbor", "Marrow & Pine", "Driftwood", "4:10", MediaType::Audio),
        track("track-low-tide", "Low Tide", "Marrow & Pine", "Driftwood", "3:47", MediaType::Audio),
        track("track-paper-moons", "Paper Moons", "Ada Quinn", "Small Hours", "2:58", MediaType::Audio),
        track("track-night-market", "Night Market", "Ada Quinn", "Small Hours", "4:33", MediaType::Audio),
        track("track-static-bloom", "Static Bloom", "Velvet Arcade", "Afterglow", "3:21", MediaType::Audio),
        track("track-first-light", "First Light (Live)", "Velvet Arcade", "Afterglow", "6:12", MediaType::Video),
    ]
}

/// The built-in playlists, referencing the built-in tracks
pub fn default_playlists() -> Vec<PlaylistState> {
    vec![
        PlaylistState {
            id: PlaylistId::new("playlist-morning-commute"),
            title: "Morning Commute".to_string(),
            description: "Easy starts for early trains".to_string(),
            cover_art_url: "/covers/morning-commute.jpg".to_string(),
            track_ids: vec![
                TrackId::new("track-neon-skyline"),
                TrackId::new("track-paper-moons"),
                TrackId::new("track-low-tide"),
            ],
        },
        PlaylistState {
            id: PlaylistId::new("playlist-late-night-drive"),
            title: "Late Night Drive".to_string(),
            description: "For empty roads after midnight".to_string(),
            cover_art_url: "/covers/late-night-drive.jpg".to_string(),
            track_ids: vec![
                TrackId::new("track-cobalt-run"),
                TrackId::new("track-static-bloom"),
                TrackId::new("track-glass-harbor"),
            ],
        },
        PlaylistState {
            id: PlaylistId::new("playlist-live-sessions"),
            title: "Live Sessions".to_string(),
            description: "Recorded on the floor, mistakes and all".to_string(),
            cover_art_url: "/covers/live-sessions.jpg".to_string(),
            track_ids: vec![
                TrackId::new("track-first-light"),
                TrackId::new("track-night-market"),
            ],
        },
    ]
}

/// Seed tracks and playlists into an empty store.
///
/// Idempotent and safe under concurrent first access; see
/// [`entity::ensure_seed`].
pub async fn ensure_seeded(kv: &KvHandle) -> Result<()> {
    entity::ensure_seed::<TrackKind>(kv, &default_tracks()).await?;
    entity::ensure_seed::<PlaylistKind>(kv, &default_playlists()).await?;
    Ok(())
}
