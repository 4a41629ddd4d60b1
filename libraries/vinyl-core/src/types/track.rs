/// Track domain types
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Kind of media a track points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Audio-only media
    Audio,
    /// Video media
    Video,
}

impl MediaType {
    /// Convert media type to string for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }

    /// Parse media type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "audio" => Some(MediaType::Audio),
            "video" => Some(MediaType::Video),
            _ => None,
        }
    }
}

/// Catalog track
///
/// Tracks are immutable after creation; the catalog only creates and reads
/// them. The persisted JSON uses camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Display duration, e.g. "3:45" or "1:02:10"
    pub duration: String,

    /// Cover art location
    pub cover_art_url: String,

    /// Playable media location
    pub media_url: String,

    /// Whether the media is audio or video
    pub media_type: MediaType,
}

/// Input for creating a track
///
/// `title`, `artist`, and `media_url` are required; the rest may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    /// Track title (required)
    pub title: String,

    /// Artist name (required)
    pub artist: String,

    /// Album name
    pub album: String,

    /// Display duration
    pub duration: String,

    /// Cover art location
    pub cover_art_url: String,

    /// Playable media location (required)
    pub media_url: String,

    /// Whether the media is audio or video
    pub media_type: MediaType,
}

impl CreateTrack {
    /// Build the stored track under a caller-supplied id
    pub fn into_track(self, id: TrackId) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            album: self.album,
            duration: self.duration,
            cover_art_url: self.cover_art_url,
            media_url: self.media_url,
            media_type: self.media_type,
        }
    }
}
