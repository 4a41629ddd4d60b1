/// Catalog search result types
use crate::types::{Playlist, Track};
use serde::{Deserialize, Serialize};

/// Combined result of a catalog search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Tracks whose title or artist matched
    pub tracks: Vec<Track>,

    /// Playlists whose title or description matched, hydrated
    pub playlists: Vec<Playlist>,
}

impl SearchResults {
    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.playlists.is_empty()
    }
}
