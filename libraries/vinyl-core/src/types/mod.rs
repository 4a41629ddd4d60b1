//! Domain types for the Vinyl catalog

mod ids;
mod playlist;
mod search;
mod track;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistState};
pub use search::SearchResults;
pub use track::{CreateTrack, MediaType, Track};
