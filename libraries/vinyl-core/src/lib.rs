//! Vinyl Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Vinyl Player.
//!
//! This crate provides the foundational building blocks shared by the storage
//! layer and the embedding application (desktop UI, server routes).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `PlaylistState`, ID newtypes
//! - **Core Traits**: `KeyValue` (the backing-store capability) and
//!   `Catalog` (the surface route handlers consume)
//! - **Error Handling**: Unified `VinylError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::types::{CreateTrack, MediaType, TrackId};
//!
//! let input = CreateTrack {
//!     title: "Night Drive".to_string(),
//!     artist: "The Wavelengths".to_string(),
//!     album: "Signals".to_string(),
//!     duration: "3:42".to_string(),
//!     cover_art_url: "/covers/signals.jpg".to_string(),
//!     media_url: "/media/night-drive.mp3".to_string(),
//!     media_type: MediaType::Audio,
//! };
//! let track = input.into_track(TrackId::generate());
//! assert_eq!(track.media_type, MediaType::Audio);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod kv;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Result, VinylError};
pub use kv::{KeyValue, KvHandle, VersionedValue};

// Export all types
pub use types::{
    CreatePlaylist, CreateTrack, MediaType, Playlist, PlaylistId, PlaylistState, SearchResults,
    Track, TrackId, UserId,
};
