//! Vinyl Player Storage
//!
//! Entity-and-index persistence layer for the Vinyl media catalog.
//!
//! This crate stores tracks, playlists, and per-user liked sets on top of an
//! abstract key-value capability (`vinyl_core::KeyValue`). There is no query
//! language and no cross-entity transaction: every record lives under one
//! key, every collection of ids lives in one index key, and concurrent
//! writers to the same key are serialized with optimistic compare-and-swap.
//!
//! # Architecture
//!
//! - **Entity machinery**: a typed record slot per `(entity, id)` key with
//!   create/read/mutate, plus a companion index enumerating all ids of a kind
//! - **Vertical Slicing**: each domain feature (tracks, playlists, likes)
//!   owns its own operations over the machinery
//! - **Hydration**: playlists persist track *references* and are expanded to
//!   full records on the read side
//! - **Seeding**: a cold store is populated once, safely under concurrent
//!   first access
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_core::types::UserId;
//! use vinyl_storage::{open_store, CatalogContext};
//!
//! # async fn example() -> vinyl_core::Result<()> {
//! // Open (or create) the catalog database
//! let kv = open_store("vinyl.redb")?;
//!
//! // Seed on first open, then serve the default user
//! let catalog = CatalogContext::open(kv, UserId::default()).await?;
//! # let _ = catalog;
//! # Ok(())
//! # }
//! ```

mod context;

// Key-value backends
pub mod kv;

// Entity machinery
pub mod entity;
pub mod index;

// Vertical slices
pub mod likes;
pub mod playlists;
pub mod tracks;

// First-run data
pub mod seed;

pub use context::CatalogContext;
pub use entity::{Entity, EntityKind};
pub use index::Index;
pub use kv::{FileKv, MemoryKv};

use std::path::Path;
use std::sync::Arc;
use vinyl_core::{KvHandle, Result};

/// Open (or create) a file-backed store and return a shared handle to it.
pub fn open_store(path: impl AsRef<Path>) -> Result<KvHandle> {
    Ok(Arc::new(FileKv::open(path)?))
}

/// Shared handle to a fresh in-memory store, for tests and ephemeral use.
pub fn memory_store() -> KvHandle {
    Arc::new(MemoryKv::new())
}
