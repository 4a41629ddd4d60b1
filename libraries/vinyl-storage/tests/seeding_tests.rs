//! Integration tests for first-run seeding
//!
//! Seeding is the load-bearing guarantee of the store: an empty catalog is
//! populated exactly once, even when several callers race on a cold store,
//! and an already-populated store is never touched.


use std::sync::Arc;
use test_helpers::*;
use vinyl_core::types::*;
use vinyl_core::Catalog;
use vinyl_storage::tracks::TrackKind;
use vinyl_storage::{entity, open_store, playlists, seed, tracks, CatalogContext};

#[tokio::test]
async fn test_seed_populates_empty_store() {
    let store = TestStore::new();
    let kv = store.kv();

    seed::ensure_seeded(kv).await.expect("Failed to seed");

    let all_tracks = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all_tracks.len(), seed::default_tracks().len());

    let all_playlists = playlists::get_all(kv).await.expect("Failed to list playlists");
    assert_eq!(all_playlists.len(), seed::default_playlists().len());

    // Every seeded playlist reference resolves
    for state in all_playlists {
        let expected = state.track_ids.len();
        let hydrated = playlists::hydrate(kv, state).await.expect("Failed to hydrate");
        assert_eq!(hydrated.tracks.len(), expected);
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = TestStore::new();
    let kv = store.kv();

    seed::ensure_seeded(kv).await.expect("Failed to seed");
    seed::ensure_seeded(kv).await.expect("Failed to re-seed");

    let all_tracks = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all_tracks.len(), seed::default_tracks().len());
}

#[tokio::test]
async fn test_seed_does_not_touch_a_populated_store() {
    let store = TestStore::new();
    let kv = store.kv();

    create_test_track(kv, "Already Here", "Someone").await;
    seed::ensure_seeded(kv).await.expect("Failed to seed");

    let all_tracks = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all_tracks.len(), 1);
    assert_eq!(all_tracks[0].title, "Already Here");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_seeding_seeds_once() {
    let store = TestStore::new();
    let kv = store.kv();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let kv = kv.clone();
        handles.push(tokio::spawn(async move { seed::ensure_seeded(&kv).await }));
    }
    for handle in handles {
        handle
            .await
            .expect("Seeding task panicked")
            .expect("Seeding failed");
    }

    let all_tracks = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all_tracks.len(), seed::default_tracks().len());

    let all_playlists = playlists::get_all(kv).await.expect("Failed to list playlists");
    assert_eq!(all_playlists.len(), seed::default_playlists().len());
}

#[tokio::test]
async fn test_custom_seed_dataset() {
    let store = TestStore::new();
    let kv = store.kv();

    let custom = vec![
        track_input("Own Data", "Own Artist").into_track(TrackId::new("custom-1")),
    ];
    entity::ensure_seed::<TrackKind>(kv, &custom)
        .await
        .expect("Failed to seed");

    // The built-in dataset now finds a non-empty index and stays out
    entity::ensure_seed::<TrackKind>(kv, &seed::default_tracks())
        .await
        .expect("Failed to re-seed");

    let all_tracks = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all_tracks.len(), 1);
    assert_eq!(all_tracks[0].title, "Own Data");
}

#[tokio::test]
async fn test_open_seeds_and_data_survives_reopen() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.redb");

    let liked = TrackId::new("track-neon-skyline");
    {
        let kv = open_store(&path).expect("Failed to open store");
        let catalog = CatalogContext::open(kv, UserId::default())
            .await
            .expect("Failed to open catalog");

        assert_eq!(
            catalog.get_all_tracks().await.expect("Query failed").len(),
            seed::default_tracks().len()
        );
        catalog.like_track(&liked).await.expect("Failed to like");
    }

    // Reopen the same file: seeded data and likes are still there
    let kv = open_store(&path).expect("Failed to reopen store");
    let catalog = CatalogContext::open(Arc::clone(&kv), UserId::default())
        .await
        .expect("Failed to reopen catalog");

    assert_eq!(
        catalog.get_all_tracks().await.expect("Query failed").len(),
        seed::default_tracks().len()
    );
    assert_eq!(
        catalog.liked_track_ids().await.expect("Query failed"),
        vec![liked]
    );
}
