//! Integration tests for the track vertical slice
//!
//! Tests track creation and reads including:
//! - Create/get round trip and required-field validation
//! - Creation-order listing
//! - Id uniqueness (duplicate create conflicts, original untouched)
//! - Case-insensitive search over title and artist


use test_helpers::*;
use vinyl_core::types::*;
use vinyl_core::VinylError;
use vinyl_storage::{entity, tracks};

#[tokio::test]
async fn test_create_and_get_track() {
    let store = TestStore::new();
    let kv = store.kv();

    let track = tracks::create(kv, track_input("Neon Skyline", "The Wavelengths"))
        .await
        .expect("Failed to create track");

    assert_eq!(track.title, "Neon Skyline");
    assert_eq!(track.artist, "The Wavelengths");
    assert!(!track.id.as_str().is_empty());

    let retrieved = tracks::get_by_id(kv, &track.id)
        .await
        .expect("Failed to get track")
        .expect("Track not found");

    assert_eq!(retrieved, track);
}

#[tokio::test]
async fn test_get_missing_track_returns_none() {
    let store = TestStore::new();

    let missing = tracks::get_by_id(store.kv(), &TrackId::new("ghost"))
        .await
        .expect("Query failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_listing_reflects_creation_order() {
    let store = TestStore::new();
    let kv = store.kv();

    create_test_track(kv, "First", "A").await;
    create_test_track(kv, "Second", "B").await;
    create_test_track(kv, "Third", "C").await;

    let titles: Vec<String> = tracks::get_all(kv)
        .await
        .expect("Failed to list tracks")
        .into_iter()
        .map(|t| t.title)
        .collect();

    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_create_validates_required_fields() {
    let store = TestStore::new();
    let kv = store.kv();

    let mut no_title = track_input("", "Artist");
    no_title.title = "   ".to_string();
    let err = tracks::create(kv, no_title).await.unwrap_err();
    assert!(matches!(err, VinylError::Validation(_)));

    let no_artist = track_input("Title", "");
    let err = tracks::create(kv, no_artist).await.unwrap_err();
    assert!(matches!(err, VinylError::Validation(_)));

    let mut no_media = track_input("Title", "Artist");
    no_media.media_url = String::new();
    let err = tracks::create(kv, no_media).await.unwrap_err();
    assert!(matches!(err, VinylError::Validation(_)));

    // Nothing was written
    assert!(tracks::get_all(kv).await.expect("Query failed").is_empty());
}

#[tokio::test]
async fn test_duplicate_id_conflicts_and_keeps_original() {
    let store = TestStore::new();
    let kv = store.kv();

    let original = track_input("Original", "Artist").into_track(TrackId::new("t1"));
    entity::create::<tracks::TrackKind>(kv, &original)
        .await
        .expect("Failed to create track");

    let imposter = track_input("Imposter", "Artist").into_track(TrackId::new("t1"));
    let err = entity::create::<tracks::TrackKind>(kv, &imposter)
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let stored = tracks::get_by_id(kv, &TrackId::new("t1"))
        .await
        .expect("Query failed")
        .expect("Track not found");
    assert_eq!(stored.title, "Original");

    // The index still holds the id exactly once
    let all = tracks::get_all(kv).await.expect("Failed to list tracks");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_search_matches_title_and_artist_case_insensitively() {
    let store = TestStore::new();
    let kv = store.kv();

    create_test_track(kv, "Glass Harbor", "Marrow & Pine").await;
    create_test_track(kv, "Night Market", "Ada Quinn").await;

    let by_title = tracks::search(kv, "gLaSs").await.expect("Search failed");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Glass Harbor");

    let by_artist = tracks::search(kv, "quinn").await.expect("Search failed");
    assert_eq!(by_artist.len(), 1);
    assert_eq!(by_artist[0].title, "Night Market");

    let no_match = tracks::search(kv, "zeppelin").await.expect("Search failed");
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn test_search_with_blank_query_returns_nothing() {
    let store = TestStore::new();
    let kv = store.kv();

    create_test_track(kv, "Anything", "Anyone").await;

    assert!(tracks::search(kv, "").await.expect("Search failed").is_empty());
    assert!(tracks::search(kv, "   ").await.expect("Search failed").is_empty());
}
