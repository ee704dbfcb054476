use tempfile::tempdir;
use trueshuffle::management::{TokenManager, TrackCacheManager};
use trueshuffle::types::{Token, Track};

fn create_test_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track {
            index: i,
            id: format!("t{}", i),
            uri: format!("spotify:track:t{}", i),
            name: format!("Track {}", i),
            artists: vec!["Test Artist".to_string()],
            image: Some("https://i.scdn.co/image/cover".to_string()),
            release_date: Some("2020-01-01".to_string()),
            local: false,
            contributor_id: Some(format!("user{}", i % 3)),
        })
        .collect()
}

fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[tokio::test]
async fn test_track_cache_round_trip() {
    let dir = tempdir().unwrap();
    let cache = TrackCacheManager::with_root(dir.path().to_path_buf());
    let tracks = create_test_tracks(5);

    cache.persist("playlist1", "snap1", &tracks).await.unwrap();
    let loaded = cache.load("playlist1", "snap1").await.unwrap();

    assert_eq!(loaded, Some(tracks));
}

#[tokio::test]
async fn test_track_cache_missing_entry() {
    let dir = tempdir().unwrap();
    let cache = TrackCacheManager::with_root(dir.path().join("not-created-yet"));

    assert_eq!(cache.load("unknown", "snap").await.unwrap(), None);
    assert!(cache.remove("unknown").await.is_ok());
}

#[tokio::test]
async fn test_track_cache_expires_on_new_snapshot() {
    let dir = tempdir().unwrap();
    let cache = TrackCacheManager::with_root(dir.path().to_path_buf());

    cache
        .persist("playlist1", "snap1", &create_test_tracks(3))
        .await
        .unwrap();

    // the playlist changed, so the entry is dropped
    assert_eq!(cache.load("playlist1", "snap2").await.unwrap(), None);

    // and it stays gone for the old snapshot as well
    assert_eq!(cache.load("playlist1", "snap1").await.unwrap(), None);
}

#[tokio::test]
async fn test_track_cache_keeps_playlists_apart() {
    let dir = tempdir().unwrap();
    let cache = TrackCacheManager::with_root(dir.path().to_path_buf());

    cache
        .persist("first", "snap", &create_test_tracks(2))
        .await
        .unwrap();
    cache
        .persist("second", "snap", &create_test_tracks(4))
        .await
        .unwrap();

    let first = cache.load("first", "snap").await.unwrap().unwrap();
    let second = cache.load("second", "snap").await.unwrap().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 4);
}

#[tokio::test]
async fn test_track_cache_sanitizes_ids() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tracks");
    let cache = TrackCacheManager::with_root(root.clone());

    cache
        .persist("../escape", "snap", &create_test_tracks(1))
        .await
        .unwrap();

    assert!(!dir.path().join("escape.json").exists());
    assert!(cache.load("../escape", "snap").await.unwrap().is_some());
    assert_eq!(std::fs::read_dir(&root).unwrap().count(), 1);
}

#[tokio::test]
async fn test_track_cache_overwrites_entry() {
    let dir = tempdir().unwrap();
    let cache = TrackCacheManager::with_root(dir.path().to_path_buf());

    cache
        .persist("playlist1", "snap1", &create_test_tracks(3))
        .await
        .unwrap();
    cache
        .persist("playlist1", "snap2", &create_test_tracks(6))
        .await
        .unwrap();

    let loaded = cache.load("playlist1", "snap2").await.unwrap().unwrap();
    assert_eq!(loaded.len(), 6);
}

#[test]
fn test_token_expiry() {
    let manager = TokenManager::new(create_test_token(1_000, 3_600));

    assert!(!manager.is_expired_at(1_000));
    assert!(!manager.is_expired_at(4_359));

    // refreshed a few minutes ahead of the reported expiry
    assert!(manager.is_expired_at(4_360));
    assert!(manager.is_expired_at(10_000));
}
