use serde_json::json;
use trueshuffle::types::{Playlist, PlaylistItem, Track};
use trueshuffle::utils::*;

// Helper function to create a playlist item the way the API returns it
fn create_test_item(id: &str, name: &str, added_by: Option<&str>, is_local: bool) -> PlaylistItem {
    let added_by = added_by.map(|id| json!({ "id": id }));
    serde_json::from_value(json!({
        "added_by": added_by,
        "is_local": is_local,
        "track": {
            "id": id,
            "uri": format!("spotify:track:{}", id),
            "name": name,
            "artists": [{ "name": "First Artist" }, { "name": "Second Artist" }],
            "album": {
                "images": [
                    { "url": "https://i.scdn.co/image/large" },
                    { "url": "https://i.scdn.co/image/small" }
                ],
                "release_date": "2021-03-03"
            }
        }
    }))
    .unwrap()
}

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str, total: u64) -> Playlist {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "owner": { "id": "owner", "display_name": "Owner" },
        "collaborative": false,
        "snapshot_id": "snap",
        "tracks": { "total": total }
    }))
    .unwrap()
}

fn create_test_track(id: &str, name: &str, local: bool) -> Track {
    Track {
        index: 0,
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: name.to_string(),
        artists: vec!["Test Artist".to_string()],
        image: None,
        release_date: None,
        local,
        contributor_id: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256 digest is 32 bytes, 43 characters in unpadded base64
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_track() {
    let item = create_test_item("abc123", "Song", Some("user1"), false);

    let track = parse_track(&item, 7).unwrap();

    assert_eq!(track.index, 7);
    assert_eq!(track.id, "abc123");
    assert_eq!(track.uri, "spotify:track:abc123");
    assert_eq!(track.name, "Song");
    assert_eq!(track.artists, vec!["First Artist", "Second Artist"]);
    assert_eq!(track.image.as_deref(), Some("https://i.scdn.co/image/large"));
    assert_eq!(track.release_date.as_deref(), Some("2021-03-03"));
    assert_eq!(track.contributor_id.as_deref(), Some("user1"));
    assert!(!track.local);
}

#[test]
fn test_parse_track_local_file() {
    let item: PlaylistItem = serde_json::from_value(json!({
        "added_by": { "id": "user1" },
        "is_local": true,
        "track": {
            "id": null,
            "uri": "spotify:local:Artist:Album:Song:215",
            "name": "Song",
            "artists": [],
            "album": null
        }
    }))
    .unwrap();

    let track = parse_track(&item, 0).unwrap();

    // local files have no id, the uri stands in for it
    assert_eq!(track.id, "spotify:local:Artist:Album:Song:215");
    assert!(track.local);
    assert!(track.image.is_none());
    assert!(track.release_date.is_none());
}

#[test]
fn test_parse_tracks_skips_removed_tracks() {
    let removed: PlaylistItem = serde_json::from_value(json!({
        "added_by": null,
        "track": null
    }))
    .unwrap();
    let items = vec![
        create_test_item("a", "First", None, false),
        removed,
        create_test_item("c", "Third", Some("user2"), false),
    ];

    let tracks = parse_tracks(&items);

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].index, 0);
    assert_eq!(tracks[1].index, 2);
    assert!(tracks[0].contributor_id.is_none());
}

#[test]
fn test_playable_tracks() {
    let tracks = vec![
        create_test_track("a", "A", false),
        create_test_track("b", "B", true),
        create_test_track("c", "C", false),
    ];

    let playable = playable_tracks(tracks);

    let ids: Vec<&str> = playable.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_to_readable_date() {
    assert_eq!(to_readable_date("2021-03-03"), "March 3rd, 2021");
    assert_eq!(to_readable_date("2019-01-01"), "January 1st, 2019");
    assert_eq!(to_readable_date("2019-01-22"), "January 22nd, 2019");
    assert_eq!(to_readable_date("2020-11-11"), "November 11th, 2020");
    assert_eq!(to_readable_date("2020-12-12"), "December 12th, 2020");
    assert_eq!(to_readable_date("2020-05-13"), "May 13th, 2020");
    assert_eq!(to_readable_date("2020-05-31"), "May 31st, 2020");

    // reduced precision
    assert_eq!(to_readable_date("1999"), "1999");
    assert_eq!(to_readable_date("1999-07"), "July 1999");

    // invalid
    assert_eq!(to_readable_date("2021-13-01"), "Invalid Format");
    assert_eq!(to_readable_date("not a date"), "Invalid Format");
    assert_eq!(to_readable_date(""), "Invalid Format");
}

#[test]
fn test_clamp_string() {
    assert_eq!(clamp_string("short", 10, "..."), "short");
    assert_eq!(clamp_string("exactly10!", 10, "..."), "exactly10!");
    assert_eq!(clamp_string("a much longer title", 6, "..."), "a much...");

    // counts characters, not bytes
    assert_eq!(clamp_string("Sigur Rós Ágætis", 11, "…"), "Sigur Rós Á…");
}

#[test]
fn test_track_table_rows() {
    let mut first = create_test_track("a", "First", false);
    first.release_date = Some("2021-03-03".to_string());
    let second = create_test_track("b", "Second", false);

    let rows = track_table_rows(&[first, second]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].released, "March 3rd, 2021");
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].name, "Second");
    assert_eq!(rows[1].artists, "Test Artist");
    assert!(rows[1].released.is_empty());
}

#[test]
fn test_sort_playlists_by_size() {
    let mut playlists = vec![
        create_test_playlist("1", "beta", 10),
        create_test_playlist("2", "Road Trip", 250),
        create_test_playlist("3", "alpha", 10),
        create_test_playlist("4", "Focus", 40),
    ];

    sort_playlists_by_size(&mut playlists);

    let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Road Trip", "Focus", "alpha", "beta"]);
}
