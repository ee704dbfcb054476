use trueshuffle::spotify::player::{PLAYBACK_URI_LIMIT, playback_uris};

fn create_test_uris(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("spotify:track:t{}", i)).collect()
}

#[test]
fn test_playback_uris_caps_long_queues() {
    let uris = create_test_uris(150);

    let playable = playback_uris(&uris);

    assert_eq!(playable.len(), PLAYBACK_URI_LIMIT);
    assert_eq!(playable[0], "spotify:track:t0");
    assert_eq!(playable[PLAYBACK_URI_LIMIT - 1], "spotify:track:t99");
}

#[test]
fn test_playback_uris_keeps_short_queues() {
    let uris = create_test_uris(20);
    assert_eq!(playback_uris(&uris), uris.as_slice());

    let exact = create_test_uris(PLAYBACK_URI_LIMIT);
    assert_eq!(playback_uris(&exact).len(), PLAYBACK_URI_LIMIT);

    assert!(playback_uris(&[]).is_empty());
}
