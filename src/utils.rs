use std::cmp::Ordering;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Datelike, NaiveDate};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Playlist, PlaylistItem, Track, TrackTableRow};

pub const LOCAL_URI_PREFIX: &str = "spotify:local:";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Converts a playlist item into a [`Track`].
///
/// Returns `None` for items whose track was removed from the catalogue.
pub fn parse_track(item: &PlaylistItem, index: usize) -> Option<Track> {
    let track = item.track.as_ref()?;
    let local = item.is_local || track.uri.starts_with(LOCAL_URI_PREFIX);

    Some(Track {
        index,
        id: track.id.clone().unwrap_or_else(|| track.uri.clone()),
        uri: track.uri.clone(),
        name: track.name.clone(),
        artists: track.artists.iter().map(|a| a.name.clone()).collect(),
        image: track
            .album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.clone()),
        release_date: track.album.as_ref().and_then(|a| a.release_date.clone()),
        local,
        contributor_id: item.added_by.as_ref().map(|a| a.id.clone()),
    })
}

pub fn parse_tracks(items: &[PlaylistItem]) -> Vec<Track> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| parse_track(item, index))
        .collect()
}

/// Drops tracks that cannot be queued for playback.
pub fn playable_tracks(tracks: Vec<Track>) -> Vec<Track> {
    tracks.into_iter().filter(|t| !t.local).collect()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats a Spotify release date for display, e.g. `2021-03-03` becomes
/// `March 3rd, 2021`.
///
/// Year and year-month precision dates are shown as far as they are known.
pub fn to_readable_date(date: &str) -> String {
    let padded = match date.len() {
        4 => format!("{}-01-01", date),
        7 => format!("{}-01", date),
        _ => date.to_string(),
    };

    let Ok(parsed) = NaiveDate::parse_from_str(&padded, "%Y-%m-%d") else {
        return "Invalid Format".to_string();
    };

    match date.len() {
        4 => parsed.year().to_string(),
        7 => parsed.format("%B %Y").to_string(),
        _ => format!(
            "{} {}{}, {}",
            parsed.format("%B"),
            parsed.day(),
            ordinal_suffix(parsed.day()),
            parsed.year()
        ),
    }
}

/// Truncates `value` to `length` characters and appends `trail` when cut.
pub fn clamp_string(value: &str, length: usize, trail: &str) -> String {
    if value.chars().count() > length {
        let mut clamped: String = value.chars().take(length).collect();
        clamped.push_str(trail);
        clamped
    } else {
        value.to_string()
    }
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(position, track)| TrackTableRow {
            position: position + 1,
            name: clamp_string(&track.name, 48, "..."),
            artists: clamp_string(&track.artists.join(", "), 40, "..."),
            released: track
                .release_date
                .as_deref()
                .map(to_readable_date)
                .unwrap_or_default(),
        })
        .collect()
}

/// Largest playlists first, ties by name.
pub fn sort_playlists_by_size(playlists: &mut [Playlist]) {
    playlists.sort_by(|a, b| match b.tracks.total.cmp(&a.tracks.total) {
        Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        other => other,
    });
}
