use serde::de::DeserializeOwned;

use crate::{
    config,
    spotify::{client, paged_url, send},
    types::{
        CreatePlaylistRequest, Page, Playlist, PlaylistItem, Profile, SnapshotResponse,
        TrackUrisRequest,
    },
};

/// Page size used for every paginated endpoint (the API maximum).
pub const PAGE_LIMIT: u64 = 50;

/// Pseudo playlist id under which the user's liked songs are handled.
pub const LIKED_SONGS_PLAYLIST_ID: &str = "user_saved_tracks";

/// Retrieves the profile of the user owning `token`.
pub async fn get_profile(token: &str) -> Result<Profile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());
    let response = send(|| client().get(&api_url).bearer_auth(token))
        .await?
        .error_for_status()?;

    response.json::<Profile>().await
}

/// Follows `next` links of an offset paginated endpoint until the last page.
///
/// `on_progress` is called after every page with the number of items fetched
/// so far and the total reported by the API.
async fn fetch_all_pages<T, P>(
    token: &str,
    endpoint: &str,
    mut on_progress: P,
) -> Result<Vec<T>, reqwest::Error>
where
    T: DeserializeOwned,
    P: FnMut(u64, Option<u64>),
{
    let mut items: Vec<T> = Vec::new();
    let mut offset = 0;

    loop {
        let api_url = paged_url(endpoint, PAGE_LIMIT, offset);
        let response = send(|| client().get(&api_url).bearer_auth(token))
            .await?
            .error_for_status()?;
        let page = response.json::<Page<T>>().await?;

        let fetched = page.items.len() as u64;
        items.extend(page.items);
        on_progress(items.len() as u64, page.total);

        if page.next.is_none() || fetched == 0 {
            break;
        }
        offset += PAGE_LIMIT;
    }

    Ok(items)
}

/// Retrieves all playlists the user owns or follows.
pub async fn get_playlists(token: &str) -> Result<Vec<Playlist>, reqwest::Error> {
    let endpoint = format!("{uri}/me/playlists", uri = &config::spotify_apiurl());
    fetch_all_pages(token, &endpoint, |_, _| {}).await
}

/// Retrieves a single playlist's metadata without its tracks.
pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}?fields=id,name,owner,collaborative,snapshot_id,tracks.total",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    let response = send(|| client().get(&api_url).bearer_auth(token))
        .await?
        .error_for_status()?;

    response.json::<Playlist>().await
}

/// Retrieves every item of a playlist, including who added each track.
pub async fn get_playlist_tracks<P>(
    token: &str,
    playlist_id: &str,
    on_progress: P,
) -> Result<Vec<PlaylistItem>, reqwest::Error>
where
    P: FnMut(u64, Option<u64>),
{
    let endpoint = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    fetch_all_pages(token, &endpoint, on_progress).await
}

/// Retrieves the user's liked songs. Liked songs carry no contributor.
pub async fn get_liked_tracks<P>(
    token: &str,
    on_progress: P,
) -> Result<Vec<PlaylistItem>, reqwest::Error>
where
    P: FnMut(u64, Option<u64>),
{
    let endpoint = format!("{uri}/me/tracks", uri = &config::spotify_apiurl());
    fetch_all_pages(token, &endpoint, on_progress).await
}

/// Number of liked songs, read from a single one-item page.
pub async fn get_liked_count(token: &str) -> Result<u64, reqwest::Error> {
    let api_url = paged_url(
        &format!("{uri}/me/tracks", uri = &config::spotify_apiurl()),
        1,
        0,
    );
    let response = send(|| client().get(&api_url).bearer_auth(token))
        .await?
        .error_for_status()?;
    let page = response.json::<Page<PlaylistItem>>().await?;

    Ok(page.total.unwrap_or(0))
}

/// Creates a private playlist for `user_id`.
pub async fn create_playlist(
    token: &str,
    user_id: &str,
    name: &str,
    description: &str,
) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
    };

    let response = send(|| client().post(&api_url).bearer_auth(token).json(&body))
        .await?
        .error_for_status()?;
    response.json::<Playlist>().await
}

/// Maximum number of URIs accepted by the playlist track endpoints.
pub const PLAYLIST_URI_LIMIT: usize = 100;

/// Replaces all tracks of a playlist with `uris`, keeping their order.
///
/// The endpoint accepts at most [`PLAYLIST_URI_LIMIT`] URIs per request.
pub async fn replace_playlist_tracks(
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<SnapshotResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    let body = TrackUrisRequest {
        uris: uris.to_vec(),
    };

    let response = send(|| client().put(&api_url).bearer_auth(token).json(&body))
        .await?
        .error_for_status()?;
    response.json::<SnapshotResponse>().await
}

/// Appends `uris` to the end of a playlist, in order.
pub async fn add_playlist_tracks(
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<SnapshotResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    let body = TrackUrisRequest {
        uris: uris.to_vec(),
    };

    let response = send(|| client().post(&api_url).bearer_auth(token).json(&body))
        .await?
        .error_for_status()?;
    response.json::<SnapshotResponse>().await
}
