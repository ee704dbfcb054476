//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that trueshuffle
//! needs around its shuffle engine: authentication, reading playlists and
//! liked songs, and handing a shuffled queue to a playback device or to a
//! temporary playlist.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Library (Profile, Playlists, Tracks)
//!     └── Player (Devices, Shuffle State, Playback)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`library`] - Profile, playlist listing, paginated track retrieval and
//!   writing tracks into a playlist
//! - [`player`] - Device listing, toggling the device's own shuffle and
//!   starting playback of a list of URIs
//!
//! ## Error Handling
//!
//! All requests go through [`send`], which retries transient failures:
//! - **502 Bad Gateway**: waits 10 seconds and tries again
//! - **429 Too Many Requests**: honours `Retry-After` up to 120 seconds
//!
//! Both are retried at most [`MAX_RETRIES`] times. Other statuses are handed
//! back to the caller, which decides whether they are errors; the player for
//! example reads 403 as "account has no premium".
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user's profile
//! - `GET /me/playlists` - User's playlists
//! - `GET /playlists/{id}/tracks` - Playlist items including who added them
//! - `GET /me/tracks` - Liked songs
//! - `POST /users/{user_id}/playlists` - Create the temporary playlist
//! - `PUT /playlists/{id}/tracks` - Replace the temporary playlist's tracks
//! - `GET /me/player/devices` - Available devices
//! - `PUT /me/player/shuffle` - Device shuffle state
//! - `PUT /me/player/play` - Start playback
//! - `POST /api/token` - Token exchange and refresh

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::warning;

pub mod auth;
pub mod library;
pub mod player;

/// Retries spent on 502 and 429 responses before giving up.
pub const MAX_RETRIES: u32 = 5;

/// Longest `Retry-After` the client is willing to sleep through.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

pub(crate) fn client() -> Client {
    Client::new()
}

/// Sends the request produced by `build`, retrying gateway errors and rate
/// limits.
///
/// `build` is called once per attempt since a sent `RequestBuilder` cannot be
/// reused.
pub(crate) async fn send<F>(build: F) -> Result<Response, reqwest::Error>
where
    F: Fn() -> RequestBuilder,
{
    let mut attempt = 0;

    loop {
        let response = build().send().await?;
        if attempt >= MAX_RETRIES {
            return Ok(response);
        }
        attempt += 1;

        match response.status() {
            StatusCode::BAD_GATEWAY => {
                sleep(Duration::from_secs(10)).await;
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);

                if retry_after > MAX_RETRY_AFTER_SECS {
                    warning!(
                        "Retry after has reached a abnormal high of {} seconds. Try again later.",
                        retry_after
                    );
                    return Ok(response);
                }
                sleep(Duration::from_secs(retry_after)).await;
            }
            _ => return Ok(response),
        }
    }
}

/// Appends offset pagination parameters to `endpoint`.
pub(crate) fn paged_url(endpoint: &str, limit: u64, offset: u64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{endpoint}{separator}limit={limit}&offset={offset}",
        endpoint = endpoint,
        separator = separator,
        limit = limit,
        offset = offset
    )
}
