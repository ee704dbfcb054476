//! Configuration management for trueshuffle.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Spotify endpoints fall back to the public defaults,
//! credentials and the callback server address have to be provided by the user.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{error, warning};

const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private playlist-read-private playlist-read-collaborative user-modify-playback-state user-library-read user-read-playback-state";
const DEFAULT_QUEUE_CAP: usize = 100;

/// Returns the application's directory inside the platform data directory.
///
/// - Linux: `~/.local/share/trueshuffle`
/// - macOS: `~/Library/Application Support/trueshuffle`
/// - Windows: `%LOCALAPPDATA%/trueshuffle`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trueshuffle");
    path
}

/// Loads environment variables from `trueshuffle/.env` in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is not an error, the
/// variables may come from the environment alone; a warning is printed instead.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::from_path(&path) {
        warning!("No configuration loaded from {}: {}", path.display(), e);
    }
    Ok(())
}

fn required(key: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => error!("{} must be set", key),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> String {
    required("SERVER_ADDRESS")
}

/// Client id of the registered Spotify application.
pub fn spotify_client_id() -> String {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Callback URL registered with the Spotify application.
pub fn spotify_redirect_uri() -> String {
    required("SPOTIFY_API_REDIRECT_URI")
}

pub fn spotify_scope() -> String {
    optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    optional(
        "SPOTIFY_API_AUTH_URL",
        "https://accounts.spotify.com/authorize",
    )
}

pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", "https://api.spotify.com/v1")
}

pub fn spotify_apitoken_url() -> String {
    optional(
        "SPOTIFY_API_TOKEN_URL",
        "https://accounts.spotify.com/api/token",
    )
}

/// Maximum number of tracks handed to the player in one request.
///
/// The playback endpoint accepts at most 100 URIs, which is also the default.
/// Invalid values fall back to the default with a warning.
pub fn queue_cap() -> usize {
    match env::var("TRUESHUFFLE_QUEUE_CAP") {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(cap) if cap > 0 => cap,
            _ => {
                warning!(
                    "Ignoring TRUESHUFFLE_QUEUE_CAP={}, using {}",
                    raw,
                    DEFAULT_QUEUE_CAP
                );
                DEFAULT_QUEUE_CAP
            }
        },
        Err(_) => DEFAULT_QUEUE_CAP,
    }
}

/// Name of the playlist the queue is written to for accounts without premium.
pub fn temporary_playlist_name() -> String {
    optional("TRUESHUFFLE_TEMPORARY_PLAYLIST", "Temporary True Shuffle")
}
