//! # CLI Module
//!
//! This module provides the command-line interface layer for trueshuffle. It
//! implements all user-facing commands and coordinates between the Spotify
//! client, the local caches and the shuffle engine.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates Spotify OAuth authentication flow with PKCE security
//!
//! ### Library
//!
//! - [`list_playlists`] - Shows the user's playlists, largest first, plus the
//!   liked songs pseudo playlist
//! - [`list_devices`] - Shows the devices a queue can be played on
//!
//! ### Shuffling
//!
//! - [`shuffle`] - Fetches a playlist, shuffles it and prints, plays or saves
//!   the resulting queue
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token / Track Cache)      Shuffle Engine
//!     ↓                                             ↑
//! API Layer (Spotify Integration)  ── tracks ───────┘
//! ```
//!
//! Each command loads a valid token, shows a spinner or progress bar while
//! talking to Spotify and reports the outcome with the `info!`, `success!`,
//! `warning!` and `error!` macros. Fatal problems such as a missing token end
//! the process through `error!`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! trueshuffle auth                                   # Authenticate with Spotify
//! trueshuffle playlists --search road                # Find a playlist id
//! trueshuffle devices                                # Find a device id
//! trueshuffle shuffle --playlist <ID> --device <ID>  # Shuffle and play
//! trueshuffle shuffle --playlist liked --seed 42     # Reproducible preview
//! ```

mod auth;
mod devices;
mod playlists;
mod shuffle;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager};

pub use auth::auth;
pub use devices::list_devices;
pub use playlists::list_playlists;
pub use shuffle::{ShuffleRequest, shuffle};

pub(crate) async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run trueshuffle auth\n Error: {}",
                e
            );
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn progress_bar(message: &str, total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_message(message.to_string());
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{pos}/{len}] {wide_bar:.blue}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
