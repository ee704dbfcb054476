use rand::{SeedableRng, rngs::StdRng};
use tabled::Table;

use crate::{
    Res,
    cli::{load_token_manager, playlists::LIKED_ALIAS, progress_bar},
    config, error, info,
    management::TrackCacheManager,
    shuffle::{Strategy, shuffle_queue},
    spotify::{
        self,
        library::{LIKED_SONGS_PLAYLIST_ID, PLAYLIST_URI_LIMIT},
    },
    success,
    types::Track,
    utils, warning,
};

/// Everything `trueshuffle shuffle` was asked to do.
#[derive(Debug, Clone)]
pub struct ShuffleRequest {
    /// Playlist id, or `liked` for the liked songs
    pub playlist: String,
    /// Device to play on; without it the queue is only printed
    pub device: Option<String>,
    /// Queue length, defaults to `TRUESHUFFLE_QUEUE_CAP`
    pub cap: Option<usize>,
    pub strategy: Strategy,
    /// Window size for the batch shuffle
    pub window: Option<usize>,
    /// Seed for a reproducible order
    pub seed: Option<u64>,
    pub use_cache: bool,
}

/// Shuffles a playlist and prints, plays or saves the resulting queue.
///
/// # Flow
///
/// 1. Loads the playlist's tracks from the track cache, or from Spotify when
///    the cache is missing, disabled or holds an older snapshot
/// 2. Drops local files, which cannot be played through the API
/// 3. Runs [`shuffle_queue`] with the requested strategy and cap
/// 4. Prints the queue
/// 5. With a device: turns off the device's own shuffle and starts playback.
///    Accounts without premium cannot control playback, so the queue is
///    written into the temporary playlist instead.
pub async fn shuffle(request: ShuffleRequest) {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let fetched = if is_liked(&request.playlist) {
        fetch_liked_tracks(&token).await
    } else {
        fetch_playlist_tracks(&token, &request.playlist, request.use_cache).await
    };

    let tracks = match fetched {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to retrieve tracks: {}", e),
    };

    let total = tracks.len();
    let tracks = utils::playable_tracks(tracks);
    if tracks.len() < total {
        info!("Skipping {} local tracks", total - tracks.len());
    }

    if tracks.is_empty() {
        warning!("Playlist has no playable tracks.");
        return;
    }

    let cap = request.cap.unwrap_or_else(config::queue_cap);
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        "Shuffling {} tracks with the {} strategy",
        tracks.len(),
        request.strategy
    );
    let queue = match shuffle_queue(tracks, cap, request.strategy, request.window, &mut rng) {
        Ok(queue) => queue,
        Err(e) => error!("Cannot shuffle playlist: {}", e),
    };

    println!("{}", Table::new(utils::track_table_rows(&queue)));
    success!("Queued {} tracks", queue.len());

    let Some(device) = request.device else {
        return;
    };

    let uris: Vec<String> = queue.iter().map(|t| t.uri.clone()).collect();
    if let Err(e) = start_playback(&token, &device, &uris).await {
        error!("Failed to hand the queue to Spotify: {}", e);
    }
}

fn is_liked(playlist: &str) -> bool {
    playlist.eq_ignore_ascii_case(LIKED_ALIAS) || playlist == LIKED_SONGS_PLAYLIST_ID
}

async fn fetch_liked_tracks(token: &str) -> Res<Vec<Track>> {
    let total = spotify::library::get_liked_count(token).await?;
    let pb = progress_bar("Retrieving liked songs...", total);

    let items = spotify::library::get_liked_tracks(token, |fetched, total| {
        if let Some(total) = total {
            pb.set_length(total);
        }
        pb.set_position(fetched);
    })
    .await;
    pb.finish_and_clear();

    Ok(utils::parse_tracks(&items?))
}

async fn fetch_playlist_tracks(
    token: &str,
    playlist_id: &str,
    use_cache: bool,
) -> Res<Vec<Track>> {
    let playlist = spotify::library::get_playlist(token, playlist_id).await?;
    let cache = TrackCacheManager::new();

    if use_cache {
        match cache.load(&playlist.id, &playlist.snapshot_id).await {
            Ok(Some(tracks)) => {
                info!("Loaded {} tracks of {} from cache", tracks.len(), playlist.name);
                return Ok(tracks);
            }
            Ok(None) => {}
            Err(e) => warning!("Ignoring track cache: {}", e),
        }
    }

    let pb = progress_bar(
        &format!("Retrieving {}...", playlist.name),
        playlist.tracks.total,
    );
    let items = spotify::library::get_playlist_tracks(token, &playlist.id, |fetched, total| {
        if let Some(total) = total {
            pb.set_length(total);
        }
        pb.set_position(fetched);
    })
    .await;
    pb.finish_and_clear();

    let tracks = utils::parse_tracks(&items?);
    success!("Retrieved {} tracks of {}", tracks.len(), playlist.name);

    if let Err(e) = cache.persist(&playlist.id, &playlist.snapshot_id, &tracks).await {
        warning!("Failed to cache tracks: {}", e);
    }

    Ok(tracks)
}

async fn start_playback(token: &str, device: &str, uris: &[String]) -> Res<()> {
    let premium = spotify::player::set_playback_shuffle(token, device, false).await?;
    if premium {
        let playable = spotify::player::playback_uris(uris).len();
        if playable < uris.len() {
            warning!(
                "Spotify plays at most {} tracks per request, skipping the last {}",
                playable,
                uris.len() - playable
            );
        }
        spotify::player::play_tracks(token, device, uris).await?;
        success!("Playback started");
        return Ok(());
    }

    warning!("Playback control requires Spotify Premium, saving the queue to a playlist instead.");
    let name = config::temporary_playlist_name();
    let playlist_id = temporary_playlist_id(token, &name).await?;

    let mut chunks = uris.chunks(PLAYLIST_URI_LIMIT);
    let first = chunks.next().unwrap_or_default();
    spotify::library::replace_playlist_tracks(token, &playlist_id, first).await?;
    for chunk in chunks {
        spotify::library::add_playlist_tracks(token, &playlist_id, chunk).await?;
    }

    success!(
        "Your shuffled music has been placed inside a temporary playlist called {}.",
        name
    );
    Ok(())
}

/// Finds the user's temporary playlist by name or creates it.
async fn temporary_playlist_id(token: &str, name: &str) -> Res<String> {
    let profile = spotify::library::get_profile(token).await?;
    let playlists = spotify::library::get_playlists(token).await?;

    if let Some(existing) = playlists
        .into_iter()
        .find(|p| p.name == name && p.owner.id == profile.id)
    {
        return Ok(existing.id);
    }

    info!("Creating temporary playlist {}", name);
    let created = spotify::library::create_playlist(
        token,
        &profile.id,
        name,
        "An automatic playlist generated by trueshuffle",
    )
    .await?;
    Ok(created.id)
}
