use std::{io::ErrorKind, path::PathBuf};

use crate::{
    config,
    types::{Track, TrackCache},
};

/// Local cache of parsed playlist tracks.
///
/// Each playlist is stored in its own JSON file together with the snapshot
/// id it was fetched at. A lookup with a newer snapshot id deletes the stale
/// file, so an edited playlist is always fetched again.
pub struct TrackCacheManager {
    root: PathBuf,
}

impl TrackCacheManager {
    pub fn new() -> Self {
        Self::with_root(config::data_dir().join("cache/tracks"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub async fn load(
        &self,
        playlist_id: &str,
        snapshot_id: &str,
    ) -> Result<Option<Vec<Track>>, String> {
        let path = self.cache_path(playlist_id);
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };

        let cache: TrackCache = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        if cache.snapshot_id != snapshot_id {
            self.remove(playlist_id).await?;
            return Ok(None);
        }

        Ok(Some(cache.tracks))
    }

    pub async fn persist(
        &self,
        playlist_id: &str,
        snapshot_id: &str,
        tracks: &[Track],
    ) -> Result<(), String> {
        let path = self.cache_path(playlist_id);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let cache = TrackCache {
            playlist_id: playlist_id.to_string(),
            snapshot_id: snapshot_id.to_string(),
            tracks: tracks.to_vec(),
        };
        let json = serde_json::to_string(&cache).map_err(|e| e.to_string())?;
        async_fs::write(path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn remove(&self, playlist_id: &str) -> Result<(), String> {
        match async_fs::remove_file(self.cache_path(playlist_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    fn cache_path(&self, playlist_id: &str) -> PathBuf {
        // ids are base62, anything else must not escape the cache directory
        let file: String = playlist_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
            .collect();
        self.root.join(format!("{file}.json"))
    }
}

impl Default for TrackCacheManager {
    fn default() -> Self {
        Self::new()
    }
}
