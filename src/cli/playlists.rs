use tabled::Table;

use crate::{
    cli::{load_token_manager, spinner},
    error, spotify,
    types::PlaylistTableRow,
    utils, warning,
};

/// Id accepted by `shuffle --playlist` for the user's liked songs.
pub const LIKED_ALIAS: &str = "liked";

pub async fn list_playlists(search: Option<String>) {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let pb = spinner("Fetching playlists...");
    let mut playlists = match spotify::library::get_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let liked_count = match spotify::library::get_liked_count(&token).await {
        Ok(count) => Some(count),
        Err(e) => {
            warning!("Failed to count liked songs: {}", e);
            None
        }
    };
    pb.finish_and_clear();

    utils::sort_playlists_by_size(&mut playlists);

    let mut rows: Vec<PlaylistTableRow> = Vec::with_capacity(playlists.len() + 1);
    if let Some(count) = liked_count {
        rows.push(PlaylistTableRow {
            id: LIKED_ALIAS.to_string(),
            name: "Liked Songs".to_string(),
            tracks: count,
            owner: "you".to_string(),
        });
    }

    rows.extend(playlists.into_iter().map(|p| PlaylistTableRow {
        id: p.id,
        name: p.name,
        tracks: p.tracks.total,
        owner: p.owner.display_name.unwrap_or(p.owner.id),
    }));

    if let Some(search) = search {
        let search_term = search.to_lowercase();
        rows.retain(|r| r.name.to_lowercase().contains(&search_term));
    }

    if rows.is_empty() {
        warning!("No playlists found.");
        return;
    }

    println!("{}", Table::new(rows));
}
