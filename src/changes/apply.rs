//! Change application
//!
//! Folds a change-set over a dataset, producing a new dataset. Validation is
//! always on: changes that reference unknown users, playlists, or songs are
//! dropped, and song lists are filtered down to songs the catalog knows.

use super::model::Change;
use crate::model::{Dataset, Playlist};
use std::collections::{HashMap, HashSet};

/// Apply a batch of changes to a dataset, returning the updated dataset
///
/// Changes are processed in input order. Invalid changes (unknown owner,
/// unknown target playlist, or no valid songs left after filtering) are
/// dropped without affecting the rest of the batch. `users` and `songs` pass
/// through untouched; only the playlist list is rebuilt.
pub fn apply_changes(dataset: &Dataset, changes: &[Change]) -> Dataset {
    let user_ids = dataset.user_ids();
    let playlist_ids = dataset.playlist_ids();
    let song_ids = dataset.song_ids();

    // Accumulators for the three change kinds
    let mut new_playlists: Vec<Playlist> = Vec::new();
    let mut pending_songs: HashMap<&str, Vec<String>> = HashMap::new();
    let mut deleted_ids: HashSet<&str> = HashSet::new();

    // New playlists take ids after the highest existing one; the counter
    // only advances on accepted creations
    let mut next_id = next_playlist_id(&dataset.playlists);

    for change in changes {
        match change {
            Change::AddPlaylist {
                user_id,
                song_ids: requested,
            } => {
                if !user_ids.contains(user_id.as_str()) {
                    log::debug!("Dropping ADD_PLAYLIST for unknown user {}", user_id);
                    continue;
                }
                let songs = known_songs(requested, &song_ids);
                if songs.is_empty() {
                    log::debug!("Dropping ADD_PLAYLIST for user {}: no known songs", user_id);
                    continue;
                }
                new_playlists.push(Playlist {
                    id: next_id.to_string(),
                    owner_id: user_id.clone(),
                    song_ids: songs,
                });
                next_id += 1;
            }

            Change::AddSongs {
                playlist_id,
                song_ids: requested,
            } => {
                if !playlist_ids.contains(playlist_id.as_str()) {
                    log::debug!("Dropping ADD_SONGS for unknown playlist {}", playlist_id);
                    continue;
                }
                let songs = known_songs(requested, &song_ids);
                if songs.is_empty() {
                    log::debug!(
                        "Dropping ADD_SONGS for playlist {}: no known songs",
                        playlist_id
                    );
                    continue;
                }
                pending_songs
                    .entry(playlist_id.as_str())
                    .or_default()
                    .extend(songs);
            }

            Change::DeletePlaylist { playlist_id } => {
                // No existence check: deleting an unknown id is a no-op
                deleted_ids.insert(playlist_id.as_str());
            }
        }
    }

    // Rebuild the pre-existing playlists in original order, then append the
    // newly created ones
    let mut playlists = Vec::with_capacity(dataset.playlists.len() + new_playlists.len());
    for playlist in &dataset.playlists {
        if deleted_ids.contains(playlist.id.as_str()) {
            log::debug!("Deleting playlist {}", playlist.id);
            continue;
        }
        match pending_songs.remove(playlist.id.as_str()) {
            Some(additions) => {
                let merged = merge_songs(playlist, additions);
                log::debug!(
                    "Playlist {}: {} -> {} songs",
                    playlist.id,
                    playlist.len(),
                    merged.len()
                );
                playlists.push(merged);
            }
            None => playlists.push(playlist.clone()),
        }
    }
    playlists.extend(new_playlists);

    Dataset {
        users: dataset.users.clone(),
        playlists,
        songs: dataset.songs.clone(),
    }
}

/// Filter a requested song list down to ids present in the catalog
fn known_songs(requested: &[String], catalog: &HashSet<&str>) -> Vec<String> {
    requested
        .iter()
        .filter(|id| {
            let known = catalog.contains(id.as_str());
            if !known {
                log::debug!("Ignoring unknown song id {}", id);
            }
            known
        })
        .cloned()
        .collect()
}

/// Append additions to a playlist, skipping ids it already contains
///
/// The original entries are kept verbatim; additions dedup against both the
/// original list and earlier additions, preserving first-occurrence order.
fn merge_songs(playlist: &Playlist, additions: Vec<String>) -> Playlist {
    let mut seen: HashSet<String> = playlist.song_ids.iter().cloned().collect();
    let mut song_ids = playlist.song_ids.clone();
    for id in additions {
        if seen.insert(id.clone()) {
            song_ids.push(id);
        }
    }

    Playlist {
        id: playlist.id.clone(),
        owner_id: playlist.owner_id.clone(),
        song_ids,
    }
}

/// First id for newly created playlists: one past the highest existing
/// numeric id
///
/// Playlist ids are decimal integers encoded as strings; ids that do not
/// parse do not participate in the maximum. An empty playlist list starts
/// the numbering at 1.
fn next_playlist_id(playlists: &[Playlist]) -> u64 {
    playlists
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}
