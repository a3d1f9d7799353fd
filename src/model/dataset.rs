use super::{Playlist, Song, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete library dataset containing users, playlists, and songs
///
/// Collections keep document order; field order matches the document shape
/// (`users`, `playlists`, `songs`) so serialization round-trips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// All users, in document order
    pub users: Vec<User>,

    /// All playlists, in document order
    pub playlists: Vec<Playlist>,

    /// All songs, in document order
    pub songs: Vec<Song>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            playlists: Vec::new(),
            songs: Vec::new(),
        }
    }

    /// Set of all user ids, for O(1) membership tests
    pub fn user_ids(&self) -> HashSet<&str> {
        self.users.iter().map(|u| u.id.as_str()).collect()
    }

    /// Set of all playlist ids, for O(1) membership tests
    pub fn playlist_ids(&self) -> HashSet<&str> {
        self.playlists.iter().map(|p| p.id.as_str()).collect()
    }

    /// Set of all song ids, for O(1) membership tests
    pub fn song_ids(&self) -> HashSet<&str> {
        self.songs.iter().map(|s| s.id.as_str()).collect()
    }

    /// Total number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new();
        assert_eq!(dataset.user_count(), 0);
        assert_eq!(dataset.playlist_count(), 0);
        assert_eq!(dataset.song_count(), 0);
    }

    #[test]
    fn test_id_sets() {
        let dataset = Dataset {
            users: vec![User {
                id: "u1".to_string(),
                name: "Alice".to_string(),
            }],
            playlists: vec![Playlist {
                id: "1".to_string(),
                owner_id: "u1".to_string(),
                song_ids: vec!["s1".to_string()],
            }],
            songs: vec![
                Song {
                    id: "s1".to_string(),
                    artist: "Artist".to_string(),
                    title: "Title".to_string(),
                },
                Song {
                    id: "s2".to_string(),
                    artist: "Artist".to_string(),
                    title: "Title".to_string(),
                },
            ],
        };

        assert!(dataset.user_ids().contains("u1"));
        assert!(!dataset.user_ids().contains("u2"));
        assert!(dataset.playlist_ids().contains("1"));
        assert_eq!(dataset.song_ids().len(), 2);
        assert!(dataset.song_ids().contains("s2"));
    }

    #[test]
    fn test_document_shape_round_trips() {
        let json = r#"{
            "users": [{"id": "u1", "name": "Alice"}],
            "playlists": [{"id": "1", "owner_id": "u1", "song_ids": ["s1"]}],
            "songs": [{"id": "s1", "artist": "A", "title": "T"}]
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.user_count(), 1);
        assert_eq!(dataset.playlists[0].song_ids, vec!["s1".to_string()]);

        let reencoded = serde_json::to_string(&dataset).unwrap();
        let reparsed: Dataset = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(reparsed, dataset);
    }
}
