use serde::{Deserialize, Serialize};

/// An ordered playlist owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier for this playlist (a decimal integer encoded as a string)
    pub id: String,

    /// Owning user (references User::id)
    pub owner_id: String,

    /// Songs in playlist order (each references Song::id)
    pub song_ids: Vec<String>,
}

impl Playlist {
    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.song_ids.len()
    }

    /// Check if playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.song_ids.is_empty()
    }
}
