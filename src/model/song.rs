use serde::{Deserialize, Serialize};

/// A song in the library catalog
///
/// Like users, songs are immutable pass-through data: change application
/// only ever references them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier for this song
    pub id: String,

    /// Artist name
    pub artist: String,

    /// Song title
    pub title: String,
}
