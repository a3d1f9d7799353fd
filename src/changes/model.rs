//! Change records: wire shape and validated model
//!
//! On the wire, every change is one record with a `type` discriminator and a
//! union of per-kind fields. Records are converted into the closed [`Change`]
//! enum before application; conversion is where unrecognized discriminators
//! and missing required fields surface, so the applicator never sees either.

use serde::Deserialize;
use thiserror::Error;

/// A single validated change, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Create a new playlist owned by `user_id`, seeded with `song_ids`
    AddPlaylist {
        user_id: String,
        song_ids: Vec<String>,
    },

    /// Append `song_ids` to the existing playlist `playlist_id`
    AddSongs {
        playlist_id: String,
        song_ids: Vec<String>,
    },

    /// Remove the playlist `playlist_id`
    DeletePlaylist { playlist_id: String },
}

/// Change-set document: `{"changes": [...]}`
#[derive(Debug, Deserialize)]
pub struct ChangeSetDocument {
    /// Change records in application order
    pub changes: Vec<ChangeRecord>,
}

/// One change entry as stored in the change-set document
///
/// Every field except `type` is optional on the wire; which ones are required
/// depends on the discriminator. Fields a given type does not use are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRecord {
    /// Change kind discriminator (`ADD_SONGS` | `ADD_PLAYLIST` | `DELETE_PLAYLIST`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Owner of the playlist to create (`ADD_PLAYLIST`)
    #[serde(default)]
    pub user_id: Option<String>,

    /// Target playlist (`ADD_SONGS`, `DELETE_PLAYLIST`)
    #[serde(default)]
    pub playlist_id: Option<String>,

    /// Songs to seed or append (`ADD_PLAYLIST`, `ADD_SONGS`)
    #[serde(default)]
    pub song_ids: Option<Vec<String>>,
}

/// Failure to turn a [`ChangeRecord`] into a [`Change`]
///
/// The two cases carry different policies: an unknown discriminator is
/// skippable (logged, batch continues), a missing required field means the
/// document itself is malformed and the run aborts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeRecordError {
    /// Discriminator is none of the three recognized kinds
    #[error("Unknown change type: {0}")]
    UnknownType(String),

    /// Recognized kind, but a field it requires is absent
    #[error("{kind} change is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl TryFrom<ChangeRecord> for Change {
    type Error = ChangeRecordError;

    fn try_from(record: ChangeRecord) -> Result<Self, Self::Error> {
        match record.kind.as_str() {
            "ADD_PLAYLIST" => Ok(Change::AddPlaylist {
                user_id: require(record.user_id, "ADD_PLAYLIST", "user_id")?,
                song_ids: require(record.song_ids, "ADD_PLAYLIST", "song_ids")?,
            }),
            "ADD_SONGS" => Ok(Change::AddSongs {
                playlist_id: require(record.playlist_id, "ADD_SONGS", "playlist_id")?,
                song_ids: require(record.song_ids, "ADD_SONGS", "song_ids")?,
            }),
            "DELETE_PLAYLIST" => Ok(Change::DeletePlaylist {
                playlist_id: require(record.playlist_id, "DELETE_PLAYLIST", "playlist_id")?,
            }),
            _ => Err(ChangeRecordError::UnknownType(record.kind)),
        }
    }
}

fn require<T>(
    value: Option<T>,
    kind: &'static str,
    field: &'static str,
) -> Result<T, ChangeRecordError> {
    value.ok_or(ChangeRecordError::MissingField { kind, field })
}
