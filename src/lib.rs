//! listpatch - batch playlist changes for a music library dataset
//!
//! This library applies an ordered batch of declarative change records
//! (create playlist, append songs, delete playlist) to a dataset of users,
//! playlists, and songs, producing a new dataset.

pub mod changes;
pub mod model;
pub mod store;

pub use changes::{apply_changes, Change};
pub use model::{Dataset, Playlist, Song, User};
