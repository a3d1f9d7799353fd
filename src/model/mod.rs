//! Unified data model for the music library dataset
//!
//! This module defines the structures shared by the input and output
//! documents: users, songs, playlists, and the dataset that holds them.

mod user;
mod song;
mod playlist;
mod dataset;

pub use user::User;
pub use song::Song;
pub use playlist::Playlist;
pub use dataset::Dataset;
